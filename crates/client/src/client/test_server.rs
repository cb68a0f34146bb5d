//! In-process HTTP server for exercising the client against real sockets.

use axum::Router;
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns the API root
/// (`http://127.0.0.1:{port}/api`). Routes are expected under `/api`.
pub(crate) async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}/api", addr)
}

/// Returns an API root on a port nothing is listening on.
pub(crate) async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}/api", addr)
}
