//! Event fetch operations.

use eonet_core::catalog::{decode_events, Event, EventStatus};

use super::{take_batch, EonetClient, Query};
use crate::config::DEFAULT_LOOKBACK_DAYS;
use crate::error::Result;

/// Endpoint path for event listings.
pub const EVENTS_ENDPOINT: &str = "events";

impl EonetClient {
    /// Fetch one status batch of events for the lookback window.
    ///
    /// Malformed records are dropped; a response without an `events` array
    /// fails the whole batch.
    pub async fn fetch_event_batch(
        &self,
        status: EventStatus,
        lookback_days: u32,
    ) -> Result<Vec<Event>> {
        let query = Query::new(EVENTS_ENDPOINT)
            .param("days", lookback_days)
            .param("status", status.as_str());

        let response = self.request(&query).await?;
        let batch = take_batch(response, "events", EVENTS_ENDPOINT)?;
        let events = decode_events(&batch);

        if events.len() < batch.len() {
            tracing::debug!(
                %status,
                dropped = batch.len() - events.len(),
                "Dropped malformed event records"
            );
        }

        Ok(events)
    }

    /// Fetch open and closed events for the lookback window.
    ///
    /// Both batches are requested concurrently and the call waits for both.
    /// The result is the open batch followed by the closed batch, without
    /// deduplication or sorting. A batch that fails is logged and contributes
    /// nothing, so this never fails; an outage looks the same as an empty
    /// window.
    pub async fn fetch_events(&self, lookback_days: u32) -> Vec<Event> {
        let (open, closed) = tokio::join!(
            self.fetch_event_batch(EventStatus::Open, lookback_days),
            self.fetch_event_batch(EventStatus::Closed, lookback_days),
        );

        let mut events = or_empty(open, EventStatus::Open);
        events.extend(or_empty(closed, EventStatus::Closed));
        events
    }

    /// Fetch events for the default 360 day window.
    pub async fn fetch_recent_events(&self) -> Vec<Event> {
        self.fetch_events(DEFAULT_LOOKBACK_DAYS).await
    }
}

fn or_empty(batch: Result<Vec<Event>>, status: EventStatus) -> Vec<Event> {
    batch.unwrap_or_else(|error| {
        tracing::warn!(%status, %error, "Event batch failed, using empty list");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_server::{spawn_server, unreachable_base_url};
    use super::*;
    use crate::error::ClientError;
    use axum::{
        extract::Query as QueryParams, http::StatusCode, response::IntoResponse, routing::get,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;

    fn event(id: &str) -> Value {
        json!({
            "id": id,
            "title": format!("Event {}", id),
            "date": "2024-01-15T00:00:00+0000",
            "categories": ["8"],
        })
    }

    /// Serves `open` and `closed` bodies by the `status` parameter.
    async fn serve_events(open: (StatusCode, Value), closed: (StatusCode, Value)) -> EonetClient {
        let router = Router::new().route(
            "/api/events",
            get(move |QueryParams(params): QueryParams<HashMap<String, String>>| {
                let (status, body) = match params.get("status").map(String::as_str) {
                    Some("open") => open.clone(),
                    Some("closed") => closed.clone(),
                    _ => (StatusCode::BAD_REQUEST, json!({})),
                };
                async move { (status, Json(body)).into_response() }
            }),
        );
        EonetClient::new(spawn_server(router).await)
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_fetch_events_open_then_closed() {
        let client = serve_events(
            (StatusCode::OK, json!({ "events": [event("e1"), event("e2")] })),
            (StatusCode::OK, json!({ "events": [event("e3")] })),
        )
        .await;

        let events = client.fetch_events(360).await;

        assert_eq!(ids(&events), vec!["e1", "e2", "e3"]);
    }

    #[tokio::test]
    async fn test_fetch_events_keeps_cross_batch_duplicates() {
        let client = serve_events(
            (StatusCode::OK, json!({ "events": [event("e1")] })),
            (StatusCode::OK, json!({ "events": [event("e1")] })),
        )
        .await;

        assert_eq!(ids(&client.fetch_events(360).await), vec!["e1", "e1"]);
    }

    #[tokio::test]
    async fn test_fetch_events_degrades_when_closed_fails() {
        let client = serve_events(
            (StatusCode::OK, json!({ "events": [event("e1"), event("e2")] })),
            (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "boom" })),
        )
        .await;

        assert_eq!(ids(&client.fetch_events(360).await), vec!["e1", "e2"]);
    }

    #[tokio::test]
    async fn test_fetch_events_degrades_when_open_is_malformed() {
        let client = serve_events(
            (StatusCode::OK, json!({ "title": "no events key" })),
            (StatusCode::OK, json!({ "events": [event("e3")] })),
        )
        .await;

        assert_eq!(ids(&client.fetch_events(360).await), vec!["e3"]);
    }

    #[tokio::test]
    async fn test_fetch_events_network_failure_is_empty() {
        let client = EonetClient::new(unreachable_base_url().await);

        assert!(client.fetch_events(360).await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_event_batch_missing_key_is_invalid_json() {
        let client = serve_events(
            (StatusCode::OK, json!({ "items": [] })),
            (StatusCode::OK, json!({ "events": [] })),
        )
        .await;

        let result = client.fetch_event_batch(EventStatus::Open, 360).await;

        match result {
            Err(ClientError::InvalidJson { origin }) => assert_eq!(origin, EVENTS_ENDPOINT),
            other => panic!("Expected InvalidJson, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_event_batch_drops_malformed_records() {
        let client = serve_events(
            (
                StatusCode::OK,
                json!({ "events": [event("e1"), { "id": "e2", "date": "2024-01-15T00:00:00+0000" }] }),
            ),
            (StatusCode::OK, json!({ "events": [] })),
        )
        .await;

        let events = client
            .fetch_event_batch(EventStatus::Open, 360)
            .await
            .unwrap();

        assert_eq!(ids(&events), vec!["e1"]);
    }

    #[tokio::test]
    async fn test_fetch_events_sends_lookback_and_status() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let router = Router::new().route(
            "/api/events",
            get(move |QueryParams(params): QueryParams<HashMap<String, String>>| {
                recorder.lock().unwrap().push((
                    params.get("days").cloned().unwrap_or_default(),
                    params.get("status").cloned().unwrap_or_default(),
                ));
                async { Json(json!({ "events": [] })) }
            }),
        );
        let client = EonetClient::new(spawn_server(router).await);

        client.fetch_events(30).await;

        let mut seen = seen.lock().unwrap().clone();
        seen.sort();
        assert_eq!(
            seen,
            vec![
                ("30".to_string(), "closed".to_string()),
                ("30".to_string(), "open".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_events_requests_run_concurrently() {
        // Each handler waits until both requests have arrived, so a
        // sequential fetch would never finish.
        let barrier = Arc::new(tokio::sync::Barrier::new(2));
        let router = Router::new().route(
            "/api/events",
            get(move |QueryParams(params): QueryParams<HashMap<String, String>>| {
                let barrier = Arc::clone(&barrier);
                async move {
                    barrier.wait().await;
                    let id = params.get("status").cloned().unwrap_or_default();
                    Json(json!({ "events": [event(&id)] }))
                }
            }),
        );
        let client = EonetClient::new(spawn_server(router).await);

        let events = tokio::time::timeout(Duration::from_secs(5), client.fetch_events(360))
            .await
            .expect("fetches should run concurrently");

        assert_eq!(ids(&events), vec!["open", "closed"]);
    }
}
