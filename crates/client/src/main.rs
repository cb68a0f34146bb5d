//! eonet-client CLI entry point.

use anyhow::Result;
use clap::Parser;
use eonet_client::cli::{Cli, Commands};
use eonet_client::output::{render_categories, render_events};
use eonet_client::{CategoryCache, Config, EonetClient};
use eonet_core::catalog::filtered_events;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eonet_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.resolve_config(Config::from_env());
    let client = EonetClient::from_config(&config);
    let cache = CategoryCache::new(client.clone());
    let days = config.lookback_days;

    match cli.command {
        Commands::Categories => {
            let list = cache.categories().await;
            println!("{}", render_categories(&list, cli.format));
        }
        Commands::Events { .. } => {
            let events = client.fetch_events(days).await;
            println!("{}", render_events(&events, cli.format));
        }
        Commands::CategoryEvents { category_id, .. } => {
            let (list, events) = tokio::join!(cache.categories(), client.fetch_events(days));

            let Some(category) = list.iter().find(|c| c.id == category_id) else {
                anyhow::bail!("Unknown category: {}", category_id);
            };

            if !cli.quiet {
                eprintln!("{} ({} days)", category.name, days);
            }

            let matching = filtered_events(&events, category);
            println!("{}", render_events(&matching, cli.format));
        }
    }

    Ok(())
}
