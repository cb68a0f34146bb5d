//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;

/// CLI client for the EONET events API.
#[derive(Debug, Parser)]
#[command(name = "eonet-client")]
#[command(about = "CLI client for the EONET events API", long_about = None)]
pub struct Cli {
    /// API root URL [default: EONET_URL or the public EONET v2.1 root]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn resolve_config(&self, mut config: Config) -> Config {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(days) = self.command.days() {
            config.lookback_days = days;
        }
        config
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List event categories, sorted by name.
    Categories,
    /// List open and closed events in the lookback window.
    Events {
        /// Lookback window in days [default: EONET_LOOKBACK_DAYS or 360]
        #[arg(long)]
        days: Option<u32>,
    },
    /// List the events of one category, sorted by date.
    CategoryEvents {
        /// Category ID.
        category_id: String,
        /// Lookback window in days [default: EONET_LOOKBACK_DAYS or 360]
        #[arg(long)]
        days: Option<u32>,
    },
}

impl Commands {
    fn days(&self) -> Option<u32> {
        match self {
            Commands::Categories => None,
            Commands::Events { days } | Commands::CategoryEvents { days, .. } => *days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("eonet-client").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_categories() {
        let cli = parse(&["categories"]);
        assert!(matches!(cli.command, Commands::Categories));
        assert!(matches!(cli.format, OutputFormat::Pretty));
    }

    #[test]
    fn test_parse_events_with_days() {
        let cli = parse(&["--format", "json", "events", "--days", "30"]);
        assert!(matches!(cli.command, Commands::Events { days: Some(30) }));
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn test_parse_category_events() {
        let cli = parse(&["category-events", "8"]);
        match cli.command {
            Commands::CategoryEvents { category_id, days } => {
                assert_eq!(category_id, "8");
                assert_eq!(days, None);
            }
            other => panic!("Expected CategoryEvents, got {:?}", other),
        }
    }

    #[test]
    fn test_old_subcommand_shape_is_rejected() {
        let args = ["eonet-client", "categories", "list"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_resolve_config_keeps_loaded_values() {
        let cli = parse(&["category-events", "8"]);
        let loaded = Config {
            base_url: "http://localhost:8080/api".to_string(),
            lookback_days: 30,
        };

        assert_eq!(cli.resolve_config(loaded.clone()), loaded);
    }

    #[test]
    fn test_resolve_config_applies_flags() {
        let cli = parse(&["--base-url", "http://mirror/api", "events", "--days", "7"]);
        let config = cli.resolve_config(Config::default());

        assert_eq!(config.base_url, "http://mirror/api");
        assert_eq!(config.lookback_days, 7);
    }
}
