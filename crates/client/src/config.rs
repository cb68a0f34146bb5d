//! Environment-backed client configuration.

use std::env;

/// Default API root of the EONET service.
pub const DEFAULT_BASE_URL: &str = "https://eonet.gsfc.nasa.gov/api/v2.1";

/// Default lookback window for event fetches, in days.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 360;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API root that endpoint paths are appended to.
    pub base_url: String,
    /// Lookback window used when no explicit one is given (default: 360).
    pub lookback_days: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EONET_URL` - API root (default: `https://eonet.gsfc.nasa.gov/api/v2.1`)
    /// - `EONET_LOOKBACK_DAYS` - Event lookback window in days (default: 360)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("EONET_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            lookback_days: lookup("EONET_LOOKBACK_DAYS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LOOKBACK_DAYS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}
