//! eonet_client - fetch pipeline and CLI client for the EONET events API.

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;

pub use cache::{CachedResult, CategoryCache, CategorySource};
pub use client::EonetClient;
pub use config::Config;
pub use error::{ClientError, Result};
