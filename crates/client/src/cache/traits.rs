use async_trait::async_trait;
use eonet_core::catalog::Category;

use crate::error::Result;

/// Trait for anything that can produce the raw category list.
///
/// [`EonetClient`](crate::EonetClient) implements this against the
/// `categories` endpoint. Implementations return decoded categories in
/// source order; sorting is the cache's job.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Fetches and decodes the category list.
    async fn fetch_categories(&self) -> Result<Vec<Category>>;
}
