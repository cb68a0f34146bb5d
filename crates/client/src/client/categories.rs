//! Category fetch operations.

use async_trait::async_trait;
use eonet_core::catalog::{decode_categories, Category};

use super::{take_batch, EonetClient, Query};
use crate::cache::CategorySource;
use crate::error::Result;

/// Endpoint path for the category list.
pub const CATEGORIES_ENDPOINT: &str = "categories";

impl EonetClient {
    /// Fetch and decode the category list, in server order.
    ///
    /// Every call hits the network; use
    /// [`CategoryCache`](crate::cache::CategoryCache) for the shared, sorted
    /// list.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let response = self.request(&Query::new(CATEGORIES_ENDPOINT)).await?;
        let batch = take_batch(response, "categories", CATEGORIES_ENDPOINT)?;
        let categories = decode_categories(&batch);

        if categories.len() < batch.len() {
            tracing::debug!(
                dropped = batch.len() - categories.len(),
                "Dropped malformed category records"
            );
        }

        Ok(categories)
    }
}

#[async_trait]
impl CategorySource for EonetClient {
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        self.list_categories().await
    }
}
