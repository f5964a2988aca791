use serde_json::Value;

use crate::connector::Operation;
use crate::core::config::Configuration;
use crate::core::error::{ConnectorError, Result};
use crate::features::categories::clients::{FredClient, ROOT_CATEGORY_ID};
use crate::features::categories::models::{CategoryRow, TABLE_NAME};

/// Runs one full-refresh sync of the FRED category subtree.
pub struct CategorySyncService {
    client: FredClient,
}

impl CategorySyncService {
    pub fn new(client: FredClient) -> Self {
        Self { client }
    }

    /// Produce the operation stream for one sync run: one upsert per
    /// category in API order, then a single checkpoint echoing `state`.
    ///
    /// A missing credential or a failed request ends the run cleanly with
    /// no operations and no checkpoint; a record that cannot be coerced
    /// aborts the run before anything is handed to the harness.
    pub async fn update(
        &self,
        configuration: &Configuration,
        state: Value,
    ) -> Result<Vec<Operation>> {
        let Some(api_key) = configuration.api_key() else {
            tracing::warn!("Missing or empty fred_api_key; skipping sync");
            return Ok(Vec::new());
        };

        let category_id = configuration
            .category_id_override()?
            .unwrap_or(ROOT_CATEGORY_ID);

        let listing = match self.client.fetch_categories(api_key, category_id).await {
            Ok(listing) => listing,
            Err(ConnectorError::Request(e)) => {
                tracing::warn!("API request failed: {}", e);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut operations = Vec::with_capacity(listing.categories.len() + 1);
        for category in &listing.categories {
            let row = CategoryRow::from_value(category)?;
            operations.push(Operation::upsert(TABLE_NAME, serde_json::to_value(&row)?));
        }

        tracing::info!(
            "Fetched {} categories under category_id={}",
            operations.len(),
            category_id
        );
        operations.push(Operation::checkpoint(state));

        Ok(operations)
    }
}
