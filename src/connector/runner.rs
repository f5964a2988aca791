use serde_json::Value;

use crate::core::config::Configuration;
use crate::core::error::Result;
use crate::features::categories::{schema, CategorySyncService};

/// Standalone debug runner mirroring what the host harness does: declare
/// the schema, run one sync, and print every operation as a JSON line.
pub struct Connector {
    sync_service: CategorySyncService,
}

impl Connector {
    pub fn new(sync_service: CategorySyncService) -> Self {
        Self { sync_service }
    }

    pub async fn debug(&self, configuration: &Configuration, state: Value) -> Result<()> {
        for table in schema(configuration) {
            tracing::info!(
                "Declared table '{}' (primary key: {})",
                table.table,
                table.primary_key.join(", ")
            );
        }

        let operations = self.sync_service.update(configuration, state).await?;

        let upserts = operations.iter().filter(|op| op.is_upsert()).count();
        for operation in &operations {
            println!("{}", serde_json::to_string(operation)?);
        }

        tracing::info!(
            "Sync finished: {} upserts, {} operations total",
            upserts,
            operations.len()
        );

        Ok(())
    }
}
