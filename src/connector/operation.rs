use serde::Serialize;
use serde_json::Value;

/// One entry in the operation stream handed to the host harness.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Insert-or-update a single row, keyed by the table's primary key.
    Upsert { table: String, row: Value },

    /// Persist the sync state so a future run can resume or detect completion.
    Checkpoint { state: Value },
}

impl Operation {
    pub fn upsert(table: impl Into<String>, row: Value) -> Self {
        Self::Upsert {
            table: table.into(),
            row,
        }
    }

    pub fn checkpoint(state: Value) -> Self {
        Self::Checkpoint { state }
    }

    pub fn is_upsert(&self) -> bool {
        matches!(self, Self::Upsert { .. })
    }
}
