use std::collections::BTreeMap;

use serde::Serialize;

/// Column types understood by the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    String,
}

/// Descriptor for one destination table, as declared to the host harness
/// before any data flows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSchema {
    pub table: String,
    pub primary_key: Vec<String>,
    pub columns: BTreeMap<String, ColumnType>,
}
