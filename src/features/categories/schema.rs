use std::collections::BTreeMap;

use crate::connector::{ColumnType, TableSchema};
use crate::core::config::Configuration;
use crate::features::categories::models::TABLE_NAME;

/// Declare the destination tables. Pure; the configuration argument is
/// accepted for interface parity with the harness and ignored.
pub fn schema(_configuration: &Configuration) -> Vec<TableSchema> {
    let mut columns = BTreeMap::new();
    columns.insert("id".to_string(), ColumnType::Int);
    columns.insert("name".to_string(), ColumnType::String);
    columns.insert("parent_id".to_string(), ColumnType::Int);

    vec![TableSchema {
        table: TABLE_NAME.to_string(),
        primary_key: vec!["id".to_string()],
        columns,
    }]
}
