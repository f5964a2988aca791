use serde::Serialize;
use serde_json::Value;

use crate::core::error::{ConnectorError, Result};

/// Destination table fed by this connector.
pub const TABLE_NAME: &str = "fred_categories";

/// A single node in the FRED category taxonomy, coerced into the
/// destination row shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub parent_id: i64,
}

impl CategoryRow {
    /// Coerce one raw API element. The API is loose about numeric fields
    /// (ids show up both as numbers and as numeric strings), so both are
    /// accepted; anything else is a malformed record.
    pub fn from_value(value: &Value) -> Result<Self> {
        let id = coerce_int(value, "id")?;
        let parent_id = coerce_int(value, "parent_id")?;
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(value, "name", "a string"))?
            .to_string();

        Ok(Self {
            id,
            name,
            parent_id,
        })
    }
}

fn coerce_int(record: &Value, field: &str) -> Result<i64> {
    match record.get(field) {
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| malformed(record, field, "an integer")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| malformed(record, field, "an integer")),
        _ => Err(malformed(record, field, "an integer")),
    }
}

fn malformed(record: &Value, field: &str, expected: &str) -> ConnectorError {
    ConnectorError::MalformedRecord(format!(
        "field '{}' must be {} in {}",
        field, expected, record
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerces_numeric_ids() {
        let row = CategoryRow::from_value(&json!({
            "id": 125,
            "name": "Trade Balance",
            "parent_id": 0
        }))
        .unwrap();

        assert_eq!(
            row,
            CategoryRow {
                id: 125,
                name: "Trade Balance".to_string(),
                parent_id: 0
            }
        );
    }

    #[test]
    fn test_coerces_string_ids() {
        let row = CategoryRow::from_value(&json!({
            "id": "126",
            "name": "Output",
            "parent_id": "125"
        }))
        .unwrap();

        assert_eq!(row.id, 126);
        assert_eq!(row.parent_id, 125);
    }

    #[test]
    fn test_non_numeric_id_is_malformed() {
        let result = CategoryRow::from_value(&json!({
            "id": "abc",
            "name": "X",
            "parent_id": "0"
        }));

        assert!(matches!(result, Err(ConnectorError::MalformedRecord(_))));
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        let result = CategoryRow::from_value(&json!({ "name": "X" }));
        assert!(matches!(result, Err(ConnectorError::MalformedRecord(_))));

        let result = CategoryRow::from_value(&json!({ "id": 1, "parent_id": 0 }));
        assert!(matches!(result, Err(ConnectorError::MalformedRecord(_))));
    }

    #[test]
    fn test_fractional_id_is_malformed() {
        let result = CategoryRow::from_value(&json!({
            "id": 12.5,
            "name": "X",
            "parent_id": 0
        }));

        assert!(matches!(result, Err(ConnectorError::MalformedRecord(_))));
    }
}
