use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::core::error::{ConnectorError, Result};

/// Flat key-value configuration handed to the connector by the host harness.
///
/// Only `fred_api_key` is consumed on the happy path; unknown keys are kept
/// around untouched so the harness can round-trip them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Configuration {
    /// FRED API key. Required for a successful sync.
    #[serde(default)]
    pub fred_api_key: Option<String>,

    /// Optional override for the root category id of the fetched subtree.
    /// Values arrive as strings in the flat configuration file.
    #[serde(default)]
    pub fred_category_id: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Configuration {
    /// API key with empty strings treated as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.fred_api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Parsed category id override, if one was configured.
    pub fn category_id_override(&self) -> Result<Option<u32>> {
        match self.fred_category_id.as_deref() {
            Some(raw) => raw.trim().parse::<u32>().map(Some).map_err(|_| {
                ConnectorError::Config(format!(
                    "fred_category_id must be a non-negative number, got '{}'",
                    raw
                ))
            }),
            None => Ok(None),
        }
    }

    /// Load a configuration file (JSON object of flat key-value pairs).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ConnectorError::Config(format!(
                "failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            ConnectorError::Config(format!(
                "invalid configuration file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Environment-derived settings for the standalone debug entry point.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub configuration_path: String,
}

impl HarnessConfig {
    const DEFAULT_CONFIGURATION_PATH: &'static str = "configuration.json";

    pub fn from_env() -> Self {
        let configuration_path = env::var("CONFIGURATION_PATH")
            .unwrap_or_else(|_| Self::DEFAULT_CONFIGURATION_PATH.to_string());

        Self { configuration_path }
    }
}
