use serde::Deserialize;
use serde_json::Value;

use crate::core::error::{ConnectorError, Result};

/// Fixed FRED category endpoint.
pub const BASE_URL: &str = "https://api.stlouisfed.org/fred/category";

/// Root of the category subtree this connector is scoped to.
pub const ROOT_CATEGORY_ID: u32 = 125;

/// Response body of the category endpoint. Elements are kept as loose JSON
/// so shape problems surface per record, not as a whole-body parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryListing {
    #[serde(default)]
    pub categories: Vec<Value>,
}

/// Thin client for the FRED category endpoint.
pub struct FredClient {
    client: reqwest::Client,
    base_url: String,
}

impl FredClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Client pointed at an alternate endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("fred-connector/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Fetch the category subtree rooted at `category_id`. One GET, no
    /// retries; transport errors and non-success statuses both come back
    /// as request failures.
    pub async fn fetch_categories(
        &self,
        api_key: &str,
        category_id: u32,
    ) -> Result<CategoryListing> {
        tracing::debug!(
            "Fetching categories from {} (category_id={})",
            self.base_url,
            category_id
        );

        let category_id = category_id.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("api_key", api_key),
                ("file_type", "json"),
                ("category_id", category_id.as_str()),
            ])
            .send()
            .await
            // Drop the URL from the error text; it carries the api key.
            .map_err(|e| ConnectorError::Request(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ConnectorError::Request(format!(
                "HTTP {} - {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ConnectorError::Request(e.without_url().to_string()))
    }
}

impl Default for FredClient {
    fn default() -> Self {
        Self::new()
    }
}
