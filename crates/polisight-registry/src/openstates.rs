//! Client for the OpenStates-style bill search endpoint.

use std::time::Duration;

use polisight_core::{Bill, RegistryConfig};
use polisight_engine::{BillSource, SourceError};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Bound on how long one registry call may block an analysis. Timeouts are
/// treated like any other registry failure: the engine degrades to an empty
/// bill list.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("registry returned {status}: {body}")]
    Server { status: u16, body: String },
}

impl From<RegistryError> for SourceError {
    fn from(e: RegistryError) -> Self {
        SourceError::new(e.to_string())
    }
}

#[derive(Deserialize)]
struct BillsResponse {
    #[serde(default)]
    results: Vec<Bill>,
}

/// HTTP client for the bill registry's search endpoint.
pub struct RegistryClient {
    client: reqwest::Client,
    config: RegistryConfig,
}

impl RegistryClient {
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    /// Search the registry for recently-updated bills matching the sector
    /// keyword, newest first, bounded by the configured page size.
    async fn search(&self, sector: &str) -> Result<Vec<Bill>, RegistryError> {
        let url = format!("{}/bills", self.config.base_url);

        info!(url = %url, sector, "querying bill registry");
        let per_page = self.config.page_size.to_string();
        let resp = self
            .client
            .get(&url)
            .header("X-API-Key", &self.config.api_key)
            .query(&[
                ("jurisdiction", self.config.jurisdiction.as_str()),
                ("q", sector),
                ("per_page", per_page.as_str()),
                ("sort", "updated_desc"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RegistryError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let bills: BillsResponse = resp.json().await?;
        info!(count = bills.results.len(), "registry returned bills");
        Ok(bills.results)
    }
}

impl BillSource for RegistryClient {
    async fn fetch_bills(&self, sector: &str) -> Result<Vec<Bill>, SourceError> {
        Ok(self.search(sector).await?)
    }
}
