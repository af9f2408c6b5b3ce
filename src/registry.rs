//! crates.io-backed dynamic option provider.
//!
//! Demonstrates the query-driven source over a real network lookup: each
//! submitted query hits the crates.io search API and the returned crate
//! names become the navigable result list. The client carries its own
//! timeout; the engine itself never aborts an in-flight fetch.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::ProviderError;
use crate::select::OptionsProvider;

pub const DEFAULT_BASE_URL: &str = "https://crates.io/api/v1/crates";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// How many names to request per query; the engine caps the shown results
/// separately.
const PER_PAGE: usize = 20;

/// Option provider that searches the crates.io registry.
pub struct CratesProvider {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    crates: Vec<CrateEntry>,
}

#[derive(Deserialize)]
struct CrateEntry {
    name: String,
}

impl CratesProvider {
    /// Build a provider with a reusable HTTP client.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("lineup/0.1 (terminal selector)")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for CratesProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

#[async_trait]
impl OptionsProvider for CratesProvider {
    async fn fetch(&self, query: &str) -> Result<Vec<String>, ProviderError> {
        debug!(query = %query, "searching crates.io");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", query), ("per_page", &PER_PAGE.to_string())])
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProviderError::Http(format!(
                "registry returned status {}",
                response.status()
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(parsed.crates.into_iter().map(|entry| entry.name).collect())
    }
}
