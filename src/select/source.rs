//! Option sources: fixed in-memory lists and query-driven providers.

use async_trait::async_trait;

use crate::error::ProviderError;

/// A query-driven option provider (registry search, network lookup, ...).
///
/// The engine awaits `fetch` to completion before reading any further input;
/// there is no timeout and no cancellation of an in-flight fetch, so a hung
/// provider hangs the prompt. Implementations that can stall should carry
/// their own client-level timeout.
#[async_trait]
pub trait OptionsProvider: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Vec<String>, ProviderError>;
}

/// Where a search prompt gets its candidate options.
///
/// `Static` filtering is deterministic and repeatable: the same query over
/// the same list always yields the same ordered results. `Dynamic` results
/// carry no such guarantee, and indices into them are only meaningful for
/// the snapshot they came from.
pub enum OptionsSource<'a> {
    Static(&'a [String]),
    Dynamic(&'a dyn OptionsProvider),
}

impl OptionsSource<'_> {
    /// Resolve a query to at most `max_results` options.
    pub(crate) async fn fetch(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<String>, ProviderError> {
        match self {
            Self::Static(options) => Ok(filter_options(options, query, max_results)),
            Self::Dynamic(provider) => {
                let mut results = provider.fetch(query).await?;
                results.truncate(max_results);
                Ok(results)
            }
        }
    }
}

/// Case-insensitive substring filter over a fixed option list, preserving
/// list order and capped at `max_results`.
pub fn filter_options(options: &[String], query: &str, max_results: usize) -> Vec<String> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&needle))
        .take(max_results)
        .cloned()
        .collect()
}
