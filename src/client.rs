//! High-level client — `DashboardClient` with nested sub-client accessors.
//!
//! Each domain with remote operations has its own sub-client in
//! `domain/<name>/client.rs`. This module keeps the builder and the
//! accessor methods. The client holds no response caches: chart, spot and
//! history data are recomputed wholesale per fetch.

use crate::domain::chart::client::Charts;
use crate::domain::history::client::History;
use crate::domain::spot::client::Spot;
use crate::error::CoreError;
use crate::http::{DashboardHttp, HistoryStoreConfig};

// Re-export sub-client types for convenience.
pub use crate::domain::chart::client::Charts as ChartsClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::spot::client::Spot as SpotClient;

/// The primary entry point for the dashboard core.
///
/// Provides nested sub-client accessors: `client.charts()`,
/// `client.spot()`, `client.history()`.
#[derive(Clone)]
pub struct DashboardClient {
    pub(crate) http: DashboardHttp,
}

impl DashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn charts(&self) -> Charts<'_> {
        Charts { client: self }
    }

    pub fn spot(&self) -> Spot<'_> {
        Spot { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DashboardClientBuilder {
    market_base_url: String,
    history: Option<HistoryStoreConfig>,
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self {
            market_base_url: crate::network::DEFAULT_MARKET_API_URL.to_string(),
            history: None,
        }
    }
}

impl DashboardClientBuilder {
    /// Base URL of the market-data provider.
    pub fn market_base_url(mut self, url: &str) -> Self {
        self.market_base_url = url.to_string();
        self
    }

    /// Connection settings for the transaction-history store. Without this,
    /// history fetches fail with `CoreError::HistoryNotConfigured`.
    pub fn history_store(mut self, config: HistoryStoreConfig) -> Self {
        self.history = Some(config);
        self
    }

    pub fn build(self) -> Result<DashboardClient, CoreError> {
        Ok(DashboardClient {
            http: DashboardHttp::new(&self.market_base_url, self.history),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_history_unconfigured_is_an_error() {
        let client = DashboardClient::builder().build().unwrap();
        let res = client.history().fetch().await;
        assert!(matches!(res, Err(CoreError::HistoryNotConfigured)));
    }

    #[tokio::test]
    async fn test_history_unconfigured_degrades_to_empty() {
        let client = DashboardClient::builder().build().unwrap();
        assert!(client.history().fetch_or_empty().await.is_empty());
    }

    #[test]
    fn test_builder_defaults_to_provider_url() {
        let builder = DashboardClient::builder();
        assert_eq!(
            builder.market_base_url,
            crate::network::DEFAULT_MARKET_API_URL
        );
    }
}
