//! Low-level HTTP client — `DashboardHttp`.
//!
//! One method per endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). Requests are one-shot: nothing here retries
//! automatically — a failed fetch surfaces as an error and retry, if any, is
//! the caller's policy (typically the user re-selecting an asset or window).

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::domain::chart::wire::MarketChartResponse;
use crate::domain::history::wire::TransactionRow;
use crate::domain::spot::wire::SpotPriceResponse;
use crate::error::{CoreError, HttpError};
use crate::shared::{ChartAsset, Window};

/// Name of the transaction-history table.
const HISTORY_TABLE: &str = "Transactionhistory";

/// Column projection for transaction-history rows.
const HISTORY_COLUMNS: &str = "date,profit,loss,fee,walletaddress";

/// Connection settings for the transaction-history store.
#[derive(Debug, Clone)]
pub struct HistoryStoreConfig {
    /// REST root of the store, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    /// Anonymous API key sent with every request.
    pub api_key: String,
}

/// Low-level HTTP client for the market-data provider and the history store.
#[derive(Clone)]
pub struct DashboardHttp {
    market_base_url: String,
    history: Option<HistoryStoreConfig>,
    client: Client,
}

impl DashboardHttp {
    pub fn new(market_base_url: &str, history: Option<HistoryStoreConfig>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            market_base_url: market_base_url.trim_end_matches('/').to_string(),
            history,
            client,
        }
    }

    pub fn market_base_url(&self) -> &str {
        &self.market_base_url
    }

    // ── Market chart ─────────────────────────────────────────────────────

    /// Price history for one asset over one lookback window.
    pub async fn get_market_chart(
        &self,
        asset: ChartAsset,
        window: Window,
    ) -> Result<MarketChartResponse, CoreError> {
        let url = format!(
            "{}/coins/{}/market_chart?vs_currency=usd&days={}",
            self.market_base_url,
            asset.id(),
            window.days()
        );
        self.get_json(&url, None).await
    }

    // ── Spot prices ──────────────────────────────────────────────────────

    /// USD spot snapshot for the dashboard's fixed asset set.
    pub async fn get_spot_prices(&self) -> Result<SpotPriceResponse, CoreError> {
        let url = format!(
            "{}/simple/price?ids=bitcoin,litecoin,cardano,tether&vs_currencies=usd",
            self.market_base_url
        );
        self.get_json(&url, None).await
    }

    // ── Transaction history ──────────────────────────────────────────────

    /// All rows of the transaction-history table, fixed column projection.
    pub async fn get_transactions(&self) -> Result<Vec<TransactionRow>, CoreError> {
        let store = self
            .history
            .as_ref()
            .ok_or(CoreError::HistoryNotConfigured)?;
        let url = format!(
            "{}/rest/v1/{}?select={}",
            store.base_url.trim_end_matches('/'),
            HISTORY_TABLE,
            HISTORY_COLUMNS
        );
        self.get_json(&url, Some(&store.api_key)).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// GET a URL and decode its JSON body.
    ///
    /// Transport and non-success statuses map to `HttpError`; the body is
    /// decoded as a separate step so a malformed shape surfaces as
    /// `CoreError::Parse`, never as a half-rendered value.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        api_key: Option<&str>,
    ) -> Result<T, CoreError> {
        debug!(url, "GET");

        let mut req = self.client.get(url);
        if let Some(key) = api_key {
            req = req
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key));
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let body = resp.text().await.map_err(HttpError::Reqwest)?;
            return Ok(serde_json::from_str(&body)?);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        let err = match status_code {
            401 => HttpError::Unauthorized,
            404 => HttpError::NotFound(body_text),
            400..=499 => HttpError::BadRequest(body_text),
            _ => HttpError::ServerError {
                status: status_code,
                body: body_text,
            },
        };
        Err(err.into())
    }
}
