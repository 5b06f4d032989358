//! Charts sub-client — price-history queries.

use crate::client::DashboardClient;
use crate::domain::chart::{normalize, ChartSeries, RawSample, WindowPolicy};
use crate::error::CoreError;
use crate::shared::{ChartAsset, Window};

/// Sub-client for price-history operations.
pub struct Charts<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Charts<'a> {
    /// Fetch raw price samples for an asset over a lookback window.
    pub async fn history(
        &self,
        asset: ChartAsset,
        window: Window,
    ) -> Result<Vec<RawSample>, CoreError> {
        let resp = self.client.http.get_market_chart(asset, window).await?;
        Ok(resp.into_samples())
    }

    /// Fetch and normalize in one step: the series is ready for the chart
    /// widget, labeled in the viewer's local time zone.
    pub async fn series(
        &self,
        asset: ChartAsset,
        window: Window,
        policy: WindowPolicy,
    ) -> Result<ChartSeries, CoreError> {
        let samples = self.history(asset, window).await?;
        Ok(normalize(&samples, policy))
    }
}
