//! Spot sub-client — one-shot USD price snapshot.

use crate::client::DashboardClient;
use crate::domain::spot::SpotPrices;
use crate::error::CoreError;

/// Sub-client for spot-price operations.
pub struct Spot<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Spot<'a> {
    /// Fetch the current USD spot prices for the dashboard's coin set.
    pub async fn get(&self) -> Result<SpotPrices, CoreError> {
        let resp = self.client.http.get_spot_prices().await?;
        Ok(resp.into())
    }
}
