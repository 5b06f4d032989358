//! History sub-client — transaction list queries.

use tracing::warn;

use crate::client::DashboardClient;
use crate::domain::history::Transaction;
use crate::error::CoreError;

/// Sub-client for transaction-history operations.
pub struct History<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> History<'a> {
    /// Fetch all transaction rows from the history store.
    pub async fn fetch(&self) -> Result<Vec<Transaction>, CoreError> {
        let rows = self.client.http.get_transactions().await?;
        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    /// Fetch the transaction list, degrading to an empty list on failure.
    ///
    /// A history failure is not a page-level error: it is logged and the
    /// dashboard simply shows no rows.
    pub async fn fetch_or_empty(&self) -> Vec<Transaction> {
        match self.fetch().await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "transaction history fetch failed");
                Vec::new()
            }
        }
    }
}
