//! Transaction-history domain — the scrollable list of past transactions.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

/// One row of the transaction-history list.
///
/// Rows map 1:1 to display rows; the store's column values are carried as
/// the strings they arrive as. No pagination, no filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    pub profit: String,
    pub loss: String,
    pub fee: String,
    pub wallet_address: String,
}
