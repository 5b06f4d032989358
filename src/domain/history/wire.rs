//! Wire types for the transaction-history store.

use serde::Deserialize;

use super::Transaction;

/// A raw row from the store's fixed column projection.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRow {
    pub date: String,
    pub profit: String,
    pub loss: String,
    pub fee: String,
    #[serde(rename = "walletaddress")]
    pub wallet_address: String,
}

impl From<TransactionRow> for Transaction {
    fn from(r: TransactionRow) -> Self {
        Self {
            date: r.date,
            profit: r.profit,
            loss: r.loss,
            fee: r.fee,
            wallet_address: r.wallet_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_store_row() {
        let raw = r#"[{
            "date": "2025-01-14",
            "profit": "+120.50",
            "loss": "-3.20",
            "fee": "0.15",
            "walletaddress": "0xabc123"
        }]"#;
        let rows: Vec<TransactionRow> = serde_json::from_str(raw).unwrap();
        let tx = Transaction::from(rows.into_iter().next().unwrap());
        assert_eq!(tx.date, "2025-01-14");
        assert_eq!(tx.wallet_address, "0xabc123");
    }
}
