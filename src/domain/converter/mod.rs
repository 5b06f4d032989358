//! Converter domain — fixed-rate pair conversion.
//!
//! A directed rate is defined for a specific `(from, to)` ordering and is not
//! assumed invertible: the shipped table's `rate(A, B) * rate(B, A)` need not
//! equal 1. That property comes straight from the dashboard's rate data and
//! is preserved as-is. A pair absent from the table is "no route" — the
//! derived amount goes empty, never an error and never a chained lookup
//! through an intermediate coin.

pub mod state;

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::shared::Coin;

pub use state::{ConversionState, PairSide};

static FIXED: OnceLock<RateTable> = OnceLock::new();

/// Immutable mapping from an ordered coin pair to a positive multiplier.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<(Coin, Coin), Decimal>,
}

impl RateTable {
    pub fn new(entries: impl IntoIterator<Item = ((Coin, Coin), Decimal)>) -> Self {
        Self {
            rates: entries.into_iter().collect(),
        }
    }

    /// Look up the directed rate for `from → to`.
    pub fn rate(&self, from: Coin, to: Coin) -> Option<Decimal> {
        self.rates.get(&(from, to)).copied()
    }

    /// The dashboard's fixed conversion table.
    ///
    /// Values preserved verbatim from the shipped rate data, including the
    /// non-reciprocal pairs.
    pub fn fixed() -> &'static RateTable {
        FIXED.get_or_init(|| {
            use Coin::*;
            let dec = |s: &str| Decimal::from_str(s).expect("fixed rate literal");
            RateTable::new([
                ((Btc, Ltc), dec("1024.81")),
                ((Btc, Ada), dec("124921.92")),
                ((Btc, Trc), dec("84639.89")),
                ((Ltc, Btc), dec("0.00097")),
                ((Ltc, Ada), dec("121.69")),
                ((Ltc, Trc), dec("82.45")),
                ((Ada, Btc), dec("0.000008")),
                ((Ada, Ltc), dec("0.0082")),
                ((Ada, Trc), dec("0.68")),
                ((Trc, Btc), dec("0.000012")),
                ((Trc, Ltc), dec("0.012")),
                ((Trc, Ada), dec("1.48")),
            ])
        })
    }
}
