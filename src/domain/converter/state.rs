//! Conversion state — app-owned, update logic provided here.
//!
//! Exactly one side of the pair is authoritative at any time: the side the
//! user most recently typed into. The other side always holds a value derived
//! from the authoritative text and the current rate table, and is never
//! edited directly by derivation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::RateTable;
use crate::shared::{fmt, Coin};

/// Which half of the conversion pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairSide {
    #[default]
    A,
    B,
}

impl PairSide {
    pub fn other(&self) -> PairSide {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// The converter's full UI state: two coin selections and two amount strings.
///
/// Amounts are kept as the user typed them — including text that does not
/// parse as a number, since the user may still be typing. Garbage on the
/// authoritative side simply derives an empty other side; it never faults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionState {
    coin_a: Coin,
    coin_b: Coin,
    amount_a: String,
    amount_b: String,
    last_edited: PairSide,
}

impl ConversionState {
    pub fn new(coin_a: Coin, coin_b: Coin) -> Self {
        Self {
            coin_a,
            coin_b,
            amount_a: String::new(),
            amount_b: String::new(),
            last_edited: PairSide::A,
        }
    }

    pub fn coin(&self, side: PairSide) -> Coin {
        match side {
            PairSide::A => self.coin_a,
            PairSide::B => self.coin_b,
        }
    }

    pub fn amount(&self, side: PairSide) -> &str {
        match side {
            PairSide::A => &self.amount_a,
            PairSide::B => &self.amount_b,
        }
    }

    /// The side most recently typed into.
    pub fn last_edited(&self) -> PairSide {
        self.last_edited
    }

    /// Record a user edit to one side's amount and re-derive the other.
    ///
    /// The typed text is stored verbatim; the derived side becomes the
    /// rounded product when a directed rate exists and the text parses as a
    /// non-negative number, and is cleared otherwise — a cleared source never
    /// leaves a stale derived value behind.
    pub fn edit_amount(&mut self, side: PairSide, text: impl Into<String>, table: &RateTable) {
        *self.amount_mut(side) = text.into();
        self.last_edited = side;
        self.rederive(table);
    }

    /// Change one side's coin and immediately re-derive from whichever side
    /// is currently authoritative.
    pub fn set_coin(&mut self, side: PairSide, coin: Coin, table: &RateTable) {
        match side {
            PairSide::A => self.coin_a = coin,
            PairSide::B => self.coin_b = coin,
        }
        self.rederive(table);
    }

    /// `"2 BTC = 2049.62 LTC"` when both sides hold text, `None` otherwise
    /// (the UI shows its "enter amount to convert" placeholder).
    pub fn summary(&self) -> Option<String> {
        if self.amount_a.is_empty() || self.amount_b.is_empty() {
            return None;
        }
        Some(format!(
            "{} {} = {} {}",
            self.amount_a, self.coin_a, self.amount_b, self.coin_b
        ))
    }

    fn amount_mut(&mut self, side: PairSide) -> &mut String {
        match side {
            PairSide::A => &mut self.amount_a,
            PairSide::B => &mut self.amount_b,
        }
    }

    fn rederive(&mut self, table: &RateTable) {
        let src = self.last_edited;
        let derived = derive(
            self.amount(src),
            self.coin(src),
            self.coin(src.other()),
            table,
        );
        *self.amount_mut(src.other()) = derived;
    }
}

/// Single directed lookup-and-multiply; empty string when no amount or no
/// route. Results are rounded to six decimal places for display.
fn derive(text: &str, from: Coin, to: Coin, table: &RateTable) -> String {
    let parsed = match Decimal::from_str(text.trim()) {
        Ok(d) if !d.is_sign_negative() => d,
        _ => return String::new(),
    };
    match table.rate(from, to) {
        Some(rate) => fmt::amount(&(parsed * rate)),
        None => String::new(),
    }
}
