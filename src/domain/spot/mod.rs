//! Spot-price domain — the USD ticker row.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::shared::{fmt, Coin};

/// One snapshot of USD spot prices for the dashboard's coin set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotPrices {
    pub bitcoin: f64,
    pub litecoin: f64,
    pub cardano: f64,
    pub tether: f64,
}

impl SpotPrices {
    /// USD price for a coin's underlying asset.
    pub fn usd(&self, coin: Coin) -> f64 {
        match coin {
            Coin::Btc => self.bitcoin,
            Coin::Ltc => self.litecoin,
            Coin::Ada => self.cardano,
            Coin::Trc => self.tether,
        }
    }

    /// Ticker-row display string, e.g. `"97,123.46"`.
    pub fn display(&self, coin: Coin) -> String {
        fmt::thousands(self.usd(coin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_lookup_per_coin() {
        let spot = SpotPrices {
            bitcoin: 97123.456,
            litecoin: 104.2,
            cardano: 0.91,
            tether: 1.0,
        };
        assert_eq!(spot.usd(Coin::Btc), 97123.456);
        assert_eq!(spot.usd(Coin::Trc), 1.0);
        assert_eq!(spot.display(Coin::Btc), "97,123.46");
        assert_eq!(spot.display(Coin::Ada), "0.91");
    }
}
