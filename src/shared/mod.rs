//! Shared types used across all domain modules.
//!
//! These types are serialization-transparent: they serialize to the short
//! tokens the dashboard and the market-data provider already use, so they can
//! appear directly in wire types and serialized UI state.

pub mod fmt;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

// ─── Coin ────────────────────────────────────────────────────────────────────

/// A currency the dashboard can display and convert between.
///
/// Used as a typed key into the conversion [`RateTable`], replacing the
/// string-keyed `"FROM_TO"` lookups a malformed key could slip through.
///
/// [`RateTable`]: crate::domain::converter::RateTable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    #[default]
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "LTC")]
    Ltc,
    #[serde(rename = "ADA")]
    Ada,
    #[serde(rename = "TRC")]
    Trc,
}

impl Coin {
    /// Short ticker shown in the UI.
    pub fn ticker(&self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Ltc => "LTC",
            Self::Ada => "ADA",
            Self::Trc => "TRC",
        }
    }

    /// Identifier used by the market-data provider's spot-price endpoint.
    pub fn asset_id(&self) -> &'static str {
        match self {
            Self::Btc => "bitcoin",
            Self::Ltc => "litecoin",
            Self::Ada => "cardano",
            // The dashboard lists TRC against Tether's feed.
            Self::Trc => "tether",
        }
    }

    /// All coins, in display order.
    pub fn all() -> [Coin; 4] {
        [Self::Btc, Self::Ltc, Self::Ada, Self::Trc]
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ticker())
    }
}

// ─── ChartAsset ──────────────────────────────────────────────────────────────

/// An asset whose price history can be charted.
///
/// Parsing an unrecognized identifier is a hard error rather than a silent
/// fallback to any particular asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartAsset {
    #[default]
    Bitcoin,
    Litecoin,
    Cardano,
}

impl ChartAsset {
    /// Identifier used in the provider's market-chart URL path.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::Litecoin => "litecoin",
            Self::Cardano => "cardano",
        }
    }

    /// Ticker shown next to the asset selector.
    pub fn ticker(&self) -> &'static str {
        match self {
            Self::Bitcoin => "BTC",
            Self::Litecoin => "LTC",
            Self::Cardano => "ADA",
        }
    }
}

impl std::fmt::Display for ChartAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ChartAsset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bitcoin" => Ok(Self::Bitcoin),
            "litecoin" => Ok(Self::Litecoin),
            "cardano" => Ok(Self::Cardano),
            other => Err(CoreError::UnknownAsset(other.to_string())),
        }
    }
}

// ─── Window ──────────────────────────────────────────────────────────────────

/// Price-history lookback window selected in the chart header.
///
/// Note that `1H` and `1D` both map to a one-day lookback — the provider's
/// smallest granularity — mirroring the dashboard's range buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Window {
    #[default]
    #[serde(rename = "1H")]
    OneHour,
    #[serde(rename = "3H")]
    ThreeHours,
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
}

impl Window {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneHour => "1H",
            Self::ThreeHours => "3H",
            Self::OneDay => "1D",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
        }
    }

    /// Lookback length in days for the provider query.
    pub fn days(&self) -> u32 {
        match self {
            Self::OneHour => 1,
            Self::ThreeHours => 3,
            Self::OneDay => 1,
            Self::ThreeMonths => 90,
            Self::SixMonths => 180,
        }
    }

    /// Parse a window code, falling back to the shortest window for
    /// anything unrecognized.
    pub fn from_code(code: &str) -> Self {
        match code {
            "1H" => Self::OneHour,
            "3H" => Self::ThreeHours,
            "1D" => Self::OneDay,
            "3M" => Self::ThreeMonths,
            "6M" => Self::SixMonths,
            _ => Self::OneHour,
        }
    }

    /// All windows, in display order.
    pub fn all() -> [Window; 5] {
        [
            Self::OneHour,
            Self::ThreeHours,
            Self::OneDay,
            Self::ThreeMonths,
            Self::SixMonths,
        ]
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_serde_roundtrip() {
        let json = serde_json::to_string(&Coin::Btc).unwrap();
        assert_eq!(json, "\"BTC\"");
        let back: Coin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Coin::Btc);
    }

    #[test]
    fn test_coin_display_order() {
        let tickers: Vec<_> = Coin::all().iter().map(Coin::ticker).collect();
        assert_eq!(tickers, ["BTC", "LTC", "ADA", "TRC"]);
    }

    #[test]
    fn test_coin_asset_ids() {
        assert_eq!(Coin::Btc.asset_id(), "bitcoin");
        assert_eq!(Coin::Ltc.asset_id(), "litecoin");
        assert_eq!(Coin::Ada.asset_id(), "cardano");
        assert_eq!(Coin::Trc.asset_id(), "tether");
    }

    #[test]
    fn test_chart_asset_parse() {
        assert_eq!("litecoin".parse::<ChartAsset>().unwrap(), ChartAsset::Litecoin);
        assert!(matches!(
            "dogecoin".parse::<ChartAsset>(),
            Err(CoreError::UnknownAsset(s)) if s == "dogecoin"
        ));
    }

    #[test]
    fn test_window_days_mapping() {
        assert_eq!(Window::OneHour.days(), 1);
        assert_eq!(Window::ThreeHours.days(), 3);
        assert_eq!(Window::OneDay.days(), 1);
        assert_eq!(Window::ThreeMonths.days(), 90);
        assert_eq!(Window::SixMonths.days(), 180);
    }

    #[test]
    fn test_window_from_code_falls_back_to_shortest() {
        assert_eq!(Window::from_code("3M"), Window::ThreeMonths);
        assert_eq!(Window::from_code("1W"), Window::OneHour);
        assert_eq!(Window::from_code(""), Window::OneHour);
    }

    #[test]
    fn test_window_display_order() {
        let codes: Vec<_> = Window::all().iter().map(Window::as_str).collect();
        assert_eq!(codes, ["1H", "3H", "1D", "3M", "6M"]);
    }

    #[test]
    fn test_window_serde_uses_codes() {
        let json = serde_json::to_string(&Window::SixMonths).unwrap();
        assert_eq!(json, "\"6M\"");
        let back: Window = serde_json::from_str("\"3H\"").unwrap();
        assert_eq!(back, Window::ThreeHours);
    }
}
