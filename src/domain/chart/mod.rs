//! Chart domain — price history normalized into chartable form.
//!
//! The normalizer is a pure transform: fetching, loading states and error
//! states belong to the orchestration layer above, which calls [`normalize`]
//! once data has arrived.

#[cfg(feature = "http")]
pub mod client;
mod normalize;
pub mod state;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use normalize::{normalize, normalize_in};

/// A raw price sample from the provider.
///
/// The provider sends samples in chronological order; that ordering is
/// trusted here as an assumption, not re-checked or guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Unix timestamp in milliseconds.
    pub timestamp_ms: i64,
    /// Price in USD.
    pub price: f64,
}

/// A single point ready for the chart widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Time-of-day label (`HH:MM`) in the viewer's time zone.
    pub label: String,
    /// Price carried through from the raw sample.
    pub price: f64,
}

/// Truncation policy applied while normalizing.
///
/// The dashboard historically shipped two chart variants: one charting the
/// entire fetched set and one charting only the first 15 samples. Both
/// collapse into this single policy; `Full` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowPolicy {
    #[default]
    Full,
    FirstN(usize),
}

/// A normalized, display-ready series: points plus Y-axis tick values.
///
/// `ticks` is either empty (no points — the caller must not render an axis)
/// or exactly six non-decreasing values spanning the observed price range,
/// rounded to two decimal places.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    pub ticks: Vec<f64>,
}

impl ChartSeries {
    /// Price of the most recent point, shown in the chart header.
    pub fn latest_price(&self) -> Option<f64> {
        self.points.last().map(|p| p.price)
    }

    /// Header display string for the latest price, at two decimal places.
    pub fn latest_price_display(&self) -> Option<String> {
        self.latest_price().map(|p| crate::shared::fmt::fixed(p, 2))
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
