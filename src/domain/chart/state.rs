//! Chart view state — app-owned, update logic provided here.
//!
//! A change of asset or window while a fetch is in flight must not let the
//! older, slower response overwrite the newer selection. Responses are
//! therefore applied together with the `(asset, window)` they were fetched
//! for, and discarded when that tag no longer matches the live selection.

use serde::{Deserialize, Serialize};

use super::ChartSeries;
use crate::shared::{ChartAsset, Window};

/// Live chart state for the currently selected asset and window.
///
/// The app owns one instance. The series is replaced wholesale on every
/// applied response; there is no incremental update and no retained history
/// across selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    asset: ChartAsset,
    window: Window,
    series: Option<ChartSeries>,
}

impl ChartView {
    pub fn new(asset: ChartAsset, window: Window) -> Self {
        Self {
            asset,
            window,
            series: None,
        }
    }

    pub fn asset(&self) -> ChartAsset {
        self.asset
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// The last applied series, if any response for the current selection
    /// has arrived yet.
    pub fn series(&self) -> Option<&ChartSeries> {
        self.series.as_ref()
    }

    /// Change the selected asset, dropping the displayed series.
    pub fn select_asset(&mut self, asset: ChartAsset) {
        if self.asset != asset {
            self.asset = asset;
            self.series = None;
        }
    }

    /// Change the selected window, dropping the displayed series.
    pub fn select_window(&mut self, window: Window) {
        if self.window != window {
            self.window = window;
            self.series = None;
        }
    }

    /// Apply a fetched series tagged with the selection it was issued for.
    ///
    /// Returns `true` if the series was accepted. A response for a stale
    /// selection is discarded, which makes the latest request win regardless
    /// of arrival order.
    pub fn apply(&mut self, asset: ChartAsset, window: Window, series: ChartSeries) -> bool {
        if asset != self.asset || window != self.window {
            return false;
        }
        self.series = Some(series);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartPoint, ChartSeries};

    fn series(price: f64) -> ChartSeries {
        ChartSeries {
            points: vec![ChartPoint {
                label: "12:00".to_string(),
                price,
            }],
            ticks: vec![price; 6],
        }
    }

    #[test]
    fn test_apply_matching_selection() {
        let mut view = ChartView::new(ChartAsset::Bitcoin, Window::OneHour);
        assert!(view.apply(ChartAsset::Bitcoin, Window::OneHour, series(100.0)));
        assert_eq!(view.series().unwrap().latest_price(), Some(100.0));
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut view = ChartView::new(ChartAsset::Bitcoin, Window::OneHour);
        view.select_asset(ChartAsset::Cardano);
        // Response from the request issued for the old selection.
        assert!(!view.apply(ChartAsset::Bitcoin, Window::OneHour, series(100.0)));
        assert!(view.series().is_none());
    }

    #[test]
    fn test_latest_request_wins_out_of_order() {
        let mut view = ChartView::new(ChartAsset::Bitcoin, Window::OneHour);
        view.select_window(Window::ThreeMonths);
        // Newer request's response lands first...
        assert!(view.apply(ChartAsset::Bitcoin, Window::ThreeMonths, series(2.0)));
        // ...then the older one trickles in and is ignored.
        assert!(!view.apply(ChartAsset::Bitcoin, Window::OneHour, series(1.0)));
        assert_eq!(view.series().unwrap().latest_price(), Some(2.0));
    }

    #[test]
    fn test_selection_change_clears_series() {
        let mut view = ChartView::new(ChartAsset::Bitcoin, Window::OneHour);
        view.apply(ChartAsset::Bitcoin, Window::OneHour, series(100.0));
        view.select_window(Window::SixMonths);
        assert!(view.series().is_none());
        // Re-selecting the same window is a no-op.
        view.apply(ChartAsset::Bitcoin, Window::SixMonths, series(5.0));
        view.select_window(Window::SixMonths);
        assert!(view.series().is_some());
    }
}
