//! Wire types for the market-chart endpoint.

use serde::Deserialize;

use super::RawSample;

/// Raw market-chart response.
///
/// The provider sends prices as `[timestamp_ms, price]` JSON pairs; sibling
/// arrays (market caps, volumes) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(i64, f64)>,
}

impl MarketChartResponse {
    /// Convert the wire pairs into domain samples, preserving order.
    pub fn into_samples(self) -> Vec<RawSample> {
        self.prices
            .into_iter()
            .map(|(timestamp_ms, price)| RawSample {
                timestamp_ms,
                price,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_provider_shape() {
        let raw = r#"{
            "prices": [[1700000000000, 36500.12], [1700000060000, 36510.5]],
            "market_caps": [[1700000000000, 1.0]],
            "total_volumes": [[1700000000000, 2.0]]
        }"#;
        let resp: MarketChartResponse = serde_json::from_str(raw).unwrap();
        let samples = resp.into_samples();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].timestamp_ms, 1_700_000_000_000);
        assert_eq!(samples[0].price, 36500.12);
        assert_eq!(samples[1].price, 36510.5);
    }

    #[test]
    fn test_decode_empty_prices() {
        let resp: MarketChartResponse = serde_json::from_str(r#"{"prices":[]}"#).unwrap();
        assert!(resp.into_samples().is_empty());
    }

    #[test]
    fn test_missing_prices_is_an_error() {
        let res: Result<MarketChartResponse, _> = serde_json::from_str(r#"{"result":"ok"}"#);
        assert!(res.is_err());
    }
}
