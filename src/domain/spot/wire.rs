//! Wire types for the spot-price endpoint.

use serde::Deserialize;

use super::SpotPrices;

/// Per-asset quote object (`{"usd": 97123.45}`).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UsdQuote {
    pub usd: f64,
}

/// Raw spot-price response, keyed by asset identifier.
///
/// All four assets are required; a snapshot missing one is malformed and
/// rejected wholesale rather than rendered partially.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SpotPriceResponse {
    pub bitcoin: UsdQuote,
    pub litecoin: UsdQuote,
    pub cardano: UsdQuote,
    pub tether: UsdQuote,
}

impl From<SpotPriceResponse> for SpotPrices {
    fn from(r: SpotPriceResponse) -> Self {
        Self {
            bitcoin: r.bitcoin.usd,
            litecoin: r.litecoin.usd,
            cardano: r.cardano.usd,
            tether: r.tether.usd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_provider_shape() {
        let raw = r#"{
            "bitcoin": {"usd": 97123.45},
            "litecoin": {"usd": 104.2},
            "cardano": {"usd": 0.91},
            "tether": {"usd": 1.0}
        }"#;
        let resp: SpotPriceResponse = serde_json::from_str(raw).unwrap();
        let spot = SpotPrices::from(resp);
        assert_eq!(spot.bitcoin, 97123.45);
        assert_eq!(spot.tether, 1.0);
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        let raw = r#"{"bitcoin": {"usd": 97123.45}}"#;
        assert!(serde_json::from_str::<SpotPriceResponse>(raw).is_err());
    }
}
