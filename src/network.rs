//! Network URL constants.

/// Default base URL of the market-data provider (price history + spot prices).
pub const DEFAULT_MARKET_API_URL: &str = "https://api.coingecko.com/api/v3";
