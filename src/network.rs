//! Network URL and request constants for the CoinGecko API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Quote currency for every price request. Multi-currency is not supported.
pub const VS_CURRENCY: &str = "usd";

/// Page size of the markets listing.
pub const MARKETS_PER_PAGE: u32 = 50;

/// Day range of the default chart request.
pub const DEFAULT_CHART_DAYS: u32 = 365;

/// Request timeout on native targets.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Header carrying a demo-plan API key.
pub const API_KEY_HEADER: &str = "x-cg-demo-api-key";
