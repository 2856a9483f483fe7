//! Wire types for `/coins/{id}/market_chart`.

use crate::shared::serde_util::null_as_default;
use serde::Deserialize;

/// `[timestamp_ms, value]`. CoinGecko occasionally sends `null` values.
pub type RawPoint = (f64, Option<f64>);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarketChartResponse {
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub prices: Vec<RawPoint>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub market_caps: Vec<RawPoint>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub total_volumes: Vec<RawPoint>,
}
