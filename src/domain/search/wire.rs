//! Wire types for `/search`.
//!
//! Only the `coins` section is read; exchanges, categories and NFTs are ignored.

use crate::shared::serde_util::null_as_default;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub coins: Vec<SearchCoinResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchCoinResponse {
    pub id: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub thumb: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub small: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub large: String,
}
