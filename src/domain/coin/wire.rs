//! Wire types for coin responses (REST).
//!
//! Every field is optional or defaulted: CoinGecko omits whole sub-objects
//! for delisted or freshly listed coins, and sends explicit `null` for
//! numbers it has no data for.

use crate::shared::serde_util::{non_blank_strings, null_as_default};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A currency-keyed value map, e.g. `{"usd": 43250.0, "eur": 39800.1}`.
pub type CurrencyMap<T> = HashMap<String, Option<T>>;

/// A value CoinGecko sends either as a bare number or as a currency map.
///
/// `market_cap_change_24h` in `market_data` has shipped in both shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumberOrCurrencyMap {
    Number(f64),
    Map(CurrencyMap<f64>),
}

impl NumberOrCurrencyMap {
    /// The bare number, or the `currency` entry of the map form.
    pub fn in_currency(&self, currency: &str) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Map(map) => map.get(currency).copied().flatten(),
        }
    }
}

// ─── /coins/markets ──────────────────────────────────────────────────────────

/// One row of the `/coins/markets` listing. Flat, already quoted in `usd`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarketCoinResponse {
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub image: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<f64>,
    pub total_volume: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: Option<f64>,
    pub ath_change_percentage: Option<f64>,
    pub ath_date: Option<String>,
    pub atl: Option<f64>,
    pub atl_change_percentage: Option<f64>,
    pub atl_date: Option<String>,
    pub roi: Option<RoiResponse>,
    pub last_updated: Option<String>,
}

/// Return-on-investment block (ICO coins only).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoiResponse {
    pub times: Option<f64>,
    pub currency: Option<String>,
    pub percentage: Option<f64>,
}

// ─── /coins/{id} ─────────────────────────────────────────────────────────────

/// Raw `/coins/{id}` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CoinDetailResponse {
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub name: String,
    pub image: Option<ImageResponse>,
    pub market_data: Option<MarketDataResponse>,
    pub market_cap_rank: Option<u32>,
    pub roi: Option<RoiResponse>,
    pub last_updated: Option<String>,
    pub description: Option<DescriptionResponse>,
    pub links: Option<LinksResponse>,
    #[serde(deserialize_with = "non_blank_strings::deserialize")]
    pub categories: Vec<String>,
    pub sentiment_votes_up_percentage: Option<f64>,
    pub sentiment_votes_down_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImageResponse {
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DescriptionResponse {
    pub en: Option<String>,
}

/// `market_data` sub-object. Currency-keyed fields are maps; the rest are plain numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarketDataResponse {
    pub current_price: Option<CurrencyMap<f64>>,
    pub market_cap: Option<CurrencyMap<f64>>,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<CurrencyMap<f64>>,
    pub total_volume: Option<CurrencyMap<f64>>,
    pub high_24h: Option<CurrencyMap<f64>>,
    pub low_24h: Option<CurrencyMap<f64>>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_change_24h: Option<NumberOrCurrencyMap>,
    pub market_cap_change_percentage_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: Option<CurrencyMap<f64>>,
    pub ath_change_percentage: Option<CurrencyMap<f64>>,
    pub ath_date: Option<CurrencyMap<String>>,
    pub atl: Option<CurrencyMap<f64>>,
    pub atl_change_percentage: Option<CurrencyMap<f64>>,
    pub atl_date: Option<CurrencyMap<String>>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinksResponse {
    #[serde(deserialize_with = "non_blank_strings::deserialize")]
    pub homepage: Vec<String>,
    #[serde(deserialize_with = "non_blank_strings::deserialize")]
    pub blockchain_site: Vec<String>,
    #[serde(deserialize_with = "non_blank_strings::deserialize")]
    pub official_forum_url: Vec<String>,
    #[serde(deserialize_with = "non_blank_strings::deserialize")]
    pub chat_url: Vec<String>,
    #[serde(deserialize_with = "non_blank_strings::deserialize")]
    pub announcement_url: Vec<String>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub twitter_screen_name: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub facebook_username: String,
    pub bitcointalk_thread_id: Option<u64>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub telegram_channel_identifier: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub subreddit_url: String,
    pub repos_url: Option<ReposUrlResponse>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReposUrlResponse {
    #[serde(deserialize_with = "non_blank_strings::deserialize")]
    pub github: Vec<String>,
    #[serde(deserialize_with = "non_blank_strings::deserialize")]
    pub bitbucket: Vec<String>,
}

// ─── /simple/price ───────────────────────────────────────────────────────────

/// `/simple/price` payload: coin id → currency → price.
pub type SimplePriceResponse = HashMap<String, CurrencyMap<f64>>;
