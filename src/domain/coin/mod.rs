//! Coin domain: market listing rows, coin detail, links.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

// ─── Coin ────────────────────────────────────────────────────────────────────

/// A coin with its `usd` market data.
///
/// Numeric fields are `None` when CoinGecko has no data for them. The only
/// coercion is `current_price`, which is `0.0` when absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: f64,
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
    pub atl: Option<f64>,
    pub ath_change_percentage: Option<f64>,
    pub atl_change_percentage: Option<f64>,
    pub ath_date: Option<String>,
    pub atl_date: Option<String>,
    pub roi: Option<Roi>,
    pub last_updated: String,
}

impl Coin {
    /// `true` when the 24h change is zero or positive. Missing data counts as flat.
    pub fn is_up_24h(&self) -> bool {
        self.price_change_percentage_24h.unwrap_or(0.0) >= 0.0
    }

    /// Case-insensitive match against name or symbol.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.symbol.to_lowercase().contains(&needle)
    }
}

/// Return on investment since ICO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roi {
    pub times: f64,
    pub currency: String,
    pub percentage: f64,
}

// ─── CoinDetail ──────────────────────────────────────────────────────────────

/// A coin plus its description, links, categories and community sentiment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoinDetail {
    #[serde(flatten)]
    pub coin: Coin,
    /// English description (may contain HTML anchors).
    pub description: String,
    pub links: CoinLinks,
    pub categories: Vec<String>,
    /// 0–100.
    pub sentiment_votes_up_percentage: Option<f64>,
    /// 0–100.
    pub sentiment_votes_down_percentage: Option<f64>,
}

/// External links for a coin. `Default` is the all-empty bundle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoinLinks {
    pub homepage: Vec<String>,
    pub blockchain_site: Vec<String>,
    pub official_forum_url: Vec<String>,
    pub chat_url: Vec<String>,
    pub announcement_url: Vec<String>,
    pub twitter_screen_name: String,
    pub facebook_username: String,
    pub bitcointalk_thread_id: Option<u64>,
    pub telegram_channel_identifier: String,
    pub subreddit_url: String,
    pub repos_url: ReposUrl,
}

impl CoinLinks {
    /// First homepage URL, if any.
    pub fn primary_homepage(&self) -> Option<&str> {
        self.homepage.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        *self == CoinLinks::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReposUrl {
    pub github: Vec<String>,
    pub bitbucket: Vec<String>,
}

/// Filter a coin list by a free-text query on name or symbol.
///
/// An empty query returns every coin.
pub fn filter_coins<'a>(coins: &'a [Coin], query: &str) -> Vec<&'a Coin> {
    coins.iter().filter(|c| c.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(id: &str, name: &str, symbol: &str) -> Coin {
        Coin {
            id: CoinId::from(id),
            name: name.to_string(),
            symbol: symbol.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_coins_by_name_and_symbol() {
        let coins = vec![
            coin("bitcoin", "Bitcoin", "btc"),
            coin("ethereum", "Ethereum", "eth"),
            coin("tether", "Tether", "usdt"),
        ];
        let by_name: Vec<_> = filter_coins(&coins, "ether").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(by_name, ["ethereum", "tether"]);

        let by_symbol: Vec<_> = filter_coins(&coins, "BTC").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(by_symbol, ["bitcoin"]);
    }

    #[test]
    fn test_filter_coins_empty_query_returns_all() {
        let coins = vec![coin("bitcoin", "Bitcoin", "btc")];
        assert_eq!(filter_coins(&coins, "  ").len(), 1);
    }

    #[test]
    fn test_is_up_24h_treats_missing_as_flat() {
        let mut c = coin("bitcoin", "Bitcoin", "btc");
        assert!(c.is_up_24h());
        c.price_change_percentage_24h = Some(-0.5);
        assert!(!c.is_up_24h());
    }

    #[test]
    fn test_default_links_are_empty() {
        let links = CoinLinks::default();
        assert!(links.is_empty());
        assert_eq!(links.primary_homepage(), None);
    }
}
