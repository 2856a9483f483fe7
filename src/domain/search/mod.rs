//! Search domain: remote coin search results.
//!
//! Filtering an already-loaded list lives on the coin side, see
//! [`crate::domain::coin::filter_coins`].

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

pub(crate) use convert::results;

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

/// A coin matched by `/search`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: CoinId,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: String,
    pub large: String,
}

/// Normalized cache key for a search query. `None` when the query is blank.
pub fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim();
    if q.is_empty() {
        None
    } else {
        Some(q.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  BitCoin "), Some("bitcoin".to_string()));
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(""), None);
    }
}
