//! Conversion: `SearchResponse` → `SearchResult`s.
//!
//! Entries without an id are dropped; a missing large image falls back to the small one.

use super::wire::{SearchCoinResponse, SearchResponse};
use super::SearchResult;
use crate::shared::CoinId;

impl From<SearchCoinResponse> for SearchResult {
    fn from(w: SearchCoinResponse) -> Self {
        Self {
            id: CoinId::new(w.id),
            name: w.name,
            symbol: w.symbol,
            market_cap_rank: w.market_cap_rank,
            thumb: w.thumb,
            large: if w.large.is_empty() { w.small } else { w.large },
        }
    }
}

/// Results in upstream order, minus entries without an id.
pub(crate) fn results(resp: SearchResponse) -> Vec<SearchResult> {
    resp.coins
        .into_iter()
        .filter(|c| !c.id.trim().is_empty())
        .map(SearchResult::from)
        .collect()
}
