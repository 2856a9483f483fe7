//! Coins sub-client: market listing, coin detail, spot prices.

use super::convert::usd_prices;
use super::{Coin, CoinDetail};
use crate::client::CoinboardClient;
use crate::error::SdkError;
use crate::shared::CoinId;
use std::collections::HashMap;

/// Sub-client for coin operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> Coins<'a> {
    /// One page (1-based) of the top coins by market cap. Cached per page.
    pub async fn list(&self, page: u32) -> Result<Vec<Coin>, SdkError> {
        let page = page.max(1);
        let http = &self.client.http;
        self.client
            .coin_list_cache
            .get_or_fetch(page, || async move {
                let rows = http.get_markets(page).await?;
                Ok::<_, SdkError>(rows.into_iter().map(Coin::from).collect())
            })
            .await
    }

    /// Full detail for one coin. Cached per id.
    pub async fn get(&self, id: &CoinId) -> Result<CoinDetail, SdkError> {
        if id.as_str().trim().is_empty() {
            return Err(SdkError::Validation("coin id must not be empty".to_string()));
        }
        let http = &self.client.http;
        self.client
            .coin_detail_cache
            .get_or_fetch(id.clone(), || async move {
                let raw = http.get_coin(id).await?;
                Ok::<_, SdkError>(CoinDetail::from(raw))
            })
            .await
    }

    /// Current `usd` prices, uncached. Coins CoinGecko has no quote for are absent.
    pub async fn prices(&self, ids: &[CoinId]) -> Result<HashMap<CoinId, f64>, SdkError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let raw = self.client.http.get_simple_prices(ids).await?;
        Ok(usd_prices(raw))
    }

    /// Drop a cached coin detail.
    pub async fn invalidate(&self, id: &CoinId) {
        self.client.coin_detail_cache.invalidate(id).await;
    }

    /// Drop a cached listing page.
    pub async fn invalidate_page(&self, page: u32) {
        self.client.coin_list_cache.invalidate(&page.max(1)).await;
    }

    /// Clear listing and detail caches.
    pub async fn clear_cache(&self) {
        self.client.coin_list_cache.clear().await;
        self.client.coin_detail_cache.clear().await;
    }
}
