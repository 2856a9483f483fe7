//! High-level client: `CoinboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::chart::client::Charts;
use crate::domain::chart::MarketChart;
use crate::domain::coin::client::Coins;
use crate::domain::coin::{Coin, CoinDetail};
use crate::domain::search::client::SearchClient;
use crate::domain::search::SearchResult;
use crate::error::SdkError;
use crate::http::{CoinGeckoHttp, RetryPolicy};
use crate::query::{CachePolicy, QueryCache};
use crate::shared::{ChartRange, CoinId};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::chart::client::Charts as ChartsClient;
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::search::client::SearchClient as SearchSubClient;

/// The primary entry point for CoinGecko data.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()`, `client.charts()`, `client.search()`.
/// Clones share the HTTP connection pool and every cache.
#[derive(Clone)]
pub struct CoinboardClient {
    pub(crate) http: CoinGeckoHttp,
    /// Markets listing: page → coins
    pub(crate) coin_list_cache: QueryCache<u32, Vec<Coin>>,
    /// Coin detail: id → detail
    pub(crate) coin_detail_cache: QueryCache<CoinId, CoinDetail>,
    /// Market chart: (id, range) → chart
    pub(crate) chart_cache: QueryCache<(CoinId, ChartRange), MarketChart>,
    /// Search: normalized query → results
    pub(crate) search_cache: QueryCache<String, Vec<SearchResult>>,
}

impl CoinboardClient {
    pub fn builder() -> CoinboardClientBuilder {
        CoinboardClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn charts(&self) -> Charts<'_> {
        Charts { client: self }
    }

    pub fn search(&self) -> SearchClient<'_> {
        SearchClient { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.coin_list_cache.clear().await;
        self.coin_detail_cache.clear().await;
        self.chart_cache.clear().await;
        self.search_cache.clear().await;
    }

    /// Evict entries past their retention window in every cache.
    /// Returns the number of entries removed.
    pub async fn collect_garbage(&self) -> usize {
        let evicted = self.coin_list_cache.collect_garbage().await
            + self.coin_detail_cache.collect_garbage().await
            + self.chart_cache.collect_garbage().await
            + self.search_cache.collect_garbage().await;
        if evicted > 0 {
            tracing::debug!(evicted, "evicted expired cache entries");
        }
        evicted
    }
}

impl std::fmt::Debug for CoinboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinboardClient")
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinboardClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    retry: RetryPolicy,
    coin_list_policy: CachePolicy,
    coin_detail_policy: CachePolicy,
    chart_policy: CachePolicy,
    search_policy: CachePolicy,
}

impl Default for CoinboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(crate::network::DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::Idempotent,
            coin_list_policy: CachePolicy::coin_list(),
            coin_detail_policy: CachePolicy::coin_detail(),
            chart_policy: CachePolicy::coin_chart(),
            search_policy: CachePolicy::search(),
        }
    }
}

impl CoinboardClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// CoinGecko demo API key. Blank keys are ignored.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = (!key.trim().is_empty()).then_some(key);
        self
    }

    /// Request timeout. Native targets only; the browser owns timeouts on wasm.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry policy for every request. Defaults to [`RetryPolicy::Idempotent`].
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn coin_list_policy(mut self, policy: CachePolicy) -> Self {
        self.coin_list_policy = policy;
        self
    }

    pub fn coin_detail_policy(mut self, policy: CachePolicy) -> Self {
        self.coin_detail_policy = policy;
        self
    }

    pub fn chart_policy(mut self, policy: CachePolicy) -> Self {
        self.chart_policy = policy;
        self
    }

    pub fn search_policy(mut self, policy: CachePolicy) -> Self {
        self.search_policy = policy;
        self
    }

    pub fn build(self) -> Result<CoinboardClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base_url must not be empty".to_string()));
        }
        for policy in [
            self.coin_list_policy,
            self.coin_detail_policy,
            self.chart_policy,
            self.search_policy,
        ] {
            if policy.gc_time < policy.stale_time {
                return Err(SdkError::Validation(format!(
                    "retention window {:?} is shorter than staleness window {:?}",
                    policy.gc_time, policy.stale_time
                )));
            }
        }

        Ok(CoinboardClient {
            http: CoinGeckoHttp::new(&self.base_url, self.api_key, self.timeout)?
                .with_retry_policy(self.retry),
            coin_list_cache: QueryCache::new(self.coin_list_policy),
            coin_detail_cache: QueryCache::new(self.coin_detail_policy),
            chart_cache: QueryCache::new(self.chart_policy),
            search_cache: QueryCache::new(self.search_policy),
        })
    }
}
