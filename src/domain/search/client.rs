//! Search sub-client.

use super::{normalize_query, results, SearchResult};
use crate::client::CoinboardClient;
use crate::error::SdkError;

/// Sub-client for `/search`.
pub struct SearchClient<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> SearchClient<'a> {
    /// Search coins by name or symbol. A blank query returns no results
    /// without a request.
    pub async fn query(&self, query: &str) -> Result<Vec<SearchResult>, SdkError> {
        let Some(key) = normalize_query(query) else {
            return Ok(Vec::new());
        };
        let http = &self.client.http;
        self.client
            .search_cache
            .get_or_fetch(key.clone(), || async move {
                let resp = http.search(&key).await?;
                Ok::<_, SdkError>(results(resp))
            })
            .await
    }

    pub async fn invalidate(&self, query: &str) {
        if let Some(key) = normalize_query(query) {
            self.client.search_cache.invalidate(&key).await;
        }
    }

    pub async fn clear_cache(&self) {
        self.client.search_cache.clear().await;
    }
}
