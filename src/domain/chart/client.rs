//! Charts sub-client: historical market charts.

use super::MarketChart;
use crate::client::CoinboardClient;
use crate::error::SdkError;
use crate::shared::{ChartRange, CoinId};

/// Sub-client for chart operations.
pub struct Charts<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> Charts<'a> {
    /// Market chart for `id` over `range`. Cached per `(id, range)`.
    pub async fn get(&self, id: &CoinId, range: ChartRange) -> Result<MarketChart, SdkError> {
        if id.as_str().trim().is_empty() {
            return Err(SdkError::Validation("coin id must not be empty".to_string()));
        }
        let http = &self.client.http;
        self.client
            .chart_cache
            .get_or_fetch((id.clone(), range), || async move {
                let raw = http.get_market_chart(id, range).await?;
                Ok::<_, SdkError>(MarketChart::from(raw))
            })
            .await
    }

    pub async fn invalidate(&self, id: &CoinId, range: ChartRange) {
        self.client
            .chart_cache
            .invalidate(&(id.clone(), range))
            .await;
    }

    pub async fn clear_cache(&self) {
        self.client.chart_cache.clear().await;
    }
}
