//! Low-level HTTP client: `CoinGeckoHttp`.
//!
//! One method per API endpoint. Returns wire types; conversion to domain types
//! happens in the sub-clients. `CoinboardClient` wraps this.

use crate::domain::chart::wire::MarketChartResponse;
use crate::domain::coin::wire::{CoinDetailResponse, MarketCoinResponse, SimplePriceResponse};
use crate::domain::search::wire::SearchResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::network::{API_KEY_HEADER, MARKETS_PER_PAGE, VS_CURRENCY};
use crate::shared::{ChartRange, CoinId};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the CoinGecko REST API.
#[derive(Clone)]
pub struct CoinGeckoHttp {
    base_url: String,
    client: Client,
    /// Demo-plan API key, sent as a header. Never logged.
    api_key: Option<String>,
    /// Applied to every endpoint. `Idempotent` unless overridden.
    retry: RetryPolicy,
}

impl std::fmt::Debug for CoinGeckoHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoHttp")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("retry", &self.retry)
            .finish()
    }
}

impl CoinGeckoHttp {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            api_key,
            retry: RetryPolicy::Idempotent,
        })
    }

    /// Replace the retry policy used by every endpoint.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    // ── Coins ────────────────────────────────────────────────────────────

    /// Top coins by market cap, `MARKETS_PER_PAGE` per page. Pages are 1-based.
    pub async fn get_markets(&self, page: u32) -> Result<Vec<MarketCoinResponse>, HttpError> {
        let url = endpoint_url(
            &self.base_url,
            "/coins/markets",
            &[
                ("vs_currency", VS_CURRENCY.to_string()),
                ("order", "market_cap_desc".to_string()),
                ("per_page", MARKETS_PER_PAGE.to_string()),
                ("page", page.max(1).to_string()),
                ("sparkline", "false".to_string()),
            ],
        );
        self.get(&url, &self.retry).await
    }

    pub async fn get_coin(&self, id: &CoinId) -> Result<CoinDetailResponse, HttpError> {
        let url = endpoint_url(
            &self.base_url,
            &format!("/coins/{}", urlencoding::encode(id.as_str())),
            &[
                ("localization", "false".to_string()),
                ("tickers", "false".to_string()),
                ("market_data", "true".to_string()),
                ("community_data", "false".to_string()),
                ("developer_data", "false".to_string()),
            ],
        );
        self.get(&url, &self.retry).await
    }

    /// Current `usd` prices for several coins at once.
    pub async fn get_simple_prices(
        &self,
        ids: &[CoinId],
    ) -> Result<SimplePriceResponse, HttpError> {
        let joined = ids.iter().map(CoinId::as_str).collect::<Vec<_>>().join(",");
        let url = endpoint_url(
            &self.base_url,
            "/simple/price",
            &[("ids", joined), ("vs_currencies", VS_CURRENCY.to_string())],
        );
        self.get(&url, &self.retry).await
    }

    // ── Charts ───────────────────────────────────────────────────────────

    pub async fn get_market_chart(
        &self,
        id: &CoinId,
        range: ChartRange,
    ) -> Result<MarketChartResponse, HttpError> {
        let url = endpoint_url(
            &self.base_url,
            &format!("/coins/{}/market_chart", urlencoding::encode(id.as_str())),
            &[
                ("vs_currency", VS_CURRENCY.to_string()),
                ("days", range.as_str().to_string()),
            ],
        );
        self.get(&url, &self.retry).await
    }

    // ── Search ───────────────────────────────────────────────────────────

    pub async fn search(&self, query: &str) -> Result<SearchResponse, HttpError> {
        let url = endpoint_url(&self.base_url, "/search", &[("query", query.to_string())]);
        self.get(&url, &self.retry).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str, retry: &RetryPolicy) -> Result<T, HttpError> {
        let config = match retry {
            RetryPolicy::None => {
                return self.do_get(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if config.should_retry(&e) && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else if attempt > 0 && config.should_retry(&e) {
                        return Err(HttpError::MaxRetriesExceeded {
                            attempts: attempt + 1,
                            last_error: e.to_string(),
                        });
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let mut req = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after_ms);
        let body_text = resp.text().await.unwrap_or_default();

        let err = classify_status(status.as_u16(), body_text, retry_after_ms);
        if let HttpError::RateLimited { retry_after_ms } = &err {
            tracing::warn!(url, ?retry_after_ms, "Rate limited by CoinGecko API");
        }
        Err(err)
    }
}

/// Join base URL, path and URL-encoded query parameters.
pub(crate) fn endpoint_url(base_url: &str, path: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("{}{}", base_url, path);
    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        url = format!("{}?{}", url, query);
    }
    url
}

/// Map a non-success status to an `HttpError`.
pub(crate) fn classify_status(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        404 => HttpError::NotFound(body),
        408 => HttpError::Timeout,
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest { status, body },
        _ => HttpError::ServerError { status, body },
    }
}

/// `Retry-After` in delta-seconds form. HTTP-date values are ignored.
fn parse_retry_after_ms(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().map(|secs| secs * 1000)
}
