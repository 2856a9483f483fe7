//! HTTP client layer: `CoinGeckoHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::CoinGeckoHttp;
pub use retry::{RetryConfig, RetryPolicy};
