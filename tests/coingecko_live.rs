//! Live tests against the public CoinGecko API.
//!
//! All tests are `#[ignore]` because they require network access and the
//! free tier rate-limits aggressively. A demo key in `COINGECKO_API_KEY`
//! (environment or `.env`) is sent when present.
//!
//! Run with:
//! ```bash
//! cargo test --features native --test coingecko_live -- --ignored --test-threads=1
//! ```

use coinboard::prelude::*;

fn client() -> CoinboardClient {
    dotenvy::dotenv().ok();
    let mut builder = CoinboardClient::builder();
    if let Ok(key) = std::env::var("COINGECKO_API_KEY") {
        builder = builder.api_key(key);
    }
    builder.build().expect("client should build")
}

#[tokio::test]
#[ignore]
async fn markets_first_page() {
    let client = client();
    let coins = client.coins().list(1).await.expect("markets");
    assert!(!coins.is_empty());
    assert!(coins.len() <= 50);
    assert_eq!(coins[0].market_cap_rank, Some(1));

    // Second call is served from cache.
    let again = client.coins().list(1).await.expect("cached markets");
    assert_eq!(coins, again);
}

#[tokio::test]
#[ignore]
async fn bitcoin_detail_and_chart() {
    let client = client();
    let bitcoin = CoinId::from("bitcoin");

    let detail = client.coins().get(&bitcoin).await.expect("detail");
    assert_eq!(detail.coin.symbol, "btc");
    assert!(detail.coin.current_price > 0.0);
    assert!(detail.links.primary_homepage().is_some());

    let chart = client
        .charts()
        .get(&bitcoin, ChartRange::Week1)
        .await
        .expect("chart");
    assert!(!chart.prices.is_empty());
    assert!(ChartLayout::compute(&chart.prices, ChartSurface::default()).is_some());
}

#[tokio::test]
#[ignore]
async fn unknown_coin_is_not_found() {
    let client = client();
    let err = client
        .coins()
        .get(&CoinId::from("definitely-not-a-coin-zzz"))
        .await
        .unwrap_err();
    let failure = FetchFailure::from(&err);
    assert_eq!(failure.kind, FailureKind::NotFound);
    assert!(!failure.retryable);
}

#[tokio::test]
#[ignore]
async fn search_finds_ethereum() {
    let client = client();
    let results = client.search().query("ethereum").await.expect("search");
    assert!(results.iter().any(|r| r.id.as_str() == "ethereum"));
}

#[tokio::test]
#[ignore]
async fn simple_prices() {
    let client = client();
    let ids = [CoinId::from("bitcoin"), CoinId::from("ethereum")];
    let prices = client.coins().prices(&ids).await.expect("prices");
    assert!(prices.contains_key(&ids[0]));
}
