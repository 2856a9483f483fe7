//! # coinboard
//!
//! Client-side SDK for a CoinGecko-backed crypto dashboard, for native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: domain models, formatting, chart math, favorites, query cache (always available, WASM-safe)
//! 2. **HTTP API**: `CoinGeckoHttp` with per-endpoint retry policies
//! 3. **High-Level Client**: `CoinboardClient` with nested sub-clients and caching
//! 4. **Platform storage**: `MemoryStorage`, `FileStorage` (native), `WebStorage` (`web-storage`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinboard::prelude::*;
//!
//! let client = CoinboardClient::builder().build()?;
//!
//! let coins = client.coins().list(1).await?;
//! let chart = client.charts().get(&CoinId::from("bitcoin"), ChartRange::Year1).await?;
//!
//! let mut favorites = FavoritesState::from_storage(MemoryStorage::new());
//! favorites.toggle(&coins[0].id);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, formatting and serde helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Cache policies, keyed query cache, presentation fetch state.
pub mod query;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinboardClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ChartRange, CoinId};

    // Domain types: coin, search
    pub use crate::domain::coin::{filter_coins, Coin, CoinDetail, CoinLinks, ReposUrl, Roi};
    pub use crate::domain::search::SearchResult;

    // Domain types: chart
    pub use crate::domain::chart::geometry::{label_decimals, ChartLayout, ChartSurface, PriceBounds};
    pub use crate::domain::chart::interaction::{
        ChartInteraction, PointerKind, SurfaceRect, TooltipPlacement, TooltipState,
    };
    pub use crate::domain::chart::view::PriceChart;
    pub use crate::domain::chart::{ChartPoint, ChartSeries, MarketChart};

    // Favorites
    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::domain::favorites::storage::FileStorage;
    #[cfg(feature = "web-storage")]
    pub use crate::domain::favorites::web::WebStorage;
    pub use crate::domain::favorites::{
        FavoriteSet, FavoritesState, FavoritesStore, MemoryStorage, StorageBackend, StorageEvent,
        FAVORITES_KEY,
    };

    // Query state
    pub use crate::query::{CachePolicy, FailureKind, FetchFailure, FetchState};

    // Errors
    pub use crate::error::{HttpError, SdkError, StorageError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        ChartsClient, CoinboardClient, CoinboardClientBuilder, CoinsClient, SearchSubClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
