//! Query layer: cache policies, keyed cache, presentation fetch state.
//!
//! Transformation of responses lives in the domain `convert` modules and is
//! pure. This module only decides *when* a value is reused or refetched.

pub mod cache;
pub mod state;

pub use cache::{Clock, Freshness, QueryCache};
pub use state::{FailureKind, FetchFailure, FetchState};

use std::time::Duration;

/// Staleness and retention windows for one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// After this long a cached value is refetched on the next read.
    pub stale_time: Duration,
    /// After this long a cached value is evicted, used or not.
    pub gc_time: Duration,
}

impl CachePolicy {
    pub const fn new(stale_time: Duration, gc_time: Duration) -> Self {
        Self {
            stale_time,
            gc_time,
        }
    }

    /// Markets listing: 1 min stale, 5 min retained.
    pub const fn coin_list() -> Self {
        Self::new(Duration::from_secs(60), Duration::from_secs(5 * 60))
    }

    /// Coin detail: 5 min stale, 15 min retained.
    pub const fn coin_detail() -> Self {
        Self::new(Duration::from_secs(5 * 60), Duration::from_secs(15 * 60))
    }

    /// Market chart: 30 min stale, 1 h retained.
    pub const fn coin_chart() -> Self {
        Self::new(Duration::from_secs(30 * 60), Duration::from_secs(60 * 60))
    }

    /// Search: 5 min stale, 10 min retained.
    pub const fn search() -> Self {
        Self::new(Duration::from_secs(5 * 60), Duration::from_secs(10 * 60))
    }
}
