//! Keyed query cache with staleness + retention windows and request coalescing.

use super::CachePolicy;
use async_lock::{Mutex, RwLock};
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Wall-clock source for entry timestamps. `Utc::now` by default, which reads
/// `Date.now()` on `wasm32-unknown-unknown`.
pub type Clock = fn() -> DateTime<Utc>;

/// How old a cached value is relative to its policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Younger than the staleness window: served without refetching.
    Fresh,
    /// Past the staleness window but still retained: refetched on next read.
    Stale,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    fetched_at: DateTime<Utc>,
}

impl<V> Entry<V> {
    /// Time since the fetch. A clock that moved backwards counts as zero.
    fn age(&self, now: DateTime<Utc>) -> Duration {
        (now - self.fetched_at).to_std().unwrap_or(Duration::ZERO)
    }
}

/// A cache of query results keyed by `K`.
///
/// Cheap to clone; clones share the same storage. Concurrent
/// [`get_or_fetch`](QueryCache::get_or_fetch) calls for the same key run a
/// single fetch: later callers wait on a per-key gate and then read the value
/// the first caller stored.
pub struct QueryCache<K, V> {
    policy: CachePolicy,
    clock: Clock,
    entries: Arc<RwLock<HashMap<K, Entry<V>>>>,
    gates: Arc<Mutex<HashMap<K, Arc<Mutex<()>>>>>,
}

impl<K, V> Clone for QueryCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            policy: self.policy,
            clock: self.clock,
            entries: self.entries.clone(),
            gates: self.gates.clone(),
        }
    }
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    pub fn new(policy: CachePolicy) -> Self {
        Self::with_clock(policy, Utc::now)
    }

    /// A cache that timestamps entries with `clock` instead of `Utc::now`.
    pub fn with_clock(policy: CachePolicy, clock: Clock) -> Self {
        Self {
            policy,
            clock,
            entries: Arc::new(RwLock::new(HashMap::new())),
            gates: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Cached value if it is still inside the staleness window.
    pub async fn get_fresh(&self, key: &K) -> Option<V> {
        match self.peek(key).await {
            Some((value, Freshness::Fresh)) => Some(value),
            _ => None,
        }
    }

    /// Cached value with its freshness, as long as it is still retained.
    pub async fn peek(&self, key: &K) -> Option<(V, Freshness)> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        let age = entry.age((self.clock)());
        if age >= self.policy.gc_time {
            return None;
        }
        let freshness = if age < self.policy.stale_time {
            Freshness::Fresh
        } else {
            Freshness::Stale
        };
        Some((entry.value.clone(), freshness))
    }

    /// Return the fresh cached value, or run `fetch` once and cache its result.
    ///
    /// Errors are returned to every caller that ran the fetch and are never cached.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get_fresh(&key).await {
            return Ok(value);
        }

        let gate = {
            let mut gates = self.gates.lock().await;
            gates
                .entry(key.clone())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        let result = {
            let _guard = gate.lock().await;

            // Another caller may have filled the entry while we waited.
            if let Some(value) = self.get_fresh(&key).await {
                tracing::trace!(?key, "query coalesced");
                Ok(value)
            } else {
                tracing::debug!(?key, "query fetch");
                let fetched = fetch().await;
                if let Ok(value) = &fetched {
                    self.insert(key.clone(), value.clone()).await;
                }
                fetched
            }
        };

        let mut gates = self.gates.lock().await;
        // Map + our handle = 2: nobody else is waiting on this gate.
        if gates
            .get(&key)
            .is_some_and(|existing| Arc::strong_count(existing) <= 2)
        {
            gates.remove(&key);
        }

        result
    }

    /// Store a value, replacing any previous entry, and drop expired entries.
    pub async fn insert(&self, key: K, value: V) {
        let gc_time = self.policy.gc_time;
        let now = (self.clock)();
        let mut entries = self.entries.write().await;
        entries.retain(|_, e| e.age(now) < gc_time);
        entries.insert(
            key,
            Entry {
                value,
                fetched_at: now,
            },
        );
    }

    pub async fn invalidate(&self, key: &K) {
        self.entries.write().await.remove(key);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Evict every entry past the retention window. Returns how many were removed.
    pub async fn collect_garbage(&self) -> usize {
        let gc_time = self.policy.gc_time;
        let now = (self.clock)();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| e.age(now) < gc_time);
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

    fn long_policy() -> CachePolicy {
        CachePolicy::new(Duration::from_secs(60), Duration::from_secs(300))
    }

    #[tokio::test]
    async fn test_fresh_value_is_served_without_fetch() {
        let cache: QueryCache<u32, String> = QueryCache::new(long_policy());
        let calls = AtomicU32::new(0);

        for _ in 0..3 {
            let v = cache
                .get_or_fetch(1, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ()>("page-1".to_string())
                })
                .await
                .unwrap();
            assert_eq!(v, "page-1");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_value_is_refetched() {
        let policy = CachePolicy::new(Duration::ZERO, Duration::from_secs(300));
        let cache: QueryCache<u32, u32> = QueryCache::new(policy);
        let calls = AtomicU32::new(0);

        for expected in 1..=2 {
            let v = cache
                .get_or_fetch(7, || async { Ok::<_, ()>(calls.fetch_add(1, Ordering::SeqCst) + 1) })
                .await
                .unwrap();
            assert_eq!(v, expected);
        }
        assert!(matches!(cache.peek(&7).await, Some((2, Freshness::Stale))));
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache: QueryCache<&'static str, u32> = QueryCache::new(long_policy());

        let first = cache
            .get_or_fetch("bitcoin", || async { Err::<u32, _>("rate limited") })
            .await;
        assert_eq!(first, Err("rate limited"));
        assert!(cache.is_empty().await);

        let second = cache
            .get_or_fetch("bitcoin", || async { Ok::<_, &str>(42) })
            .await;
        assert_eq!(second, Ok(42));
    }

    #[tokio::test]
    async fn test_concurrent_requests_are_coalesced() {
        let cache: QueryCache<&'static str, u32> = QueryCache::new(long_policy());
        let calls = Arc::new(AtomicU32::new(0));

        let fetch = |calls: Arc<AtomicU32>| async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, ()>(100)
        };

        let (a, b, c) = tokio::join!(
            cache.get_or_fetch("ethereum", || fetch(calls.clone())),
            cache.get_or_fetch("ethereum", || fetch(calls.clone())),
            cache.get_or_fetch("ethereum", || fetch(calls.clone())),
        );
        assert_eq!((a, b, c), (Ok(100), Ok(100), Ok(100)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.gates.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_retention_window_evicts() {
        let policy = CachePolicy::new(Duration::ZERO, Duration::ZERO);
        let cache: QueryCache<u32, u32> = QueryCache::new(policy);
        cache.insert(1, 1).await;
        assert_eq!(cache.peek(&1).await, None);
        assert_eq!(cache.collect_garbage().await, 1);
        assert!(cache.is_empty().await);
    }

    static MANUAL_NOW_MS: AtomicI64 = AtomicI64::new(1_700_000_000_000);

    fn manual_clock() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(MANUAL_NOW_MS.load(Ordering::SeqCst)).unwrap_or_default()
    }

    fn advance_ms(ms: i64) {
        MANUAL_NOW_MS.fetch_add(ms, Ordering::SeqCst);
    }

    #[tokio::test]
    async fn test_injected_clock_drives_freshness() {
        let policy = CachePolicy::new(Duration::from_secs(60), Duration::from_secs(300));
        let cache: QueryCache<u32, u32> = QueryCache::with_clock(policy, manual_clock);
        cache.insert(1, 10).await;
        assert_eq!(cache.peek(&1).await, Some((10, Freshness::Fresh)));

        advance_ms(60_000);
        assert_eq!(cache.peek(&1).await, Some((10, Freshness::Stale)));

        // Clock skew backwards still reads as a fresh entry.
        advance_ms(-120_000);
        assert_eq!(cache.peek(&1).await, Some((10, Freshness::Fresh)));

        advance_ms(360_000);
        assert_eq!(cache.peek(&1).await, None);
        assert_eq!(cache.collect_garbage().await, 1);
    }

    #[tokio::test]
    async fn test_invalidate_and_clear() {
        let cache: QueryCache<u32, u32> = QueryCache::new(long_policy());
        cache.insert(1, 10).await;
        cache.insert(2, 20).await;
        cache.invalidate(&1).await;
        assert_eq!(cache.get_fresh(&1).await, None);
        assert_eq!(cache.get_fresh(&2).await, Some(20));
        cache.clear().await;
        assert_eq!(cache.len().await, 0);
    }
}
