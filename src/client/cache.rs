//! In-memory API response cache with TTL expiry and FIFO eviction.
//!
//! Cache key is a SHA-256 digest of the request path and its query
//! parameters. Entries expire after a configurable TTL, checked on read;
//! writes past capacity evict the earliest-inserted entry. Eviction is
//! FIFO over insertion order rather than LRU, and reads do no recency
//! bookkeeping.
//!
//! The cache is owned by the client instance and dies with the process;
//! there is no persistence and no process-wide singleton.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::CacheConfig;

/// Time source injected into the cache so tests can control entry age.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn now_secs(&self) -> u64;
}

/// Wall-clock time source used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// A single cached API response.
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Value,
    created_at: u64,
}

/// Bounded TTL cache for idempotent API reads.
pub struct ResponseCache {
    entries: HashMap<String, CacheEntry>,
    /// Keys in insertion order; kept in sync with `entries`.
    order: VecDeque<String>,
    ttl_secs: u64,
    max_entries: usize,
    clock: Arc<dyn Clock>,
}

impl ResponseCache {
    /// Create a cache on the system clock.
    ///
    /// `max_entries` is clamped to a minimum of 1 to prevent infinite
    /// eviction loops.
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a cache with an injected time source.
    pub fn with_clock(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            ttl_secs: config.ttl_secs,
            max_entries: config.max_entries.max(1),
            clock,
        }
    }

    /// Build a deterministic cache key from a request path and its query
    /// parameters.
    ///
    /// Uses length-prefixed encoding to prevent separator collisions
    /// (e.g. path `/a?b` vs path `/a` with parameter `b`).
    pub fn cache_key(path: &str, params: &[(&str, String)]) -> String {
        let mut hasher = Sha256::new();
        hasher.update((path.len() as u64).to_le_bytes());
        hasher.update(path.as_bytes());
        for (name, value) in params {
            hasher.update((name.len() as u64).to_le_bytes());
            hasher.update(name.as_bytes());
            hasher.update((value.len() as u64).to_le_bytes());
            hasher.update(value.as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }

    /// Look up a cached response. Returns `None` if the key is absent or
    /// the entry's age has reached the TTL; a stale entry is removed.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let now = self.clock.now_secs();
        let stale = self
            .entries
            .get(key)
            .map(|e| now.saturating_sub(e.created_at) >= self.ttl_secs);
        match stale {
            Some(true) => {
                debug!(key = %&key[..8.min(key.len())], "Cache entry expired, removing");
                self.entries.remove(key);
                self.order.retain(|k| k != key);
                None
            }
            Some(false) => self.entries.get(key).map(|e| e.data.clone()),
            None => None,
        }
    }

    /// Store a response.
    ///
    /// Inserting a fresh key at capacity evicts the earliest-inserted
    /// entry. Overwriting an existing key replaces its data and timestamp
    /// and re-registers it as the newest insertion.
    pub fn put(&mut self, key: String, data: Value) {
        let now = self.clock.now_secs();
        if self.entries.contains_key(&key) {
            self.order.retain(|k| k != &key);
        } else {
            while self.entries.len() >= self.max_entries {
                match self.order.pop_front() {
                    Some(oldest) => {
                        debug!(key = %&oldest[..8.min(oldest.len())], "Evicting oldest cache entry");
                        self.entries.remove(&oldest);
                    }
                    None => break,
                }
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(
            key,
            CacheEntry {
                data,
                created_at: now,
            },
        );
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Manually-advanced clock for deterministic TTL tests.
    #[derive(Default)]
    struct ManualClock {
        secs: AtomicU64,
    }

    impl ManualClock {
        fn advance(&self, secs: u64) {
            self.secs.fetch_add(secs, Ordering::Relaxed);
        }
    }

    impl Clock for ManualClock {
        fn now_secs(&self) -> u64 {
            self.secs.load(Ordering::Relaxed)
        }
    }

    fn test_cache(max_entries: usize) -> (ResponseCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let config = CacheConfig {
            ttl_secs: 300,
            max_entries,
        };
        (
            ResponseCache::with_clock(&config, clock.clone()),
            clock,
        )
    }

    #[test]
    fn test_cache_key_deterministic() {
        let params = [("limit", "50".to_string()), ("offset", "0".to_string())];
        let k1 = ResponseCache::cache_key("/history", &params);
        let k2 = ResponseCache::cache_key("/history", &params);
        assert_eq!(k1, k2);
    }

    #[test]
    fn test_cache_key_path_aware() {
        let k1 = ResponseCache::cache_key("/health", &[]);
        let k2 = ResponseCache::cache_key("/history", &[]);
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_cache_key_param_aware() {
        let p1 = [("limit", "10".to_string()), ("offset", "0".to_string())];
        let p2 = [("limit", "10".to_string()), ("offset", "10".to_string())];
        assert_ne!(
            ResponseCache::cache_key("/history", &p1),
            ResponseCache::cache_key("/history", &p2)
        );
    }

    #[test]
    fn test_cache_key_no_separator_collision() {
        let k1 = ResponseCache::cache_key("/a?b", &[]);
        let k2 = ResponseCache::cache_key("/a", &[("b", String::new())]);
        assert_ne!(
            k1, k2,
            "length-prefixed encoding must prevent separator collisions"
        );
    }

    #[test]
    fn test_read_after_write_hits() {
        let (mut cache, _clock) = test_cache(100);
        assert!(cache.get("k").is_none());
        cache.put("k".into(), json!({"total": 3}));
        assert_eq!(cache.get("k"), Some(json!({"total": 3})));
    }

    #[test]
    fn test_entry_expires_at_ttl() {
        let (mut cache, clock) = test_cache(100);
        cache.put("k".into(), json!(1));
        clock.advance(299);
        assert!(cache.get("k").is_some(), "just under TTL must still hit");
        clock.advance(1);
        // age == ttl counts as stale
        assert!(cache.get("k").is_none());
        assert!(cache.is_empty(), "stale entry must be removed on read");
    }

    #[test]
    fn test_fifo_eviction_ignores_read_recency() {
        let (mut cache, _clock) = test_cache(3);
        cache.put("k0".into(), json!(0));
        cache.put("k1".into(), json!(1));
        cache.put("k2".into(), json!(2));
        // Reading k0 must not rescue it; eviction is by insertion order.
        let _ = cache.get("k0");
        cache.put("k3".into(), json!(3));
        assert!(cache.get("k0").is_none(), "earliest-inserted key is evicted");
        assert!(cache.get("k1").is_some());
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_capacity_write_evicts_exactly_one() {
        let (mut cache, _clock) = test_cache(100);
        for i in 0..100 {
            cache.put(format!("k{i}"), json!(i));
        }
        cache.put("k100".into(), json!(100));
        assert_eq!(cache.len(), 100);
        assert!(cache.get("k0").is_none());
        assert!(cache.get("k1").is_some());
        assert!(cache.get("k100").is_some());
    }

    #[test]
    fn test_overwrite_is_a_fresh_insertion() {
        let (mut cache, _clock) = test_cache(2);
        cache.put("a".into(), json!(1));
        cache.put("b".into(), json!(2));
        cache.put("a".into(), json!(3));
        assert_eq!(cache.len(), 2);
        // "b" is now the oldest insertion and goes first.
        cache.put("c".into(), json!(4));
        assert!(cache.get("b").is_none());
        assert_eq!(cache.get("a"), Some(json!(3)));
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_overwrite_refreshes_timestamp() {
        let (mut cache, clock) = test_cache(100);
        cache.put("k".into(), json!(1));
        clock.advance(200);
        cache.put("k".into(), json!(2));
        clock.advance(200);
        // 400s after first write but only 200s after the overwrite.
        assert_eq!(cache.get("k"), Some(json!(2)));
    }

    #[test]
    fn test_clear_empties() {
        let (mut cache, _clock) = test_cache(100);
        cache.put("k".into(), json!(1));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn test_max_entries_zero_clamped() {
        let config = CacheConfig {
            ttl_secs: 300,
            max_entries: 0,
        };
        let mut cache = ResponseCache::new(&config);
        cache.put("a".into(), json!(1));
        assert_eq!(cache.len(), 1);
        cache.put("b".into(), json!(2));
        assert_eq!(cache.len(), 1, "capacity clamps to one entry");
    }

    #[test]
    fn test_expired_entry_does_not_block_capacity() {
        let (mut cache, clock) = test_cache(2);
        cache.put("a".into(), json!(1));
        clock.advance(400);
        assert!(cache.get("a").is_none());
        cache.put("b".into(), json!(2));
        cache.put("c".into(), json!(3));
        assert_eq!(cache.len(), 2);
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }
}
