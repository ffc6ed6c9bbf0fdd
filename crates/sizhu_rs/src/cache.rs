//! Bounded, TTL-bearing result cache.
//!
//! A pure performance layer: removing it must not change any computed
//! chart. Entries are owned by the cache and handed out as `Arc` clones;
//! callers never mutate a returned chart. Capacity eviction is
//! oldest-insertion-first and independent of TTL expiry.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use serde::Serialize;

use sizhu_chart::BaziChart;

use crate::birth::Fingerprint;

/// Hit/miss/eviction counters plus current occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expired: u64,
    pub len: usize,
    pub capacity: usize,
}

struct CacheEntry {
    chart: Arc<BaziChart>,
    expires_at: Instant,
}

#[derive(Default)]
struct CacheInner {
    map: HashMap<Fingerprint, CacheEntry>,
    /// Insertion order for oldest-first eviction.
    order: VecDeque<Fingerprint>,
    hits: u64,
    misses: u64,
    evictions: u64,
    expired: u64,
}

/// Memoization of `Fingerprint -> Arc<BaziChart>`.
///
/// Interior mutex: concurrent `get`/`put` on the same fingerprint
/// serialize, and a benign duplicate computation that both insert
/// idempotently is acceptable (the pipeline is deterministic).
pub struct ChartCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

impl std::fmt::Debug for ChartCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("ChartCache")
            .field("capacity", &self.capacity)
            .field("len", &stats.len)
            .finish()
    }
}

impl ChartCache {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            capacity,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a fingerprint. Expired entries count as misses and are
    /// dropped on access.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<Arc<BaziChart>> {
        let now = Instant::now();
        let mut inner = self.lock();
        let live = match inner.map.get(fingerprint) {
            Some(entry) if entry.expires_at > now => Some(Arc::clone(&entry.chart)),
            Some(_) => None,
            None => {
                inner.misses += 1;
                return None;
            }
        };
        match live {
            Some(chart) => {
                inner.hits += 1;
                Some(chart)
            }
            None => {
                inner.map.remove(fingerprint);
                inner.order.retain(|k| k != fingerprint);
                inner.expired += 1;
                inner.misses += 1;
                None
            }
        }
    }

    /// Insert (or refresh) an entry, evicting the oldest insertion when
    /// the capacity bound is reached.
    pub fn put(&self, fingerprint: Fingerprint, chart: Arc<BaziChart>, ttl: Duration) {
        if self.capacity == 0 {
            return;
        }
        let mut inner = self.lock();
        let entry = CacheEntry {
            chart,
            expires_at: Instant::now() + ttl,
        };
        if inner.map.insert(fingerprint, entry).is_none() {
            inner.order.push_back(fingerprint);
            while inner.map.len() > self.capacity {
                match inner.order.pop_front() {
                    Some(oldest) => {
                        if inner.map.remove(&oldest).is_some() {
                            inner.evictions += 1;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    /// Drop one entry. Returns whether it was present.
    pub fn invalidate(&self, fingerprint: &Fingerprint) -> bool {
        let mut inner = self.lock();
        let removed = inner.map.remove(fingerprint).is_some();
        if removed {
            inner.order.retain(|k| k != fingerprint);
        }
        removed
    }

    /// Drop all entries, keeping counters.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.map.clear();
        inner.order.clear();
    }

    /// Number of live entries (expired-but-unswept ones included).
    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counter snapshot.
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            evictions: inner.evictions,
            expired: inner.expired,
            len: inner.map.len(),
            capacity: self.capacity,
        }
    }
}
