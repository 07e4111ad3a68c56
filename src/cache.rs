//! Route lookup caching.
//!
//! [`RouteCache`] memoises [`RouteTable::find`](crate::routes::RouteTable::find)
//! results per canonical path with the [`lru`] crate. It is gated behind the
//! `cache` feature.
//!
//! The route table never changes after it is built, so cached matches never
//! go stale. Nothing role-dependent is cached here: visibility and guard
//! decisions are always recomputed.
//!
//! # Examples
//!
//! ```
//! use teamflow_nav::cache::RouteCache;
//! use teamflow_nav::routes::RouteMatch;
//!
//! let mut cache = RouteCache::new();
//! cache.insert("/".to_string(), Some(RouteMatch::Index));
//!
//! assert_eq!(cache.get("/"), Some(Some(RouteMatch::Index)));
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::routes::RouteMatch;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Hit and miss counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: usize,
    /// Lookups that had to go to the route table.
    pub misses: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`, or `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of route lookups keyed by canonical path.
///
/// Misses are cached too (as `None`), so repeated visits to an unknown path
/// skip the pattern scan.
#[derive(Debug)]
pub struct RouteCache {
    entries: LruCache<String, Option<RouteMatch>>,
    stats: CacheStats,
}

impl RouteCache {
    const DEFAULT_CAPACITY: usize = 256;

    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache with a custom capacity. A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Look up a cached result. The outer `None` is a cache miss.
    pub fn get(&mut self, path: &str) -> Option<Option<RouteMatch>> {
        if let Some(entry) = self.entries.get(path) {
            self.stats.hits += 1;
            trace_log!("Route cache hit for '{}'", path);
            Some(entry.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("Route cache miss for '{}'", path);
            None
        }
    }

    /// Store a lookup result.
    pub fn insert(&mut self, path: String, found: Option<RouteMatch>) {
        self.entries.push(path, found);
    }

    /// Current counters.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RouteCache {
    fn default() -> Self {
        Self::new()
    }
}

/// A clone starts cold: same capacity, no entries, zeroed counters.
impl Clone for RouteCache {
    fn clone(&self) -> Self {
        debug_log!(
            "Cloning route cache with capacity {} (hit rate so far {:.1}%)",
            self.entries.cap(),
            self.stats.hit_rate() * 100.0
        );
        Self {
            entries: LruCache::new(self.entries.cap()),
            stats: CacheStats::default(),
        }
    }
}
