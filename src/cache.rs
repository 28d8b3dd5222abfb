//! Lookup memoization.
//!
//! [`LookupCache`] keeps the outcome of recent lookups in an LRU map keyed by
//! (normalized method, path). Misses are cached too, which helps when a
//! server sees repeated requests for unknown paths. It is gated behind the
//! `cache` feature flag and uses the [`lru`] crate internally.
//!
//! The cache remembers which trie filled it, and at which
//! [`generation`](crate::RouteTrie::generation). Handing it a different trie,
//! or the same trie after routes were added, drops every entry, so results
//! from one route set are never served for another.
//!
//! The trie itself stays read-only; the cache needs `&mut self`, so keep one
//! per worker or wrap it in a lock.
//!
//! # Examples
//!
//! ```
//! use route_trie::cache::LookupCache;
//! use route_trie::RouteTrie;
//!
//! let routes = RouteTrie::new().route("GET", "/users/:id", "user");
//! let mut cache = LookupCache::new();
//!
//! let first = cache.lookup(&routes, "GET", "/users/1").unwrap();
//! let again = cache.lookup(&routes, "get", "/users/1").unwrap();
//! assert_eq!(first, again);
//! assert_eq!(cache.stats().hits, 1);
//! assert_eq!(cache.stats().misses, 1);
//! ```

use crate::params::RouteParams;
use crate::segment::normalize_method;
use crate::trie::{MatchKind, RouteTrie};
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Owned copy of a [`RouteMatch`](crate::RouteMatch).
#[derive(Debug, Clone, PartialEq)]
pub struct CachedMatch<T> {
    /// The registered value.
    pub value: T,
    /// Parameters bound along the matched part of the path.
    pub params: RouteParams,
    /// Whether the value came from an exact or a prefix route.
    pub kind: MatchKind,
}

/// Counters tracking cache effectiveness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: usize,
    /// Lookups that had to walk the trie.
    pub misses: usize,
    /// Times the cache was emptied, explicitly or because the trie changed.
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache in front of [`RouteTrie::lookup`]. Default capacity is 1000
/// entries.
#[derive(Debug)]
pub struct LookupCache<T> {
    entries: LruCache<(String, String), Option<CachedMatch<T>>>,
    /// (trie id, trie generation) the entries were computed against.
    source: Option<(u64, u64)>,
    stats: CacheStats,
}

impl<T: Clone> LookupCache<T> {
    const DEFAULT_CAPACITY: usize = 1000;

    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` outcomes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).expect("Cache capacity must be non-zero");
        Self {
            entries: LruCache::new(cap),
            source: None,
            stats: CacheStats::default(),
        }
    }

    /// Look up `method` and `path` in `trie`, answering from the cache when
    /// possible.
    pub fn lookup(&mut self, trie: &RouteTrie<T>, method: &str, path: &str) -> Option<CachedMatch<T>> {
        let source = (trie.id(), trie.generation());
        if self.source != Some(source) {
            if let Some((_id, _generation)) = self.source {
                debug_log!(
                    "Route trie changed (trie {} generation {} -> trie {} generation {}), dropping cached lookups",
                    _id,
                    _generation,
                    source.0,
                    source.1
                );
                self.clear();
            }
            self.source = Some(source);
        }

        let key = (normalize_method(method).into_owned(), path.to_string());
        if let Some(outcome) = self.entries.get(&key) {
            self.stats.hits += 1;
            trace_log!("Lookup cache hit for {} '{}'", key.0, key.1);
            return outcome.clone();
        }

        self.stats.misses += 1;
        let outcome = trie.lookup(method, path).map(|m| CachedMatch {
            value: m.value.clone(),
            params: m.params,
            kind: m.kind,
        });
        self.entries.push(key, outcome.clone());
        outcome
    }

    /// Drop every cached outcome and count an invalidation.
    pub fn clear(&mut self) {
        let _removed = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Lookup cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            _removed,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    /// Return a reference to the current statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Number of cached outcomes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for LookupCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
