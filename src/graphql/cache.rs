//! In-memory response cache for GraphQL operations.
//!
//! Stores the raw `data` payload of successful responses keyed by operation
//! name and variables. Capacity is measured in payload bytes; the oldest
//! entries are evicted first once the budget is exceeded.

use bytes::Bytes;
use std::collections::{HashMap, VecDeque};

/// Default budget, matching a 10 MiB memory cache.
pub const DEFAULT_CACHE_MAX_BYTES: usize = 10 * 1024 * 1024;

/// Whether an execution may be answered from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Use a cached payload when present, otherwise hit the network.
    #[default]
    CacheFirst,
    /// Always hit the network; the result still refreshes the cache.
    NetworkOnly,
}

/// Byte-bounded cache of response payloads.
#[derive(Debug)]
pub struct ResponseCache {
    /// Payloads keyed by [`ResponseCache::key`]
    entries: HashMap<String, Bytes>,
    /// Insertion order for eviction (oldest first)
    insertion_order: VecDeque<String>,
    /// Sum of stored payload lengths
    total_bytes: usize,
    max_bytes: usize,
    hits: u64,
    misses: u64,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_MAX_BYTES)
    }
}

impl ResponseCache {
    /// Create an empty cache holding at most `max_bytes` of payload.
    ///
    /// A budget of zero disables caching entirely.
    pub fn new(max_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
            total_bytes: 0,
            max_bytes,
            hits: 0,
            misses: 0,
        }
    }

    /// Cache key for an operation execution.
    pub fn key(operation: &str, variables: &serde_json::Value) -> String {
        format!("{}:{}", operation, variables)
    }

    /// Look up a payload, updating hit/miss statistics.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(payload) => {
                self.hits += 1;
                Some(payload.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a payload, replacing any previous entry for `key`.
    ///
    /// Payloads larger than the whole budget are not stored.
    pub fn insert(&mut self, key: String, payload: Bytes) {
        if payload.len() > self.max_bytes {
            return;
        }

        self.remove(&key);

        while self.total_bytes + payload.len() > self.max_bytes {
            let Some(oldest) = self.insertion_order.pop_front() else {
                break;
            };
            if let Some(evicted) = self.entries.remove(&oldest) {
                self.total_bytes -= evicted.len();
                tracing::debug!(key = %oldest, bytes = evicted.len(), "evicted cached response");
            }
        }

        self.total_bytes += payload.len();
        self.entries.insert(key.clone(), payload);
        self.insertion_order.push_back(key);
    }

    /// Drop a single entry.
    pub fn remove(&mut self, key: &str) {
        if let Some(old) = self.entries.remove(key) {
            self.total_bytes -= old.len();
            self.insertion_order.retain(|k| k != key);
        }
    }

    /// Get cache statistics (hits, misses)
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    /// Number of cached payloads.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes currently held.
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }
}
