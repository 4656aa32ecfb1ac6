//! Collection-binding level cache.
//!
//! Memoizes, per node and purpose, the nearest ancestor-or-self level that
//! declares collection bindings for that purpose. The naive search re-walks
//! ancestors from every position of the outer resolution walk; the memo
//! table makes repeated lookups cheap without changing observable results.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::core::NodeId;

use super::Purpose;

/// Key for cached level lookups.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug)]
pub struct CollectionLevelKey {
    /// Node the search started from.
    pub node: NodeId,
    /// Purpose the bindings were filtered by.
    pub purpose: Purpose,
}

impl CollectionLevelKey {
    /// Create a new cache key.
    pub fn new(node: NodeId, purpose: Purpose) -> Self {
        Self { node, purpose }
    }
}

/// Thread-safe memo table for collection-binding levels.
///
/// Uses `parking_lot::RwLock` for fast, non-poisoning locks so a single
/// resolver can serve concurrent lookups.
#[derive(Default)]
pub struct CollectionLevelCache {
    levels: RwLock<HashMap<CollectionLevelKey, Option<NodeId>>>,
}

impl CollectionLevelCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached level if present.
    ///
    /// The outer Option distinguishes "not cached" from the cached answer
    /// "no level declares collection bindings above this node".
    #[inline]
    pub fn get(&self, key: &CollectionLevelKey) -> Option<Option<NodeId>> {
        self.levels.read().get(key).copied()
    }

    /// Record the level found for a key.
    pub fn insert(&self, key: CollectionLevelKey, level: Option<NodeId>) {
        self.levels.write().insert(key, level);
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.levels.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.levels.read().is_empty()
    }

    /// Drop all cached entries.
    pub fn clear(&self) {
        self.levels.write().clear();
    }
}
