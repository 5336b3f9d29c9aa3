//! Core types for the substring matching index

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Normalized key: lowercased code points
pub type Key = Arc<[char]>;

/// Value attached to a key at registration time
pub type Value = i32;

/// A registered (key, value) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: Key,
    pub value: Value,
}

impl Entry {
    pub fn new(key: Vec<char>, value: Value) -> Self {
        Self {
            key: Arc::from(key),
            value,
        }
    }

    /// Number of suffix records this entry contributes to a rebuild
    #[inline]
    pub fn suffix_count(&self) -> usize {
        self.key.len()
    }
}

/// One suffix of a registered key, paired with the key's value
///
/// Shares the key allocation with its [`Entry`]; `start` is the offset of
/// the suffix within the key.
#[derive(Debug, Clone)]
pub struct SuffixRecord {
    key: Key,
    start: usize,
    pub value: Value,
}

impl SuffixRecord {
    pub fn new(key: Key, start: usize, value: Value) -> Self {
        debug_assert!(start < key.len());
        Self { key, start, value }
    }

    /// The suffix code points
    #[inline]
    pub fn suffix(&self) -> &[char] {
        &self.key[self.start..]
    }

    /// Offset of this suffix in the original key
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }
}

/// Configuration for search list rebuilds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Sort large search lists on the rayon pool (default: true)
    #[serde(default = "default_parallel_sort")]
    pub parallel_sort: bool,
    /// Minimum suffix count before the parallel sort kicks in
    #[serde(default = "default_parallel_sort_threshold")]
    pub parallel_sort_threshold: usize,
}

fn default_parallel_sort() -> bool {
    true
}

fn default_parallel_sort_threshold() -> usize {
    100_000
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            parallel_sort: default_parallel_sort(),
            parallel_sort_threshold: default_parallel_sort_threshold(),
        }
    }
}

/// Lifecycle of the derived search list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexState {
    /// Search list reflects the entry store
    Clean,
    /// Entry store changed since the last rebuild
    Dirty,
}

/// Snapshot of index statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Registered entries
    pub entry_count: usize,
    /// Suffix records in the current search list
    pub suffix_count: usize,
    /// Suffix records the next rebuild will produce
    pub pending_suffix_count: usize,
    pub state: IndexState,
    /// Rebuilds performed since construction
    pub rebuilds: u64,
    /// Well-formed `retrieve`/`count`/`contains` calls; dumps and
    /// malformed queries are not counted
    pub queries_served: u64,
}
