//! Thread-safe substring matching index
//!
//! [`SubstringIndex`] owns the entry store, the derived search list and the
//! lifecycle state behind one lock. Registration marks the index dirty; the
//! next query rebuilds the search list before reading it.
//!
//! ## Locking
//!
//! - `register` / `clear` take the write lock
//! - `retrieve` reads under a shared lock while the list is clean; when it
//!   is dirty it takes the upgradable lock, rebuilds under the write lock,
//!   then downgrades to read the fresh list
//!
//! Every operation is therefore linearizable: a query observes either all
//! or none of a concurrent registration, and never a half-built list.

use super::builder::SearchListBuilder;
use super::error::MatchResult;
use super::search::SearchList;
use super::store::EntryStore;
use super::types::*;
use crate::utils::normalize;
use parking_lot::{RwLock, RwLockUpgradableReadGuard, RwLockWriteGuard};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

/// The three-operation surface of a substring index
pub trait MatchIndex: Send + Sync {
    /// Register `value` under `key`
    ///
    /// Returns `false`, leaving the index unchanged, if `key` is not
    /// well-formed UTF-8.
    fn register(&self, key: &[u8], value: Value) -> bool;

    /// Values of every entry whose key contains `query`, case-insensitively
    ///
    /// Malformed queries yield an empty result.
    fn retrieve(&self, query: &[u8]) -> Vec<Value>;

    /// Remove every entry
    fn clear(&self);
}

struct Inner {
    store: EntryStore,
    search_list: SearchList,
    state: IndexState,
    rebuilds: u64,
}

impl Inner {
    fn mark_dirty(&mut self) {
        self.state = IndexState::Dirty;
    }
}

/// In-memory index answering "contains" queries over registered keys
pub struct SubstringIndex {
    inner: RwLock<Inner>,
    builder: SearchListBuilder,
    queries_served: AtomicU64,
}

impl Default for SubstringIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SubstringIndex {
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            inner: RwLock::new(Inner {
                store: EntryStore::new(),
                search_list: SearchList::default(),
                state: IndexState::Dirty,
                rebuilds: 0,
            }),
            builder: SearchListBuilder::new(config),
            queries_served: AtomicU64::new(0),
        }
    }

    /// Register `value` under `key`; see [`MatchIndex::register`]
    pub fn register(&self, key: impl AsRef<[u8]>, value: Value) -> bool {
        let key = match normalize(key) {
            Ok(key) => key,
            Err(e) => {
                tracing::debug!(value, error = %e, "rejected key");
                return false;
            }
        };

        let mut inner = self.inner.write();
        inner.store.push(key, value);
        inner.mark_dirty();
        true
    }

    /// Values whose key contains `query`; see [`MatchIndex::retrieve`]
    pub fn retrieve(&self, query: impl AsRef<[u8]>) -> Vec<Value> {
        self.try_retrieve(query).unwrap_or_default()
    }

    /// Like [`retrieve`](Self::retrieve), but reports malformed queries
    pub fn try_retrieve(&self, query: impl AsRef<[u8]>) -> MatchResult<Vec<Value>> {
        self.query(query, |list, query| list.values(query))
    }

    /// Number of suffix occurrences of `query`
    pub fn count(&self, query: impl AsRef<[u8]>) -> usize {
        self.query(query, |list, query| list.count(query)).unwrap_or(0)
    }

    /// Whether any registered key contains `query`
    pub fn contains(&self, query: impl AsRef<[u8]>) -> bool {
        self.count(query) > 0
    }

    /// Remove every entry; the next query rebuilds from an empty store
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.store.clear();
        inner.mark_dirty();
        tracing::debug!("cleared index");
    }

    /// Rebuild the search list now instead of on the next query
    pub fn rebuild(&self) {
        let inner = self.inner.upgradable_read();
        if inner.state == IndexState::Dirty {
            let mut inner = RwLockUpgradableReadGuard::upgrade(inner);
            self.rebuild_locked(&mut inner);
        }
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.inner.read().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().store.is_empty()
    }

    pub fn state(&self) -> IndexState {
        self.inner.read().state
    }

    pub fn stats(&self) -> IndexStats {
        let inner = self.inner.read();
        IndexStats {
            entry_count: inner.store.len(),
            suffix_count: inner.search_list.len(),
            pending_suffix_count: inner.store.suffix_count(),
            state: inner.state,
            rebuilds: inner.rebuilds,
            queries_served: self.queries_served.load(Ordering::Relaxed),
        }
    }

    /// Write the (freshly rebuilt if needed) search list to `writer`
    pub fn dump_search_list<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.read_clean(|list| list.dump(writer))
    }

    /// Normalize `query` and run `f` on a clean list; counts toward
    /// `queries_served` only once the query is well-formed
    fn query<T>(
        &self,
        query: impl AsRef<[u8]>,
        f: impl FnOnce(&SearchList, &[char]) -> T,
    ) -> MatchResult<T> {
        let query = normalize(query)?;
        self.queries_served.fetch_add(1, Ordering::Relaxed);
        Ok(self.read_clean(|list| f(list, &query)))
    }

    /// Run `f` against a search list that reflects the entry store
    ///
    /// Rebuild and read happen under one lock acquisition, so no writer can
    /// slip in between them. Clean reads share a plain read lock.
    fn read_clean<T>(&self, f: impl FnOnce(&SearchList) -> T) -> T {
        {
            let inner = self.inner.read();
            if inner.state == IndexState::Clean {
                return f(&inner.search_list);
            }
        }

        // Only one upgradable guard exists at a time; whoever gets it first
        // rebuilds, the rest find the list clean.
        let inner = self.inner.upgradable_read();
        if inner.state == IndexState::Clean {
            return f(&inner.search_list);
        }

        let mut inner = RwLockUpgradableReadGuard::upgrade(inner);
        self.rebuild_locked(&mut inner);
        let inner = RwLockWriteGuard::downgrade(inner);
        f(&inner.search_list)
    }

    fn rebuild_locked(&self, inner: &mut Inner) {
        inner.search_list = self.builder.build(&inner.store);
        inner.state = IndexState::Clean;
        inner.rebuilds += 1;
    }
}

impl MatchIndex for SubstringIndex {
    fn register(&self, key: &[u8], value: Value) -> bool {
        SubstringIndex::register(self, key, value)
    }

    fn retrieve(&self, query: &[u8]) -> Vec<Value> {
        SubstringIndex::retrieve(self, query)
    }

    fn clear(&self) {
        SubstringIndex::clear(self)
    }
}
