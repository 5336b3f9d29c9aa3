//! Search list builder
//!
//! Rebuilds the search list from the entry store by:
//! 1. Expanding every key into all of its non-empty suffixes
//! 2. Sorting the suffix records by code point order
//!
//! The resulting list supports O(m log n) prefix range queries.

use super::search::SearchList;
use super::store::EntryStore;
use super::types::*;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::time::Instant;

/// Builds sorted search lists from an entry store
#[derive(Debug, Clone, Default)]
pub struct SearchListBuilder {
    config: IndexConfig,
}

impl SearchListBuilder {
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    /// Build the search list for the current store contents
    ///
    /// Emits exactly `len(key)` records per entry, so duplicate entries
    /// produce duplicate records.
    pub fn build(&self, store: &EntryStore) -> SearchList {
        let started = Instant::now();

        let mut records = expand_suffixes(store);
        let parallel = self.use_parallel_sort(records.len());
        sort_records(&mut records, parallel);

        tracing::debug!(
            entries = store.len(),
            suffixes = records.len(),
            parallel,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "rebuilt search list"
        );

        SearchList::from_sorted(records)
    }

    fn use_parallel_sort(&self, len: usize) -> bool {
        self.config.parallel_sort && len > self.config.parallel_sort_threshold
    }
}

/// Emit one record per suffix of every key, in store order
fn expand_suffixes(store: &EntryStore) -> Vec<SuffixRecord> {
    let mut records = Vec::with_capacity(store.suffix_count());

    for entry in store {
        records.extend(
            (0..entry.key.len()).map(|start| SuffixRecord::new(entry.key.clone(), start, entry.value)),
        );
    }

    records
}

/// Stable sort by suffix; equal suffixes keep registration order
fn sort_records(records: &mut [SuffixRecord], parallel: bool) {
    if parallel {
        records.par_sort_by(|a, b| compare_keys(a.suffix(), b.suffix()));
    } else {
        records.sort_by(|a, b| compare_keys(a.suffix(), b.suffix()));
    }
}

/// Total order on normalized keys
///
/// Code points are compared over the shared length; if one key is a strict
/// prefix of the other, the shorter one sorts first.
#[inline]
pub fn compare_keys(a: &[char], b: &[char]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn suffixes(list: &SearchList) -> Vec<String> {
        list.records()
            .iter()
            .map(|r| r.suffix().iter().collect())
            .collect()
    }

    #[test]
    fn test_build_banana() {
        let mut store = EntryStore::new();
        store.push(chars("banana"), 1);

        let list = SearchListBuilder::default().build(&store);

        assert_eq!(
            suffixes(&list),
            vec!["a", "ana", "anana", "banana", "na", "nana"]
        );
    }

    #[test]
    fn test_one_record_per_suffix() {
        let mut store = EntryStore::new();
        store.push(chars("apple"), 10);
        store.push(chars("application"), 20);
        store.push(chars("apple"), 10);
        store.push(chars(""), 30);

        let list = SearchListBuilder::default().build(&store);

        assert_eq!(list.len(), 5 + 11 + 5);
        assert_eq!(list.len(), store.suffix_count());
        assert!(list.records().iter().all(|r| r.value != 30));
    }

    #[test]
    fn test_compare_keys() {
        assert_eq!(compare_keys(&chars("ab"), &chars("abc")), Ordering::Less);
        assert_eq!(compare_keys(&chars("abd"), &chars("abc")), Ordering::Greater);
        assert_eq!(compare_keys(&chars("b"), &chars("abc")), Ordering::Greater);
        assert_eq!(compare_keys(&chars(""), &chars("a")), Ordering::Less);
        assert_eq!(compare_keys(&chars("xyz"), &chars("xyz")), Ordering::Equal);
    }

    #[test]
    fn test_sorted_by_code_point() {
        let mut store = EntryStore::new();
        store.push(chars("zé"), 1);
        store.push(chars("ze"), 2);

        let list = SearchListBuilder::default().build(&store);

        // 'e' (U+0065) < 'z' (U+007A) < 'é' (U+00E9)
        assert_eq!(suffixes(&list), vec!["e", "ze", "zé", "é"]);
    }

    #[test]
    fn test_equal_suffixes_keep_registration_order() {
        let mut store = EntryStore::new();
        store.push(chars("ab"), 2);
        store.push(chars("ab"), 1);
        store.push(chars("b"), 3);

        let list = SearchListBuilder::default().build(&store);
        let values: Vec<_> = list.records().iter().map(|r| r.value).collect();

        assert_eq!(values, vec![2, 1, 2, 1, 3]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut store = EntryStore::new();
        for i in 0..200 {
            store.push(chars(&format!("key-{}-{}", i * 7919 % 1000, i)), i);
        }

        let sequential = SearchListBuilder::new(IndexConfig {
            parallel_sort: false,
            ..Default::default()
        })
        .build(&store);
        let parallel = SearchListBuilder::new(IndexConfig {
            parallel_sort: true,
            parallel_sort_threshold: 0,
        })
        .build(&store);

        let seq: Vec<_> = sequential.records().iter().map(|r| (r.suffix().to_vec(), r.value)).collect();
        let par: Vec<_> = parallel.records().iter().map(|r| (r.suffix().to_vec(), r.value)).collect();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let mut store = EntryStore::new();
        store.push(chars("mississippi"), 1);
        store.push(chars("sip"), 2);

        let builder = SearchListBuilder::default();
        let first = builder.build(&store);
        let second = builder.build(&store);

        let a: Vec<_> = first.records().iter().map(|r| (r.suffix().to_vec(), r.value)).collect();
        let b: Vec<_> = second.records().iter().map(|r| (r.suffix().to_vec(), r.value)).collect();
        assert_eq!(a, b);
    }
}
