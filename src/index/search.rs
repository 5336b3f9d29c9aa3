//! Sorted search list and prefix range queries
//!
//! All suffixes sharing a prefix occupy one contiguous run of the sorted
//! list, so a query is answered with a lower/upper bound pair against the
//! same [`rank`] comparator.

use super::types::{SuffixRecord, Value};
use std::cmp::Ordering;
use std::io::{self, Write};
use std::ops::Range;

/// Suffix records kept in code point order
#[derive(Debug, Clone, Default)]
pub struct SearchList {
    records: Vec<SuffixRecord>,
}

impl SearchList {
    /// Wrap records that are already sorted by `compare_keys`
    pub(crate) fn from_sorted(records: Vec<SuffixRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SuffixRecord] {
        &self.records
    }

    /// Range of records whose suffix starts with `query`
    ///
    /// An empty query matches every record.
    pub fn search(&self, query: &[char]) -> Range<usize> {
        let lo = self.lower_bound(query);
        let hi = self.upper_bound(query, lo);
        lo..hi
    }

    /// First index that does not rank below `query`
    fn lower_bound(&self, query: &[char]) -> usize {
        self.records
            .partition_point(|r| rank(r.suffix(), query) == Ordering::Less)
    }

    /// One past the last index that ranks equal to `query`
    fn upper_bound(&self, query: &[char], start: usize) -> usize {
        start
            + self.records[start..]
                .partition_point(|r| rank(r.suffix(), query) == Ordering::Equal)
    }

    /// Values of all matching records, in search list order
    pub fn values(&self, query: &[char]) -> Vec<Value> {
        self.records[self.search(query)]
            .iter()
            .map(|r| r.value)
            .collect()
    }

    /// Number of matching records
    pub fn count(&self, query: &[char]) -> usize {
        self.search(query).len()
    }

    /// Write every record, one per line
    pub fn dump<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Size of Search List: {}", self.records.len())?;
        for record in &self.records {
            let key: String = record.suffix().iter().collect();
            writeln!(writer, "Key={:?}, Value={}", key, record.value)?;
        }
        Ok(())
    }
}

/// Rank a suffix against a query
///
/// `Equal` iff `query` is a prefix of `suffix`. Otherwise the suffix ranks
/// `Less` or `Greater` by code point order over the overlapping length, and a
/// suffix that is a strict prefix of `query` ranks `Less`.
#[inline]
pub fn rank(suffix: &[char], query: &[char]) -> Ordering {
    let overlap = suffix.len().min(query.len());

    match suffix[..overlap].cmp(&query[..overlap]) {
        Ordering::Equal if suffix.len() < query.len() => Ordering::Less,
        Ordering::Equal => Ordering::Equal,
        other => other,
    }
}
