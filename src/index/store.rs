//! Append-only entry store

use super::types::{Entry, Value};

/// Registered entries in registration order
///
/// Entries are never mutated once pushed; the only removal is [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already normalized key
    pub fn push(&mut self, key: Vec<char>, value: Value) {
        self.entries.push(Entry::new(key, value));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Total suffix records a rebuild would emit (sum of key lengths)
    pub fn suffix_count(&self) -> usize {
        self.entries.iter().map(Entry::suffix_count).sum()
    }
}

impl<'a> IntoIterator for &'a EntryStore {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_push_preserves_order_and_duplicates() {
        let mut store = EntryStore::new();
        store.push(key("ab"), 1);
        store.push(key("ab"), 2);
        store.push(key("ab"), 1);

        let values: Vec<_> = store.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![1, 2, 1]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_suffix_count() {
        let mut store = EntryStore::new();
        store.push(key("apple"), 10);
        store.push(key(""), 11);
        store.push(key("日本"), 12);

        assert_eq!(store.suffix_count(), 7);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = EntryStore::new();
        store.push(key("x"), 1);
        store.clear();
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.suffix_count(), 0);
    }
}
