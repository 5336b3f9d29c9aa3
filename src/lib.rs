//! # FXM - Fast Substring Matching
//!
//! FXM is an in-memory index that answers case-insensitive "contains"
//! queries: register `(key, value)` pairs, then retrieve every value whose
//! key contains a given substring.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Entry store, search list builder, and query engine
//! - [`server`] - Newline-delimited JSON front end over stdin/stdout
//! - [`output`] - Terminal formatting for results and statistics
//! - [`utils`] - Normalization and configuration
//!
//! ## Quick Start
//!
//! ```
//! use fxm::SubstringIndex;
//!
//! let index = SubstringIndex::new();
//! index.register("apple", 10);
//! index.register("Application", 20);
//!
//! let mut values = index.retrieve("APP");
//! values.sort();
//! assert_eq!(values, vec![10, 20]);
//! assert_eq!(index.retrieve("le"), vec![10]);
//! assert!(index.retrieve("z").is_empty());
//! ```
//!
//! ## How it works
//!
//! Every key is expanded into all of its suffixes, and the suffixes are kept
//! in one sorted list. A substring of a key is a prefix of one of its
//! suffixes, so all matches for a query form a contiguous run that two
//! binary searches locate in O(m log n). The list is rebuilt lazily: the
//! first query after a registration pays for the rebuild.

pub mod index;
pub mod output;
pub mod server;
pub mod utils;

pub use index::{MatchError, MatchIndex, MatchResult, SubstringIndex};
