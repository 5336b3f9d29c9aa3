//! Substring matching index
//!
//! ## Architecture
//!
//! - `store`: Append-only registered entries
//! - `builder`: Expands keys into suffix records and sorts them
//! - `search`: Prefix range queries over the sorted search list
//! - `matcher`: Lock-guarded index object tying the pieces together
//! - `import`: Bulk loading from tab-separated files

pub mod builder;
pub mod error;
pub mod import;
pub mod matcher;
pub mod search;
pub mod store;
pub mod types;

pub use builder::{SearchListBuilder, compare_keys};
pub use error::{MatchError, MatchResult};
pub use import::{ImportReport, import_entries, import_file};
pub use matcher::{MatchIndex, SubstringIndex};
pub use search::{SearchList, rank};
pub use store::EntryStore;
pub use types::*;
