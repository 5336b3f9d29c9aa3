//! Utility functions shared across the crate.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file in the per-user data directory
//! - [`text`] - Key and query normalization (lowercase + code point decoding)
//!
//! ```no_run
//! use fxm::utils::normalize;
//!
//! let key = normalize("Hello").unwrap();
//! assert_eq!(key, vec!['h', 'e', 'l', 'l', 'o']);
//! ```

pub mod app_data;
pub mod text;

pub use app_data::*;
pub use text::*;
