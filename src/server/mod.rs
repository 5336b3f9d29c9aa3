//! Line-oriented JSON front end for a [`SubstringIndex`]
//!
//! Maps `Register` / `Retrieve` / `Clear` requests onto the index. A
//! retrieve with a malformed query answers an empty `Values` list, the same
//! as a query with no matches.
//!
//! Architecture:
//! - `protocol`: Request/response types and line framing
//! - `session`: Request loop over any reader/writer pair

pub mod protocol;
pub mod session;

pub use protocol::{Request, Response};
pub use session::{SessionSummary, handle_request, serve};

use crate::index::matcher::SubstringIndex;
use anyhow::Result;
use std::io;

/// Serve requests from stdin, writing responses to stdout
pub fn serve_stdio(index: &SubstringIndex) -> Result<SessionSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(index, stdin.lock(), stdout.lock())
}
