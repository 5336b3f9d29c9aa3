//! Protocol messages for the index session
//!
//! Uses newline-delimited JSON: one request or response object per line.

use crate::index::types::{IndexStats, Value};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Read, Write};

/// Request from client to server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Register a value under a key
    Register { key: String, value: Value },

    /// Retrieve values whose key contains the query
    Retrieve { query: String },

    /// Remove every entry
    Clear,

    /// Get index statistics
    Stats,

    /// Ping for connection testing
    Ping,

    /// End the session
    Shutdown,
}

/// Response from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// Registration outcome
    Registered { success: bool },

    /// Retrieval results
    Values {
        values: Vec<Value>,
        /// Time taken in milliseconds
        duration_ms: f64,
    },

    /// Clear acknowledged
    Cleared,

    /// Index statistics
    Stats(IndexStats),

    /// Pong response
    Pong,

    /// Shutdown acknowledged
    ShuttingDown,

    /// Error response
    Error { message: String },
}

/// Write a message as a single JSON line
pub fn write_message<W: Write>(writer: &mut W, msg: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *writer, msg)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Maximum accepted line length
const MAX_LINE_BYTES: usize = 16 * 1024 * 1024;

/// Read the next non-blank line
///
/// Returns `Ok(None)` at end of input. Lines are returned as raw bytes;
/// encoding problems surface when the request is parsed. At most
/// `MAX_LINE_BYTES + 1` bytes are buffered before an oversized line is
/// rejected.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();

    loop {
        line.clear();
        let mut limited = (&mut *reader).take(MAX_LINE_BYTES as u64 + 1);
        if limited.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        if line.len() > MAX_LINE_BYTES {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "Message too large"));
        }

        if !line.iter().all(u8::is_ascii_whitespace) {
            return Ok(Some(line));
        }
    }
}

/// Parse a request line
pub fn parse_request(line: &[u8]) -> serde_json::Result<Request> {
    serde_json::from_slice(line)
}
