//! Bulk loading of entries from tab-separated files
//!
//! Each non-blank line is `key<TAB>value`. Lines starting with `#` are
//! comments. Keys are passed to the index as raw bytes, so a key with a
//! malformed encoding is counted as rejected rather than failing the load.

use super::matcher::SubstringIndex;
use super::types::Value;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Entries accepted by the index
    pub registered: usize,
    /// Entries whose key failed normalization
    pub rejected: usize,
}

/// Load `key<TAB>value` lines from `reader` into `index`
pub fn import_entries<R: BufRead>(index: &SubstringIndex, reader: R) -> Result<ImportReport> {
    let mut report = ImportReport::default();

    for (line_no, line) in reader.split(b'\n').enumerate() {
        let line_no = line_no + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line[..]);

        if line.iter().all(u8::is_ascii_whitespace) || line.starts_with(b"#") {
            continue;
        }

        let (key, value) =
            parse_line(line).with_context(|| format!("Invalid entry on line {}", line_no))?;

        if index.register(key, value) {
            report.registered += 1;
        } else {
            tracing::warn!(line = line_no, "skipping entry with malformed key");
            report.rejected += 1;
        }
    }

    tracing::info!(
        registered = report.registered,
        rejected = report.rejected,
        "imported entries"
    );

    Ok(report)
}

/// Load entries from a file on disk
pub fn import_file(index: &SubstringIndex, path: &Path) -> Result<ImportReport> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open entries file {}", path.display()))?;
    import_entries(index, BufReader::new(file))
}

/// Split a line at its last tab into key bytes and value
fn parse_line(line: &[u8]) -> Result<(&[u8], Value)> {
    let tab = line
        .iter()
        .rposition(|&b| b == b'\t')
        .context("expected `key<TAB>value`")?;

    let (key, value) = (&line[..tab], &line[tab + 1..]);
    let value = std::str::from_utf8(value)
        .ok()
        .and_then(|v| v.trim().parse::<Value>().ok())
        .with_context(|| format!("value {:?} is not a 32-bit integer", String::from_utf8_lossy(value)))?;

    Ok((key, value))
}
