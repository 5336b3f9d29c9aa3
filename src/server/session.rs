//! Request loop serving one client over a reader/writer pair

use super::protocol::{Request, Response, parse_request, read_line, write_message};
use crate::index::matcher::SubstringIndex;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Instant;

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Requests handled, including malformed ones
    pub requests: u64,
    /// Requests that could not be parsed
    pub errors: u64,
    /// Whether the client asked to shut down (as opposed to EOF)
    pub shutdown: bool,
}

/// Serve requests from `reader` until EOF or a `Shutdown` request
///
/// Malformed requests are answered with an `Error` response and the loop
/// keeps going; only I/O failures end the session early.
pub fn serve<R: BufRead, W: Write>(
    index: &SubstringIndex,
    mut reader: R,
    mut writer: W,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    while let Some(line) = read_line(&mut reader).context("Failed to read request")? {
        summary.requests += 1;

        let response = match parse_request(&line) {
            Ok(Request::Shutdown) => {
                summary.shutdown = true;
                write_message(&mut writer, &Response::ShuttingDown)
                    .context("Failed to write response")?;
                break;
            }
            Ok(request) => handle_request(index, request),
            Err(e) => {
                summary.errors += 1;
                tracing::warn!(error = %e, "malformed request");
                Response::Error {
                    message: format!("Invalid request: {}", e),
                }
            }
        };

        write_message(&mut writer, &response).context("Failed to write response")?;
    }

    tracing::info!(
        requests = summary.requests,
        errors = summary.errors,
        shutdown = summary.shutdown,
        "session ended"
    );

    Ok(summary)
}

/// Map one request onto the index operations
pub fn handle_request(index: &SubstringIndex, request: Request) -> Response {
    match request {
        Request::Register { key, value } => Response::Registered {
            success: index.register(key, value),
        },
        Request::Retrieve { query } => {
            let start = Instant::now();
            let values = index.retrieve(query);
            Response::Values {
                values,
                duration_ms: start.elapsed().as_secs_f64() * 1000.0,
            }
        }
        Request::Clear => {
            index.clear();
            Response::Cleared
        }
        Request::Stats => Response::Stats(index.stats()),
        Request::Ping => Response::Pong,
        Request::Shutdown => Response::ShuttingDown,
    }
}
