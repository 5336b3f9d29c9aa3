//! Terminal output for query results and index statistics

use crate::index::types::{IndexState, IndexStats, Value};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print the values matched by `query`
///
/// Format: `<query>: v1 v2 ...`, or `<query>: (no matches)`.
pub fn print_values(query: &str, values: &[Value], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);
    write_values(&mut stdout, query, values)
}

fn write_values<W: WriteColor>(out: &mut W, query: &str, values: &[Value]) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(out, "{}", query)?;
    out.reset()?;
    write!(out, ":")?;

    if values.is_empty() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, " (no matches)")?;
        out.reset()?;
    } else {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        for value in values {
            write!(out, " {}", value)?;
        }
        out.reset()?;
    }

    writeln!(out)
}

/// Print index statistics
pub fn print_stats(stats: &IndexStats, color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);
    write_stats(&mut stdout, stats)
}

fn write_stats<W: WriteColor>(out: &mut W, stats: &IndexStats) -> io::Result<()> {
    writeln!(out, "Index Statistics")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "Entries:          {}", stats.entry_count)?;
    writeln!(out, "Suffix records:   {}", stats.suffix_count)?;
    writeln!(out, "Pending records:  {}", stats.pending_suffix_count)?;

    write!(out, "State:            ")?;
    let state_color = match stats.state {
        IndexState::Clean => Color::Green,
        IndexState::Dirty => Color::Yellow,
    };
    out.set_color(ColorSpec::new().set_fg(Some(state_color)))?;
    write!(out, "{:?}", stats.state)?;
    out.reset()?;
    writeln!(out)?;

    writeln!(out, "Rebuilds:         {}", stats.rebuilds)?;
    writeln!(out, "Queries served:   {}", stats.queries_served)?;

    Ok(())
}
