//! Per-row diagnostics for verbose runs.
//!
//! A `RowTrace` captures what the fill-down step saw and did for one
//! input line, so it can be written ahead of the row or inspected in tests.

use std::io::{self, Write};

/// Trace of one input line's trip through the fill-down step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTrace {
    /// 1-based row number in the input stream.
    pub row: usize,
    /// Carried values before this row was merged.
    pub carry_before: Vec<String>,
    /// The line as read, including its line terminator.
    pub raw_line: String,
    /// Fields after trimming and splitting.
    pub fields: Vec<String>,
    /// End column in effect for this row (resolved on the first row).
    pub end_column: usize,
    /// Formatted output row.
    pub output: String,
}

impl RowTrace {
    /// Write the human-readable diagnostic lines for this row.
    pub fn write_diagnostics<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Last line {:?}", self.carry_before)?;
        writeln!(writer, "Line {}", self.raw_line.trim_end_matches(['\r', '\n']))?;
        writeln!(writer, "fields = {:?}", self.fields)?;
        writeln!(writer, "endColumn = {}", self.end_column)
    }
}
