//! Line-at-a-time stream executor.
//!
//! Reads one line, pushes it through the `FillDown` step, and writes the
//! resulting row before reading the next line. Nothing is read ahead, so
//! the writer applies backpressure to the reader.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::config::FillConfig;
use crate::debug_trace::RowTrace;
use crate::error::Result;
use crate::fill_stage::FillDown;

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillSummary {
    /// Rows read and written.
    pub rows: usize,
    /// End column in effect, or `None` if no row was read.
    pub end_column: Option<usize>,
}

/// Fill down every line of `reader` into `writer`.
///
/// The configuration is validated and the pattern compiled before the
/// first read; either failure leaves `writer` untouched. A final line
/// without a newline is still processed. Lines are read as raw bytes, so
/// cells that are not UTF-8 are carried and written unchanged. In verbose
/// mode each row is preceded by its diagnostic lines.
pub fn execute<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &FillConfig,
) -> Result<FillSummary> {
    let mut stage = FillDown::new(config)?;
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        if config.verbose {
            let (output, trace) = stage.process_line_traced(&line)?;
            trace.write_diagnostics(&mut writer)?;
            writer.write_all(&output)?;
        } else {
            let output = stage.process_line(&line)?;
            writer.write_all(&output)?;
        }
    }

    if config.verbose {
        writeln!(writer, "Reached end of input")?;
    }
    writer.flush()?;

    let summary = FillSummary {
        rows: stage.rows(),
        end_column: stage.end_column(),
    };
    info!(rows = summary.rows, end_column = ?summary.end_column, "fill-down complete");
    Ok(summary)
}

/// Fill down every line of `reader`, collecting rows and their traces.
///
/// Diagnostics are captured rather than written, whatever `config.verbose`
/// says.
pub fn execute_traced<R: BufRead>(
    mut reader: R,
    config: &FillConfig,
) -> Result<(Vec<Vec<u8>>, Vec<RowTrace>)> {
    let mut stage = FillDown::new(config)?;
    let mut rows = Vec::new();
    let mut traces = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let (output, trace) = stage.process_line_traced(&line)?;
        rows.push(output);
        traces.push(trace);
    }

    Ok((rows, traces))
}

/// Fill down in-memory text, returning the output text.
pub fn fill_text(input: &str, config: &FillConfig) -> Result<String> {
    let mut output = Vec::new();
    execute(input.as_bytes(), &mut output, config)?;
    let text =
        String::from_utf8(output).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(text)
}
