//! Fill-down configuration.
//!
//! A `FillConfig` is built once per invocation (by the CLI or a library
//! caller) and handed to the processor, which never mutates it.

use crate::error::{Result, UnmergeError};

/// Input delimiter used when the caller leaves the pattern empty.
pub const DEFAULT_INPUT_PATTERN: &str = r"\s*:\s*";

/// Output separator used when the caller leaves the separator empty.
pub const DEFAULT_OUTPUT_SEPARATOR: &str = "\t:\t";

/// Configuration for a single fill-down run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillConfig {
    /// First column to fill (inclusive).
    pub start_column: usize,
    /// End column (exclusive). `0` means "use the first row's field count".
    pub end_column: usize,
    /// Regular expression separating fields in an input row.
    pub input_pattern: String,
    /// Literal string joining fields in an output row.
    pub output_separator: String,
    /// Write diagnostic lines to the output sink before each row.
    pub verbose: bool,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            start_column: 0,
            end_column: 0,
            input_pattern: DEFAULT_INPUT_PATTERN.to_string(),
            output_separator: DEFAULT_OUTPUT_SEPARATOR.to_string(),
            verbose: false,
        }
    }
}

impl FillConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column range `[start, end)`. An `end` of `0` auto-detects.
    pub fn with_columns(mut self, start: usize, end: usize) -> Self {
        self.start_column = start;
        self.end_column = end;
        self
    }

    pub fn with_input_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.input_pattern = pattern.into();
        self
    }

    pub fn with_output_separator(mut self, separator: impl Into<String>) -> Self {
        self.output_separator = separator.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check the column range before any input is read.
    pub fn validate(&self) -> Result<()> {
        validate_column_markers(self.start_column, self.end_column)
    }

    /// The input pattern, falling back to the default when empty.
    pub fn resolved_input_pattern(&self) -> &str {
        if self.input_pattern.is_empty() {
            DEFAULT_INPUT_PATTERN
        } else {
            &self.input_pattern
        }
    }

    /// The output separator, falling back to the default when empty.
    pub fn resolved_output_separator(&self) -> &str {
        if self.output_separator.is_empty() {
            DEFAULT_OUTPUT_SEPARATOR
        } else {
            &self.output_separator
        }
    }
}

/// Reject a start column past a fixed end column.
///
/// An end column of `0` is the "unset" sentinel and always passes.
pub fn validate_column_markers(start: usize, end: usize) -> Result<()> {
    if end != 0 && start > end {
        return Err(UnmergeError::Configuration(
            "start column greater than end column".to_string(),
        ));
    }
    Ok(())
}
