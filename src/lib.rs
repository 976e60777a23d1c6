//! # unmerge
//!
//! A fill-down ("unmerge") processor for delimited table rows.
//!
//! Spreadsheets exported as text often leave a cell blank when it repeats
//! the value above it (merged cells). This library walks the rows once, in
//! order, and replaces each blank cell in a chosen column range with the
//! last non-blank value seen in that column.
//!
//! ## Overview
//!
//! - **Rows**: one line each, split into fields on a regular expression
//!   (default `\s*:\s*`)
//! - **Column range**: `[start, end)`; an end of `0` takes the width of the
//!   first row
//! - **Carry state**: the last non-blank value of every column in range
//! - **Output**: the carried values joined by a separator (default `"\t:\t"`)
//!
//! ## Example
//!
//! ```
//! use unmerge::{FillConfig, fill_text};
//!
//! let config = FillConfig::new().with_columns(0, 2);
//! let output = fill_text("Beer : Beer\n : \nVodka : Spirit\nVodka : \n", &config).unwrap();
//!
//! assert_eq!(
//!     output,
//!     "Beer\t:\tBeer\nBeer\t:\tBeer\nVodka\t:\tSpirit\nVodka\t:\tSpirit\n"
//! );
//! ```

pub mod carry;
pub mod config;
pub mod debug_trace;
pub mod error;
pub mod executor;
pub mod fill_stage;
pub mod row;
pub mod stream;

pub use carry::CarryState;
pub use config::{
    DEFAULT_INPUT_PATTERN, DEFAULT_OUTPUT_SEPARATOR, FillConfig, validate_column_markers,
};
pub use debug_trace::RowTrace;
pub use error::{Result, UnmergeError};
pub use executor::{FillSummary, execute, execute_traced, fill_text};
pub use fill_stage::FillDown;
pub use row::{RowSplitter, format_row, is_blank, trim};
