//! The fill-down step.
//!
//! `FillDown` processes one input line at a time: split it into fields,
//! resolve the column range on the first row if needed, merge the fields
//! into the carry state, and format the carried values as an output row.
//! It holds the only mutable state of a run.

use tracing::debug;

use crate::carry::CarryState;
use crate::config::FillConfig;
use crate::debug_trace::RowTrace;
use crate::error::{Result, UnmergeError};
use crate::row::{RowSplitter, format_row};

/// Stateful fill-down over a stream of lines.
#[derive(Debug)]
pub struct FillDown {
    start_column: usize,
    /// `None` until the first row fixes an auto-detected end column.
    end_column: Option<usize>,
    splitter: RowSplitter,
    separator: Vec<u8>,
    carry: CarryState,
    rows: usize,
}

impl FillDown {
    /// Validate `config` and compile its input pattern.
    ///
    /// Fails before any row is processed if the column range is invalid
    /// or the pattern is malformed.
    pub fn new(config: &FillConfig) -> Result<Self> {
        config.validate()?;
        let splitter = RowSplitter::new(config.resolved_input_pattern())?;
        debug!(
            pattern = splitter.pattern(),
            start_column = config.start_column,
            end_column = config.end_column,
            "compiled input pattern"
        );

        let (end_column, carry) = if config.end_column == 0 {
            (None, CarryState::deferred())
        } else {
            (
                Some(config.end_column),
                CarryState::new(config.end_column - config.start_column),
            )
        };

        Ok(Self {
            start_column: config.start_column,
            end_column,
            splitter,
            separator: config.resolved_output_separator().as_bytes().to_vec(),
            carry,
            rows: 0,
        })
    }

    /// Process one input line and return the formatted output row.
    pub fn process_line(&mut self, line: &[u8]) -> Result<Vec<u8>> {
        let fields = self.splitter.split(line);
        self.fill_fields(&fields)
    }

    /// Process one input line, also capturing a `RowTrace` of the step.
    pub fn process_line_traced(&mut self, line: &[u8]) -> Result<(Vec<u8>, RowTrace)> {
        let carry_before = lossy_all(self.carry.slots());
        let fields = self.splitter.split(line);
        let output = self.fill_fields(&fields)?;

        let trace = RowTrace {
            row: self.rows,
            carry_before,
            raw_line: String::from_utf8_lossy(line).into_owned(),
            fields: lossy_all(&fields),
            end_column: self.end_column.unwrap_or_default(),
            output: String::from_utf8_lossy(&output).into_owned(),
        };
        Ok((output, trace))
    }

    fn fill_fields(&mut self, fields: &[&[u8]]) -> Result<Vec<u8>> {
        self.rows += 1;

        if self.end_column.is_none() {
            let end = fields.len();
            self.end_column = Some(end);
            self.carry.resize_once(end.saturating_sub(self.start_column));
            debug!(end_column = end, "resolved end column from first row");
        }

        self.carry.merge(fields, self.start_column);
        debug!(row = self.rows, fields = fields.len(), "filled row");

        if self.carry.width() == 0 {
            return Err(UnmergeError::EmptyRow { row: self.rows });
        }
        Ok(format_row(self.carry.slots(), &self.separator))
    }

    /// The end column, once known.
    pub fn end_column(&self) -> Option<usize> {
        self.end_column
    }

    /// Number of rows processed so far.
    pub fn rows(&self) -> usize {
        self.rows
    }
}

fn lossy_all<S: AsRef<[u8]>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_ref()).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_one(stage: &mut FillDown, line: &str) -> String {
        String::from_utf8(stage.process_line(line.as_bytes()).unwrap()).unwrap()
    }

    fn fill_all(config: &FillConfig, lines: &[&str]) -> Vec<String> {
        let mut stage = FillDown::new(config).unwrap();
        lines.iter().map(|line| fill_one(&mut stage, line)).collect()
    }

    #[test]
    fn test_single_column() {
        let config = FillConfig::new().with_columns(0, 1);
        let out = fill_all(&config, &["Beer", "", "", "Vodka"]);
        assert_eq!(out, vec!["Beer\n", "Beer\n", "Beer\n", "Vodka\n"]);
    }

    #[test]
    fn test_two_columns() {
        let config = FillConfig::new().with_columns(0, 2);
        let out = fill_all(&config, &["Beer : Beer", " : ", "Vodka : Spirit", "Vodka : "]);
        assert_eq!(
            out,
            vec![
                "Beer\t:\tBeer\n",
                "Beer\t:\tBeer\n",
                "Vodka\t:\tSpirit\n",
                "Vodka\t:\tSpirit\n",
            ]
        );
    }

    #[test]
    fn test_second_column_only() {
        let config = FillConfig::new().with_columns(1, 2);
        let out = fill_all(&config, &["Beer : Beer", " : ", "Vodka : Spirit", "Vodka : "]);
        assert_eq!(out, vec!["Beer\n", "Beer\n", "Spirit\n", "Spirit\n"]);
    }

    #[test]
    fn test_auto_detect_fixed_by_first_row() {
        let config = FillConfig::new();
        let mut stage = FillDown::new(&config).unwrap();
        assert_eq!(stage.end_column(), None);

        assert_eq!(fill_one(&mut stage, "a : b"), "a\t:\tb\n");
        assert_eq!(stage.end_column(), Some(2));

        // wider row does not widen the output
        assert_eq!(fill_one(&mut stage, "c : d : e"), "c\t:\td\n");
        // narrower row keeps the missing column's carried value
        assert_eq!(fill_one(&mut stage, "f"), "f\t:\td\n");
        assert_eq!(stage.end_column(), Some(2));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = FillConfig::new().with_columns(2, 1);
        let err = FillDown::new(&config).unwrap_err();
        assert!(matches!(err, UnmergeError::Configuration(_)));
    }

    #[test]
    fn test_rejects_malformed_pattern() {
        let config = FillConfig::new().with_input_pattern("(");
        let err = FillDown::new(&config).unwrap_err();
        assert!(matches!(err, UnmergeError::Pattern(_)));
    }

    #[test]
    fn test_zero_width_range_is_empty_row() {
        let config = FillConfig::new().with_columns(1, 1);
        let mut stage = FillDown::new(&config).unwrap();
        let err = stage.process_line(b"a : b").unwrap_err();
        assert!(matches!(err, UnmergeError::EmptyRow { row: 1 }));
    }

    #[test]
    fn test_auto_end_before_start_is_empty_row() {
        let config = FillConfig::new().with_columns(3, 0);
        let mut stage = FillDown::new(&config).unwrap();
        let err = stage.process_line(b"a : b").unwrap_err();
        assert!(matches!(err, UnmergeError::EmptyRow { row: 1 }));
    }

    #[test]
    fn test_blank_first_line_auto_detects_one_column() {
        let config = FillConfig::new();
        let out = fill_all(&config, &["", "Beer", ""]);
        assert_eq!(out, vec!["\n", "Beer\n", "Beer\n"]);
    }

    #[test]
    fn test_custom_delimiters() {
        let config = FillConfig::new()
            .with_columns(0, 3)
            .with_input_pattern(r"\s*,\s*")
            .with_output_separator(",");
        let out = fill_all(&config, &["a, b, c", ",,", " , x ,"]);
        assert_eq!(out, vec!["a,b,c\n", "a,b,c\n", "a,x,c\n"]);
    }

    #[test]
    fn test_auto_width_with_pattern_matching_empty() {
        let config = FillConfig::new().with_input_pattern(r"\s*");
        let out = fill_all(&config, &["ab", "c"]);
        assert_eq!(out, vec!["a\t:\tb\n", "c\t:\tb\n"]);
    }

    #[test]
    fn test_non_utf8_cells_carry_down() {
        let config = FillConfig::new().with_columns(0, 2);
        let mut stage = FillDown::new(&config).unwrap();
        assert_eq!(
            stage.process_line(b"Caf\xe9 : Beer\n").unwrap(),
            b"Caf\xe9\t:\tBeer\n"
        );
        assert_eq!(stage.process_line(b" : \n").unwrap(), b"Caf\xe9\t:\tBeer\n");
    }

    #[test]
    fn test_traced_captures_step() {
        let config = FillConfig::new().with_columns(0, 1);
        let mut stage = FillDown::new(&config).unwrap();
        fill_one(&mut stage, "Beer");

        let (output, trace) = stage.process_line_traced(b"\n").unwrap();
        assert_eq!(output, b"Beer\n");
        assert_eq!(trace.row, 2);
        assert_eq!(trace.carry_before, vec!["Beer"]);
        assert_eq!(trace.raw_line, "\n");
        assert_eq!(trace.fields, vec![""]);
        assert_eq!(trace.end_column, 1);
        assert_eq!(trace.output, "Beer\n");
    }

    #[test]
    fn test_traced_matches_untraced() {
        let config = FillConfig::new();
        let lines = ["Beer : Beer", " : ", "Vodka : "];
        let plain = fill_all(&config, &lines);

        let mut stage = FillDown::new(&config).unwrap();
        let traced: Vec<String> = lines
            .iter()
            .map(|line| {
                let (output, _) = stage.process_line_traced(line.as_bytes()).unwrap();
                String::from_utf8(output).unwrap()
            })
            .collect();
        assert_eq!(plain, traced);
    }
}
