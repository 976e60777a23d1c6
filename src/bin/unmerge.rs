//! CLI tool to fill down blank cells in delimited table rows.
//!
//! Usage:
//!   unmerge [-b N] [-e N] [--id REGEX] [--od SEP] [-v] [INPUT] [-o OUTPUT]
//!
//! Reads stdin when no input file is given and writes stdout when no
//! output file is given.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unmerge::{DEFAULT_INPUT_PATTERN, DEFAULT_OUTPUT_SEPARATOR, FillConfig, execute, stream};

/// Fill down ("unmerge") blank cells in table rows.
///
/// Every blank cell in the selected columns is replaced by the last
/// non-blank value seen in the same column.
#[derive(Parser)]
#[command(name = "unmerge", version)]
struct Cli {
    /// Input file (default: stdin)
    input: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// First column from the left of the table to unmerge
    #[arg(short = 'b', long = "begin", default_value_t = 0)]
    begin: usize,

    /// Column after the last one to unmerge (0 = width of the first row)
    #[arg(short = 'e', long = "end", default_value_t = 0)]
    end: usize,

    /// Field input delimiter (regular expression)
    #[arg(long = "id", default_value = DEFAULT_INPUT_PATTERN)]
    input_delimiter: String,

    /// Field output delimiter
    #[arg(long = "od", default_value = DEFAULT_OUTPUT_SEPARATOR)]
    output_delimiter: String,

    /// Print diagnostic lines ahead of each row
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> FillConfig {
        FillConfig::new()
            .with_columns(self.begin, self.end)
            .with_input_pattern(self.input_delimiter.as_str())
            .with_output_separator(self.output_delimiter.as_str())
            .with_verbose(self.verbose)
    }
}

fn main() {
    // Logs go to stderr; stdout carries the table.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let input = match stream::open_input(cli.input.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            error!("Error opening input: {e}");
            process::exit(1);
        }
    };

    let output = match stream::open_output(cli.output.as_deref()) {
        Ok(output) => output,
        Err(e) => {
            error!("Error opening output: {e}");
            process::exit(1);
        }
    };

    match execute(input, output, &config) {
        Ok(summary) => {
            info!(
                input = %cli.input.as_deref().map_or("(stdin)".into(), |p| p.display().to_string()),
                output = %cli.output.as_deref().map_or("(stdout)".into(), |p| p.display().to_string()),
                rows = summary.rows,
                "done"
            );
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
