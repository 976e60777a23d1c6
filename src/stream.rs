//! Input and output handles for the command-line tool.
//!
//! `None` (or `-`) selects the standard stream; a path opens a file.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Result;

fn is_standard(path: Option<&Path>) -> bool {
    match path {
        None => true,
        Some(p) => p.as_os_str() == "-",
    }
}

/// Open the input source: a buffered file, or locked standard input.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(p) if !is_standard(path) => Ok(Box::new(BufReader::new(File::open(p)?))),
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

/// Open the output sink: a buffered file, or buffered standard output.
///
/// Missing parent directories of a file path are created.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) if !is_standard(path) => {
            if let Some(parent) = p.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            Ok(Box::new(BufWriter::new(File::create(p)?)))
        }
        _ => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_dash_is_standard() {
        assert!(is_standard(None));
        assert!(is_standard(Some(Path::new("-"))));
        assert!(!is_standard(Some(Path::new("table.txt"))));
    }

    #[test]
    fn test_open_input_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, "Beer\n").unwrap();

        let mut input = open_input(Some(path.as_path())).unwrap();
        let mut text = String::new();
        input.read_to_string(&mut text).unwrap();
        assert_eq!(text, "Beer\n");
    }

    #[test]
    fn test_open_input_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(open_input(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_open_output_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");
        {
            let mut output = open_output(Some(path.as_path())).unwrap();
            output.write_all(b"Vodka\n").unwrap();
            output.flush().unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "Vodka\n");
    }
}
