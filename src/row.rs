//! Row parsing and formatting.
//!
//! An input row is one trimmed line split on the input pattern. The
//! pattern marks the boundary between fields; it is not anchored. Rows
//! are handled as bytes so input in any ASCII-compatible encoding passes
//! through unchanged.

use regex::bytes::Regex;

use crate::error::Result;

/// Splits input lines into fields on a compiled delimiter pattern.
#[derive(Debug, Clone)]
pub struct RowSplitter {
    delimiter: Regex,
}

impl RowSplitter {
    /// Compile `pattern`, failing with `UnmergeError::Pattern` if malformed.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            delimiter: Regex::new(pattern)?,
        })
    }

    /// Trim `line` and split it into fields.
    ///
    /// An empty (or all-whitespace) line yields a single empty field. An
    /// empty delimiter match at the start of the line does not produce a
    /// leading empty field, and one touching the end of the previous match
    /// is ignored, so a pattern such as `\s*` splits `ab` into `a`, `b`.
    pub fn split<'a>(&self, line: &'a [u8]) -> Vec<&'a [u8]> {
        let line = trim(line);
        if line.is_empty() {
            return vec![line];
        }

        let mut fields = Vec::new();
        let mut beg = 0;
        let mut end = 0;
        let mut prev_end = None;
        for m in self.delimiter.find_iter(line) {
            if m.is_empty() && prev_end == Some(m.start()) {
                continue;
            }
            prev_end = Some(m.end());
            end = m.start();
            if m.end() != 0 {
                fields.push(&line[beg..end]);
            }
            beg = m.end();
        }
        if end != line.len() {
            fields.push(&line[beg..]);
        }
        fields
    }

    pub fn pattern(&self) -> &str {
        self.delimiter.as_str()
    }
}

/// Strip leading and trailing whitespace.
///
/// Unicode whitespace is stripped from valid UTF-8; other input falls back
/// to ASCII whitespace.
pub fn trim(bytes: &[u8]) -> &[u8] {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.trim().as_bytes(),
        Err(_) => bytes.trim_ascii(),
    }
}

/// True if the field has no content after trimming whitespace.
pub fn is_blank(field: &[u8]) -> bool {
    trim(field).is_empty()
}

/// Join `slots` with `separator` and terminate with a newline.
pub fn format_row<S: AsRef<[u8]>>(slots: &[S], separator: &[u8]) -> Vec<u8> {
    let mut line = Vec::new();
    for (i, slot) in slots.iter().enumerate() {
        if i > 0 {
            line.extend_from_slice(separator);
        }
        line.extend_from_slice(slot.as_ref());
    }
    line.push(b'\n');
    line
}
