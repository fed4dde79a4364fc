//! Line-oriented parser for the coordinate-triple text format
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Whitespace around tokens is ignored, blank entry lines are skipped, and a
//! repeated coordinate keeps its last value. Coordinates are not checked
//! against the declared dimensions here; out-of-range entries are stored
//! as-is and only surface through the bounds-checked accessor.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

impl SparseMatrix {
    /// Parse a matrix from a file
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the file cannot be opened, otherwise
    /// the same errors as [`from_reader`](SparseMatrix::from_reader).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a matrix from a buffered text stream
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] for a malformed header or entry line and
    /// [`Error::Io`] if the stream fails mid-read.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?.trim().to_string());
        }

        let rows = parse_dimension(&lines, 0, "rows")?;
        let cols = parse_dimension(&lines, 1, "cols")?;

        let mut matrix = Self::with_dims(rows, cols);
        for (index, line) in lines.iter().enumerate().skip(2) {
            if line.is_empty() {
                continue;
            }
            let (row, col, value) = parse_triple(line, index + 1)?;
            matrix.set(row, col, value);
        }
        Ok(matrix)
    }
}

/// Parse a `rows=<int>` / `cols=<int>` header line at the given index
fn parse_dimension(lines: &[String], index: usize, key: &str) -> Result<usize> {
    let line = lines
        .get(index)
        .ok_or_else(|| Error::format(format!("missing '{key}=<count>' header line")))?;

    let (name, digits) = line
        .split_once('=')
        .ok_or_else(|| Error::format(format!("line {}: expected '{key}=<count>'", index + 1)))?;
    let (name, digits) = (name.trim(), digits.trim());
    if name != key {
        return Err(Error::format(format!(
            "line {}: expected '{key}=<count>', got '{line}'",
            index + 1
        )));
    }

    let value = parse_int(digits)
        .ok_or_else(|| Error::format(format!("line {}: '{digits}' is not an integer", index + 1)))?;
    usize::try_from(value).map_err(|_| {
        Error::format(format!(
            "line {}: {key} count must be non-negative, got {value}",
            index + 1
        ))
    })
}

/// Parse one `(row, col, value)` entry line
///
/// All whitespace is stripped before validation, so `( 1 , 2 , 3 )` is
/// accepted.
fn parse_triple(line: &str, line_number: usize) -> Result<(i64, i64, i64)> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();

    let interior = compact
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            Error::format(format!("line {line_number}: expected '(row, col, value)'"))
        })?;

    let fields: Vec<&str> = interior.split(',').collect();
    if fields.len() != 3 {
        return Err(Error::format(format!(
            "line {line_number}: expected 3 fields, got {}",
            fields.len()
        )));
    }

    let mut parsed = [0i64; 3];
    for (slot, field) in parsed.iter_mut().zip(&fields) {
        *slot = parse_int(field).ok_or_else(|| {
            Error::format(format!("line {line_number}: '{field}' is not an integer"))
        })?;
    }
    Ok((parsed[0], parsed[1], parsed[2]))
}

/// Parse a signed integer: optional leading `-`, then only ASCII digits
///
/// Stricter than `str::parse::<i64>`: a leading `+`, interior signs, or an
/// empty digit string are all rejected. Returns None on overflow.
fn parse_int(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
