// Dictionary file parsing.
//
// One entry per line: the word, whitespace, then a decimal frequency.
// Extra fields are ignored. Loading is fail-fast: the first malformed line
// (blank lines included) aborts with its line number, and the caller is
// expected to discard whatever was built so far.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::CorrigoError;

/// Parse one dictionary line into `(word, frequency)`.
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_line(line_number: usize, line: &str) -> Result<(String, u64), CorrigoError> {
    let mut fields = line.split_whitespace();
    let word = fields.next().ok_or_else(|| CorrigoError::MalformedLine {
        line: line_number,
        reason: "empty line".to_string(),
    })?;
    let freq_field = fields.next().ok_or_else(|| CorrigoError::MalformedLine {
        line: line_number,
        reason: "missing frequency field".to_string(),
    })?;
    let frequency: u64 = freq_field
        .parse()
        .map_err(|_| CorrigoError::MalformedLine {
            line: line_number,
            reason: format!("invalid frequency {freq_field:?}"),
        })?;
    Ok((word.to_string(), frequency))
}

/// Read all entries from a reader, fail-fast.
pub fn read_entries<R: BufRead>(reader: R) -> Result<Vec<(String, u64)>, CorrigoError> {
    let mut entries = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        entries.push(parse_line(i + 1, &line)?);
    }
    Ok(entries)
}

/// Read all entries from a dictionary file.
///
/// A missing file maps to [`CorrigoError::FileMissing`]; other I/O errors
/// pass through. The file handle lives only for the duration of this call.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<(String, u64)>, CorrigoError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CorrigoError::FileMissing(path.to_path_buf())
        } else {
            CorrigoError::Io(e)
        }
    })?;
    read_entries(BufReader::new(file))
}
