//! Record source: comma-separated text to records.
//!
//! The first line names the fields; each later line becomes one record.
//! There is no quoting, so a comma inside a value splits it.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::Record;
use crate::error::{QueryError, Result};

/// Cell delimiter.
pub const DELIMITER: char = ',';

/// Split one line into cells.
///
/// A single trailing `\n` is removed first (and a `\r` before it), so
/// `"a,b,c\n"` gives `["a", "b", "c"]`. A line without a terminator keeps
/// all its characters.
pub fn split_row(line: &str) -> Vec<&str> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.split(DELIMITER).collect()
}

/// Parse the whole input into records.
///
/// Blank lines are skipped. Input without a header line yields no records.
pub fn parse_records(text: &str) -> Vec<Record> {
    let mut lines = text
        .split_inclusive('\n')
        .enumerate()
        .filter(|(idx, line)| {
            let blank = line.trim_end_matches(['\r', '\n']).is_empty();
            if blank {
                trace!(line = idx + 1, "skipping blank line");
            }
            !blank
        })
        .map(|(_, line)| line);

    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let columns = split_row(header);

    let records: Vec<Record> = lines
        .map(|line| Record::from_cells(&columns, &split_row(line)))
        .collect();
    debug!(columns = columns.len(), records = records.len(), "parsed records");
    records
}

/// Read `path` in one pass and parse it.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| QueryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read input");
    Ok(parse_records(&text))
}
