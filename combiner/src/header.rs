//! Header-line reading and schema extraction.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use csv_combiner_core::Schema;

use crate::combine::CombineError;

/// Reads the first line of `path` and extracts its [`Schema`].
///
/// Only the header line is consumed; the file handle is dropped before
/// returning. The trailing `\n` (and a preceding `\r`, for CRLF files)
/// is stripped before the comma split, so line endings never leak into
/// the last column name.
///
/// A zero-byte file or an empty first line yields the one-empty-field
/// schema, which is left to fail schema comparison rather than being
/// treated as a distinct error.
pub fn read_schema(path: &Path) -> Result<Schema, CombineError> {
    let file = File::open(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            CombineError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            CombineError::Io(err)
        }
    })?;

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;

    Ok(Schema::from_header_line(trim_line_ending(&line)))
}

/// Strips one trailing `\n` and a preceding `\r` if present.
pub(crate) fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
