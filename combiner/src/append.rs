//! Verbatim body copying.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::combine::CombineError;

/// Streams the body of `source` — every byte after its first line — into
/// `dest`.
///
/// The header bytes are consumed without being copied; everything after
/// them is written verbatim, so line endings and any quoting inside the
/// body pass through untouched. A header-only file contributes zero
/// bytes. Returns the number of body bytes copied.
///
/// The copy goes through `BufReader`'s internal buffer; its size is a
/// throughput knob with no effect on the output.
pub fn append_body(source: &Path, dest: &mut impl Write) -> Result<u64, CombineError> {
    let file = File::open(source).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            CombineError::FileNotFound {
                path: source.display().to_string(),
            }
        } else {
            CombineError::Io(err)
        }
    })?;
    let mut reader = BufReader::new(file);

    // Advance past the header line. A file without a trailing newline on
    // its header has no body at all.
    let mut header = Vec::new();
    reader.read_until(b'\n', &mut header)?;

    let copied = io::copy(&mut reader, dest)?;
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn copy_body(contents: &[u8]) -> Vec<u8> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        fs::write(&path, contents).unwrap();

        let mut dest = Vec::new();
        append_body(&path, &mut dest).unwrap();
        dest
    }

    #[test]
    fn test_append_body_skips_header_only() {
        assert_eq!(copy_body(b"a,b\n1,2\n3,4\n"), b"1,2\n3,4\n");
    }

    #[test]
    fn test_append_body_header_only_file_contributes_nothing() {
        assert_eq!(copy_body(b"a,b\n"), b"");
        assert_eq!(copy_body(b"a,b"), b"");
    }

    #[test]
    fn test_append_body_is_binary_safe() {
        // CRLF endings and a stray NUL in the body must pass through.
        assert_eq!(copy_body(b"a,b\r\n1,\x002\r\n"), b"1,\x002\r\n");
    }

    #[test]
    fn test_append_body_preserves_missing_final_newline() {
        assert_eq!(copy_body(b"a,b\n1,2"), b"1,2");
    }

    #[test]
    fn test_append_body_reports_bytes_copied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        fs::write(&path, "a,b\n1,2\n").unwrap();

        let mut dest = Vec::new();
        assert_eq!(append_body(&path, &mut dest).unwrap(), 4);
    }

    #[test]
    fn test_append_body_missing_source_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut dest = Vec::new();
        let err = append_body(&dir.path().join("gone.csv"), &mut dest).unwrap_err();
        assert!(matches!(err, CombineError::FileNotFound { .. }));
    }
}
