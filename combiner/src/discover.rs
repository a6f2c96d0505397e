//! Candidate file discovery.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::OUTPUT_FILE_NAME;

/// Lists the names of eligible CSV files directly inside `dir`.
///
/// Keeps entry names ending in the literal suffix `.csv` (case-sensitive,
/// so `report.CSV` is excluded) and drops [`OUTPUT_FILE_NAME`] so that a
/// directory holding the output of a previous run can be combined again
/// without feeding the result back into itself. Does not recurse.
///
/// Names are returned in lexicographic order; that order is the merge
/// order, so repeated runs over the same inputs produce identical output.
///
/// A listing failure or an empty listing yields an empty vector — the
/// caller decides whether the directory itself is valid.
pub fn discover_csv_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names = BTreeSet::new();
    for entry in entries.flatten() {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.ends_with(".csv") && name != OUTPUT_FILE_NAME {
            names.insert(name);
        }
    }

    names.into_iter().collect()
}
