//! Discovery, validation, and merge orchestration.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv_combiner_core::{Schema, SchemaMismatch, compare_schemas};
use thiserror::Error;
use tracing::{debug, info};

use crate::append::append_body;
use crate::discover::discover_csv_files;
use crate::header::read_schema;
use crate::{OUTPUT_FILE_NAME, STAGING_FILE_NAME};

/// Typed error for combine and verify operations.
#[derive(Debug, Error)]
pub enum CombineError {
    /// The target directory does not exist or is not a directory.
    #[error("directory '{path}' does not exist")]
    DirectoryNotFound { path: String },

    /// Discovery found no eligible `.csv` files.
    #[error("no CSV files found in '{path}'")]
    NoCsvFiles { path: String },

    /// An input file disappeared between discovery and reading.
    #[error("file '{path}' not found")]
    FileNotFound { path: String },

    /// A candidate file's header does not equal the master schema.
    #[error("schema mismatch in '{file}': {mismatch}")]
    SchemaMismatch {
        file: String,
        mismatch: SchemaMismatch,
    },

    /// Any other read/write/create/rename failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a successful merge.
#[derive(Debug, Clone)]
pub struct CombineOutcome {
    /// Path of the combined file (`<dir>/combined.csv`).
    pub output_path: PathBuf,
    /// Number of input files whose bodies were appended.
    pub files_merged: usize,
    /// Total body bytes copied, excluding the header line.
    pub body_bytes: u64,
    /// The master schema the output header was written from.
    pub schema: Schema,
}

/// Result of a successful dry run.
#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    /// Number of files whose schemas were checked.
    pub files_checked: usize,
    /// The master schema every file matched.
    pub schema: Schema,
}

/// Combines every eligible CSV file in `dir` into `<dir>/combined.csv`.
///
/// Inputs are merged in discovery (lexicographic) order. The master
/// schema comes from the first file; every file — the first included —
/// must match it exactly or the whole operation aborts with
/// [`CombineError::SchemaMismatch`] naming the offending file.
///
/// Output is staged in `combined.csv.tmp` and renamed into place only
/// after every input has been validated and appended, so `combined.csv`
/// only ever materializes complete. On failure the staging file is
/// removed and any `combined.csv` from a previous run is left untouched.
pub fn combine_directory(dir: &Path) -> Result<CombineOutcome, CombineError> {
    if !dir.is_dir() {
        return Err(CombineError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let names = discover_csv_files(dir);
    let Some(first) = names.first() else {
        return Err(CombineError::NoCsvFiles {
            path: dir.display().to_string(),
        });
    };

    let master = read_schema(&dir.join(first))?;
    debug!(file = %first, schema = %master, "Extracted master schema");

    let staging = dir.join(STAGING_FILE_NAME);
    let result = write_combined(dir, &names, &master, &staging);
    if result.is_err() {
        // Best-effort cleanup; the original error is the one to surface.
        let _ = fs::remove_file(&staging);
    }
    result
}

fn write_combined(
    dir: &Path,
    names: &[String],
    master: &Schema,
    staging: &Path,
) -> Result<CombineOutcome, CombineError> {
    let mut body_bytes = 0u64;

    {
        let mut writer = BufWriter::new(File::create(staging)?);
        writer.write_all(master.header_line().as_bytes())?;
        writer.write_all(b"\n")?;

        for name in names {
            let source = dir.join(name);
            let schema = read_schema(&source)?;
            if let Some(mismatch) = compare_schemas(master, &schema) {
                return Err(CombineError::SchemaMismatch {
                    file: name.clone(),
                    mismatch,
                });
            }

            let copied = append_body(&source, &mut writer)?;
            body_bytes += copied;
            debug!(file = %name, bytes = copied, "Appended CSV body");
        }

        writer.flush()?;
    }

    let output_path = dir.join(OUTPUT_FILE_NAME);
    fs::rename(staging, &output_path)?;

    info!(
        files = names.len(),
        bytes = body_bytes,
        output = %output_path.display(),
        "Combined CSV files"
    );

    Ok(CombineOutcome {
        output_path,
        files_merged: names.len(),
        body_bytes,
        schema: master.clone(),
    })
}

/// Validates that every eligible CSV file in `dir` shares the schema of
/// the first one, without writing anything.
///
/// Same discovery, ordering, and error taxonomy as
/// [`combine_directory`]; the filesystem is left untouched.
pub fn verify_directory(dir: &Path) -> Result<VerifyOutcome, CombineError> {
    if !dir.is_dir() {
        return Err(CombineError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let names = discover_csv_files(dir);
    let Some(first) = names.first() else {
        return Err(CombineError::NoCsvFiles {
            path: dir.display().to_string(),
        });
    };

    let master = read_schema(&dir.join(first))?;
    for name in &names {
        let schema = read_schema(&dir.join(name))?;
        if let Some(mismatch) = compare_schemas(&master, &schema) {
            return Err(CombineError::SchemaMismatch {
                file: name.clone(),
                mismatch,
            });
        }
        debug!(file = %name, "Schema matches master");
    }

    Ok(VerifyOutcome {
        files_checked: names.len(),
        schema: master,
    })
}
