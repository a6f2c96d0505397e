//! Same-schema CSV concatenation.
//!
//! This crate discovers `.csv` files in a directory, validates that every
//! file's header matches the header of the first file found (the "master
//! schema"), and concatenates their bodies into a single `combined.csv`
//! in that directory.
//!
//! The pipeline is deliberately byte-oriented: headers are compared as
//! literal comma-split token lists and bodies are streamed verbatim, so
//! quoting, escaping, and embedded delimiters are never interpreted.
//!
//! # Main entry points
//!
//! - [`combine::combine_directory`] — discover, validate, and merge,
//!   producing `combined.csv` atomically via a staging file.
//! - [`combine::verify_directory`] — dry run; validate schemas without
//!   writing anything.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use csv_combiner::combine::combine_directory;
//!
//! let outcome = combine_directory(Path::new("./reports"))?;
//! println!(
//!     "merged {} file(s) into {}",
//!     outcome.files_merged,
//!     outcome.output_path.display(),
//! );
//! # Ok::<(), csv_combiner::combine::CombineError>(())
//! ```

pub mod append;
pub mod combine;
pub mod discover;
pub mod header;

pub use combine::{CombineError, CombineOutcome, VerifyOutcome};

/// Name of the combined output file written into the scanned directory.
///
/// Discovery excludes this name so a re-run never ingests its own output.
pub const OUTPUT_FILE_NAME: &str = "combined.csv";

/// Name of the staging file the combiner writes before renaming it into
/// place. Its suffix keeps it out of discovery as well.
pub const STAGING_FILE_NAME: &str = "combined.csv.tmp";
