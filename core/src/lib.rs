//! Core schema model for CSV combining.
//!
//! This crate defines the foundational types for reasoning about CSV
//! headers:
//!
//! - [`Schema`] — the ordered sequence of column names taken from a CSV
//!   file's header line.
//! - [`SchemaMismatch`] — a structured description of the first point of
//!   divergence between two schemas.
//!
//! A schema is built by splitting a header line on the raw comma
//! character. There is deliberately no quoting, escaping, or whitespace
//! handling: the combiner treats headers as literal token lists and file
//! bodies as opaque bytes, so the model here stays equally literal.
//!
//! # Example
//!
//! ```
//! use csv_combiner_core::{Schema, compare_schemas};
//!
//! let master = Schema::from_header_line("id,name,email");
//! let candidate = Schema::from_header_line("id,name,email");
//! assert!(master.matches(&candidate));
//! assert!(compare_schemas(&master, &candidate).is_none());
//!
//! // Column order matters.
//! let reordered = Schema::from_header_line("name,id,email");
//! assert!(!master.matches(&reordered));
//! ```

mod schema;
mod validate;

pub use schema::Schema;
pub use validate::{SchemaMismatch, compare_schemas};
