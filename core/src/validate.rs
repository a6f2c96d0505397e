//! Schema comparison diagnostics.
//!
//! [`Schema::matches`](crate::Schema::matches) answers *whether* two
//! schemas agree; [`compare_schemas`] answers *where* they first diverge,
//! so the combiner can name the offending column when it rejects a file.

use thiserror::Error;

use crate::Schema;

/// First point of divergence between a candidate schema and the master.
///
/// A column-count difference is reported before any positional
/// difference, since positional comparison is meaningless across
/// different lengths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaMismatch {
    /// The schemas have different numbers of columns.
    #[error("expected {expected} column(s), found {found}")]
    FieldCount { expected: usize, found: usize },
    /// A column name differs at the given zero-based position.
    #[error("column {index} is '{found}', expected '{expected}'")]
    Field {
        index: usize,
        expected: String,
        found: String,
    },
}

/// Compares a candidate schema against the master schema.
///
/// Returns `None` when the schemas match exactly (same length, identical
/// names at every position), otherwise the first divergence. Pure
/// function, no side effects.
///
/// # Examples
///
/// ```
/// use csv_combiner_core::{Schema, SchemaMismatch, compare_schemas};
///
/// let master = Schema::from_header_line("a,b");
/// assert!(compare_schemas(&master, &Schema::from_header_line("a,b")).is_none());
///
/// let short = Schema::from_header_line("a");
/// assert_eq!(
///     compare_schemas(&master, &short),
///     Some(SchemaMismatch::FieldCount { expected: 2, found: 1 }),
/// );
///
/// let renamed = Schema::from_header_line("a,c");
/// assert!(matches!(
///     compare_schemas(&master, &renamed),
///     Some(SchemaMismatch::Field { index: 1, .. }),
/// ));
/// ```
pub fn compare_schemas(master: &Schema, candidate: &Schema) -> Option<SchemaMismatch> {
    if master.field_count() != candidate.field_count() {
        return Some(SchemaMismatch::FieldCount {
            expected: master.field_count(),
            found: candidate.field_count(),
        });
    }

    for (index, (expected, found)) in master
        .fields()
        .iter()
        .zip(candidate.fields())
        .enumerate()
    {
        if expected != found {
            return Some(SchemaMismatch::Field {
                index,
                expected: expected.clone(),
                found: found.clone(),
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_schemas_accepts_identical() {
        let master = Schema::from_header_line("a,b,c");
        let candidate = Schema::from_header_line("a,b,c");
        assert_eq!(compare_schemas(&master, &candidate), None);
    }

    #[test]
    fn test_compare_schemas_reports_count_before_position() {
        let master = Schema::from_header_line("a,b");
        let candidate = Schema::from_header_line("x,y,z");
        assert_eq!(
            compare_schemas(&master, &candidate),
            Some(SchemaMismatch::FieldCount {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_compare_schemas_reports_first_differing_column() {
        let master = Schema::from_header_line("a,b,c");
        let candidate = Schema::from_header_line("a,x,y");
        assert_eq!(
            compare_schemas(&master, &candidate),
            Some(SchemaMismatch::Field {
                index: 1,
                expected: "b".to_string(),
                found: "x".to_string(),
            })
        );
    }

    #[test]
    fn test_compare_schemas_detects_reordered_columns() {
        let master = Schema::from_header_line("a,b");
        let candidate = Schema::from_header_line("b,a");
        assert!(compare_schemas(&master, &candidate).is_some());
    }

    #[test]
    fn test_mismatch_messages_are_operator_readable() {
        let count = SchemaMismatch::FieldCount {
            expected: 2,
            found: 3,
        };
        assert_eq!(count.to_string(), "expected 2 column(s), found 3");

        let field = SchemaMismatch::Field {
            index: 0,
            expected: "a".to_string(),
            found: "b".to_string(),
        };
        assert_eq!(field.to_string(), "column 0 is 'b', expected 'a'");
    }
}
