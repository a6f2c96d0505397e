//! The ordered-column-name schema type.

use std::fmt;

/// Ordered sequence of column names from a CSV header line.
///
/// Two schemas are equal iff they have the same length and identical
/// strings at every position. The field list is immutable once built.
///
/// # Examples
///
/// ```
/// use csv_combiner_core::Schema;
///
/// let schema = Schema::from_header_line("a,b,c");
/// assert_eq!(schema.fields(), ["a", "b", "c"]);
/// assert_eq!(schema.field_count(), 3);
/// assert_eq!(schema.header_line(), "a,b,c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<String>,
}

impl Schema {
    /// Builds a schema by splitting a header line on the comma character.
    ///
    /// No trimming and no quote-awareness: `" a "` stays `" a "`, and a
    /// quoted field containing a comma becomes two tokens. An empty line
    /// yields a schema of one empty-string field (the split of the empty
    /// string), which will simply fail to match any non-trivial schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use csv_combiner_core::Schema;
    ///
    /// assert_eq!(Schema::from_header_line("a, b").fields(), ["a", " b"]);
    /// assert_eq!(Schema::from_header_line("").fields(), [""]);
    /// ```
    pub fn from_header_line(line: &str) -> Self {
        Self {
            fields: line.split(',').map(ToOwned::to_owned).collect(),
        }
    }

    /// Returns the column names in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the number of columns.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Renders the schema back into a header line (no trailing newline).
    pub fn header_line(&self) -> String {
        self.fields.join(",")
    }

    /// Returns true iff `other` has the same length and identical strings
    /// at every index. Equivalent to `self == other`; spelled out as a
    /// method because it is the validation contract of the combiner.
    pub fn matches(&self, other: &Schema) -> bool {
        self.fields == other.fields
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header_line_splits_on_commas() {
        let schema = Schema::from_header_line("a,b,c");
        assert_eq!(schema.fields(), ["a", "b", "c"]);
    }

    #[test]
    fn test_from_header_line_preserves_whitespace_and_quotes() {
        let schema = Schema::from_header_line(r#" a ,"b,c""#);
        assert_eq!(schema.fields(), [" a ", "\"b", "c\""]);
    }

    #[test]
    fn test_empty_line_yields_single_empty_field() {
        let schema = Schema::from_header_line("");
        assert_eq!(schema.fields(), [""]);
        assert_eq!(schema.field_count(), 1);
    }

    #[test]
    fn test_matches_is_order_sensitive() {
        let ab = Schema::from_header_line("a,b");
        let ba = Schema::from_header_line("b,a");
        assert!(!ab.matches(&ba));
        assert!(ab.matches(&ab.clone()));
    }

    #[test]
    fn test_header_line_round_trips() {
        let schema = Schema::from_header_line("id,name,email");
        assert_eq!(Schema::from_header_line(&schema.header_line()), schema);
    }

    #[test]
    fn test_display_renders_header_line() {
        let schema = Schema::from_header_line("x,y");
        assert_eq!(schema.to_string(), "x,y");
    }
}
