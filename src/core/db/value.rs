/// Value Model Module
///
/// This module defines the dynamically typed value union used both for bind
/// arguments and decoded column values, plus the `Row` and `ResultSet`
/// containers the executor materializes.
///
/// SQLite types values, not columns: the variant of a decoded `Value` is
/// chosen by the runtime storage class of the stored datum, regardless of
/// what type the column was declared with.
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single SQLite value, covering the engine's five storage classes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// SQL NULL
    Null,
    /// 64-bit signed integer
    Integer(i64),
    /// Double-precision float
    Real(f64),
    /// UTF-8 text
    Text(String),
    /// Binary blob
    Blob(Vec<u8>),
}

impl Value {
    /// Returns the storage-class name of this value, as SQLite spells it.
    pub fn storage_class(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Integer(_) => "INTEGER",
            Value::Real(_) => "REAL",
            Value::Text(_) => "TEXT",
            Value::Blob(_) => "BLOB",
        }
    }

    /// Returns true if this value is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

// SQLite has no boolean storage class; it stores 0/1 integers.
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(v as i64)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

/// Decodes a borrowed column value by its runtime storage class.
///
/// TEXT payloads that are not valid UTF-8 are decoded lossily rather than
/// rejected, matching how result text is surfaced elsewhere in the crate.
impl From<ValueRef<'_>> for Value {
    fn from(v: ValueRef<'_>) -> Self {
        match v {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(f) => Value::Real(f),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        }
    }
}

/// Binds with transient semantics: the engine copies text and blob payloads,
/// so the bound argument may be dropped as soon as the bind call returns.
impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
            Value::Integer(i) => ToSqlOutput::Owned(SqlValue::Integer(*i)),
            Value::Real(f) => ToSqlOutput::Owned(SqlValue::Real(*f)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
        })
    }
}

/// One decoded result row: an ordered sequence of (column name, value)
/// entries.
///
/// Column order is statement-defined and preserved. Duplicate column names
/// (e.g. `SELECT a, a FROM t`) are each kept as separate entries in
/// encounter order, never merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    entries: Vec<(String, Value)>,
}

impl Row {
    /// Creates an empty row with room for `capacity` columns.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Row {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: String, value: Value) {
        self.entries.push((name, value));
    }

    /// Returns the value of the first column with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the (name, value) entry at the given column index.
    pub fn get_index(&self, index: usize) -> Option<(&str, &Value)> {
        self.entries.get(index).map(|(n, v)| (n.as_str(), v))
    }

    /// Iterates over (name, value) entries in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of columns in this row.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Row {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Serializes as a map in column order. Duplicate column names produce
/// duplicate map keys, preserving the row's shape.
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The full materialized result of one statement execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    /// Column names declared by the statement, in order.
    pub columns: Vec<String>,
    /// Decoded rows in engine iteration order.
    pub rows: Vec<Row>,
    /// Number of rows returned.
    pub row_count: usize,
}

impl ResultSet {
    /// Creates a new ResultSet from column names and decoded rows.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let row_count = rows.len();
        ResultSet {
            columns,
            rows,
            row_count,
        }
    }

    /// Returns true if the statement produced no rows (e.g. INSERT/UPDATE/DELETE).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the decoded rows in order.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(42i64), Value::Integer(42));
        assert_eq!(Value::from(1.5f64), Value::Real(1.5));
        assert_eq!(Value::from("hi"), Value::Text("hi".to_string()));
        assert_eq!(Value::from(vec![0u8, 1]), Value::Blob(vec![0, 1]));
        assert_eq!(Value::from(true), Value::Integer(1));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    }

    #[test]
    fn test_storage_class_names() {
        assert_eq!(Value::Null.storage_class(), "NULL");
        assert_eq!(Value::Integer(0).storage_class(), "INTEGER");
        assert_eq!(Value::Real(0.0).storage_class(), "REAL");
        assert_eq!(Value::Text(String::new()).storage_class(), "TEXT");
        assert_eq!(Value::Blob(Vec::new()).storage_class(), "BLOB");
        assert!(Value::Null.is_null());
        assert!(!Value::Integer(0).is_null());
    }

    #[test]
    fn test_decode_from_value_ref() {
        assert_eq!(Value::from(ValueRef::Null), Value::Null);
        assert_eq!(Value::from(ValueRef::Integer(7)), Value::Integer(7));
        assert_eq!(
            Value::from(ValueRef::Text(b"caf\xc3\xa9")),
            Value::Text("café".to_string())
        );
        // Invalid UTF-8 decodes lossily instead of failing the whole row.
        assert_eq!(
            Value::from(ValueRef::Text(b"a\xffb")),
            Value::Text("a\u{fffd}b".to_string())
        );
    }

    #[test]
    fn test_row_preserves_duplicate_columns() {
        let mut row = Row::with_capacity(3);
        row.push("a".to_string(), Value::Integer(1));
        row.push("a".to_string(), Value::Integer(2));
        row.push("b".to_string(), Value::Null);

        assert_eq!(row.len(), 3);
        // get() resolves to the first entry in encounter order.
        assert_eq!(row.get("a"), Some(&Value::Integer(1)));
        assert_eq!(row.get_index(1), Some(("a", &Value::Integer(2))));
        assert_eq!(row.get("missing"), None);

        let names: Vec<&str> = row.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "a", "b"]);
    }

    #[test]
    fn test_row_serializes_in_column_order() {
        let row: Row = vec![
            ("b".to_string(), Value::Integer(2)),
            ("a".to_string(), Value::Text("x".to_string())),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"b":{"Integer":2},"a":{"Text":"x"}}"#);
    }

    #[test]
    fn test_result_set_counts_rows() {
        let rows = vec![Row::default(), Row::default()];
        let rs = ResultSet::new(vec!["a".to_string()], rows);
        assert_eq!(rs.row_count, 2);
        assert!(!rs.is_empty());
        assert!(ResultSet::new(vec![], vec![]).is_empty());
    }
}
