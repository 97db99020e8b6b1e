//! In-memory boolean indicator table produced by the one-hot encoder.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::PrepError;
use crate::types::ColumnName;

/// A table of named boolean columns, all the same length.
///
/// Column insertion order is preserved, so a frame built from sorted writer
/// names keeps that order when iterated or serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolFrame {
    num_rows: usize,
    columns: IndexMap<ColumnName, Vec<bool>>,
}

impl BoolFrame {
    /// Create an empty frame that will hold `num_rows` values per column.
    pub fn with_rows(num_rows: usize) -> Self {
        Self {
            num_rows,
            columns: IndexMap::new(),
        }
    }

    /// Number of rows each column holds.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns currently in the frame.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// True when the frame holds no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether a column with this name exists.
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Iterate columns as `(name, values)` pairs in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[bool])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Values of one column, or `None` if absent.
    pub fn column(&self, name: &str) -> Option<&[bool]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Single cell lookup; `None` if the column or row does not exist.
    pub fn value(&self, name: &str, row: usize) -> Option<bool> {
        self.columns.get(name)?.get(row).copied()
    }

    /// Append a column. Fails if the name is taken or the length differs from
    /// the frame's row count.
    pub fn push_column(
        &mut self,
        name: impl Into<ColumnName>,
        values: Vec<bool>,
    ) -> Result<(), PrepError> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(PrepError::DuplicateColumn(name));
        }
        if values.len() != self.num_rows {
            return Err(PrepError::ColumnLengthMismatch {
                column: name,
                expected: self.num_rows,
                actual: values.len(),
            });
        }
        self.columns.insert(name, values);
        Ok(())
    }
}
