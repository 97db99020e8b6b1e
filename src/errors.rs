use thiserror::Error;

use crate::types::ColumnName;

/// Error type for indicator-frame construction failures.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("column '{column}' has {actual} values but the frame holds {expected} rows")]
    ColumnLengthMismatch {
        column: ColumnName,
        expected: usize,
        actual: usize,
    },
    #[error("column '{0}' already exists in the frame")]
    DuplicateColumn(ColumnName),
}
