use arrow_schema::{ArrowError, DataType};
use noisemodel_core::DatasetError;
use thiserror::Error;

/// Errors raised while building a [`crate::LabeledTable`] or converting it to
/// and from Arrow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
    /// A column's length differs from the number of row labels.
    #[error("column `{column}` has {actual} values but the table has {expected} rows")]
    ColumnLength {
        /// Name of the offending column.
        column: String,
        /// Number of row labels.
        expected: usize,
        /// Number of values in the column.
        actual: usize,
    },
    /// Two columns share a name.
    #[error("column `{column}` appears more than once")]
    DuplicateColumn {
        /// The repeated name.
        column: String,
    },
    /// An Arrow column has a type the table cannot store.
    #[error("column `{column}` has unsupported type {actual:?}")]
    UnsupportedType {
        /// Name of the offending column.
        column: String,
        /// Arrow type found in the batch.
        actual: DataType,
    },
    /// The requested label column is missing from the batch.
    #[error("label column `{column}` not found")]
    LabelColumnNotFound {
        /// Name that was requested.
        column: String,
    },
    /// A row label was null.
    #[error("row {row} has a null label")]
    NullLabel {
        /// Index of the offending row.
        row: usize,
    },
    /// The table shape was invalid.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// Arrow rejected a conversion.
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
}
