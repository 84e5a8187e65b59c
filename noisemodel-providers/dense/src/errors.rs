use arrow_schema::DataType;
use noisemodel_core::DatasetError;
use thiserror::Error;

/// Errors raised while building a [`crate::DenseMatrix`] from Arrow arrays.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DenseMatrixError {
    /// The list child type was not `Float64`.
    #[error("FixedSizeList child type must be Float64 but found {actual:?}")]
    InvalidListValueType {
        /// Child type found in the array.
        actual: DataType,
    },
    /// The list width could not be used as a column count.
    #[error("invalid FixedSizeList dimension {actual}")]
    InvalidDimension {
        /// Width declared by the array.
        actual: i32,
    },
    /// A whole row was null.
    #[error("row {row} is null")]
    NullRow {
        /// Index of the null row.
        row: usize,
    },
    /// A row contained a null value.
    #[error("row {row} contains null value at position {value_index}")]
    NullValue {
        /// Index of the offending row.
        row: usize,
        /// Position of the first null within the row.
        value_index: usize,
    },
    /// The matrix would not fit in memory.
    #[error("matrix with {rows} rows and dimension {dimension} exceeds capacity limits")]
    CapacityOverflow {
        /// Number of rows requested.
        rows: usize,
        /// Number of values per row.
        dimension: usize,
    },
    /// The ingested values did not form a valid matrix.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
