//! Error types for the noise model core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::shape::Shape;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::Dataset`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DatasetError {
    /// Requested row was outside the dataset's bounds.
    #[error("row {index} is out of bounds")]
    OutOfBounds {
        /// The requested row that exceeded the dataset bounds.
        index: usize,
    },
    /// Requested column was outside the dataset's bounds.
    #[error("column {column} is out of bounds")]
    ColumnOutOfBounds {
        /// The requested column that exceeded the dataset bounds.
        column: usize,
    },
    /// Replacement rows did not match the number of target indices.
    #[error("expected {expected} replacement rows but {actual} were given")]
    RowCountMismatch {
        /// Number of target row indices.
        expected: usize,
        /// Number of rows supplied by the caller.
        actual: usize,
    },
    /// Replacement rows had a different number of columns.
    #[error("expected {expected} columns but found {actual}")]
    ColumnCountMismatch {
        /// Column count of the destination dataset.
        expected: usize,
        /// Column count of the supplied rows.
        actual: usize,
    },
    /// Replacement rows carried different column labels.
    #[error("column {column} is labelled `{actual}` but `{expected}` was expected")]
    ColumnLabelMismatch {
        /// Position of the offending column.
        column: usize,
        /// Label in the destination dataset.
        expected: String,
        /// Label in the supplied rows.
        actual: String,
    },
    /// A row had a different length from the first row.
    #[error("row {row} has length {actual} but expected {expected}")]
    RowLengthMismatch {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A cell value did not fit the column's storage type.
    #[error("column {column} stores {expected} values but a {actual} value was given")]
    TypeMismatch {
        /// Column that rejected the value.
        column: usize,
        /// Storage type of the column.
        expected: &'static str,
        /// Kind of the rejected value.
        actual: &'static str,
    },
    /// Dataset contained no rows.
    #[error("dataset contains no rows")]
    EmptyData,
    /// Dataset rows must have positive dimension.
    #[error("dataset rows must have at least one column")]
    ZeroDimension,
    /// A cell could not be represented as an integer.
    #[error("cell ({row}, {column}) cannot be cast to an integer")]
    IntCast {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        column: usize,
    },
    /// The dataset representation does not support integer casting.
    #[error("dataset `{dataset}` does not support integer casting")]
    IntCastUnsupported {
        /// Name of the dataset that rejected the cast.
        dataset: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`DatasetError`] variants.
    enum DatasetErrorCode for DatasetError {
        /// Requested row was outside the dataset's bounds.
        OutOfBounds => OutOfBounds { .. } => "DATASET_OUT_OF_BOUNDS",
        /// Requested column was outside the dataset's bounds.
        ColumnOutOfBounds => ColumnOutOfBounds { .. } => "DATASET_COLUMN_OUT_OF_BOUNDS",
        /// Replacement rows did not match the number of target indices.
        RowCountMismatch => RowCountMismatch { .. } => "DATASET_ROW_COUNT_MISMATCH",
        /// Replacement rows had a different number of columns.
        ColumnCountMismatch => ColumnCountMismatch { .. } => "DATASET_COLUMN_COUNT_MISMATCH",
        /// Replacement rows carried different column labels.
        ColumnLabelMismatch => ColumnLabelMismatch { .. } => "DATASET_COLUMN_LABEL_MISMATCH",
        /// A row had a different length from the first row.
        RowLengthMismatch => RowLengthMismatch { .. } => "DATASET_ROW_LENGTH_MISMATCH",
        /// A cell value did not fit the column's storage type.
        TypeMismatch => TypeMismatch { .. } => "DATASET_TYPE_MISMATCH",
        /// Dataset contained no rows.
        EmptyData => EmptyData => "DATASET_EMPTY",
        /// Dataset rows must have positive dimension.
        ZeroDimension => ZeroDimension => "DATASET_ZERO_DIMENSION",
        /// A cell could not be represented as an integer.
        IntCast => IntCast { .. } => "DATASET_INT_CAST",
        /// The dataset representation does not support integer casting.
        IntCastUnsupported => IntCastUnsupported { .. } => "DATASET_INT_CAST_UNSUPPORTED",
    }
}

/// Error type produced when configuring or applying a [`crate::NoiseModel`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NoiseModelError {
    /// Shape dimensions must both be strictly positive.
    #[error("invalid shape: ({rows}, {columns})")]
    InvalidShape {
        /// Requested row count.
        rows: i64,
        /// Requested column count.
        columns: i64,
    },
    /// Shape must contain exactly two dimensions.
    #[error("invalid shape: expected 2 dimensions but got {len}")]
    InvalidShapeArity {
        /// Number of dimensions supplied.
        len: usize,
    },
    /// Probability must lie in `[0, 1]`.
    #[error("invalid probability: {got}")]
    InvalidProbability {
        /// The rejected probability.
        got: f64,
    },
    /// Feature importance must be a permutation of the column indices.
    #[error("invalid feature importance {got:?} for {columns} columns")]
    InvalidFeatureImportance {
        /// The rejected ordering.
        got: Vec<usize>,
        /// Column count the ordering was checked against.
        columns: usize,
    },
    /// The dataset passed to `apply` does not match the configured shape.
    #[error("dataset `{dataset}` has shape ({rows}, {columns}) but the noise model expects {expected}")]
    ShapeMismatch {
        /// Name of the rejected dataset.
        dataset: Arc<str>,
        /// Shape configured on the model.
        expected: Shape,
        /// Row count of the dataset.
        rows: usize,
        /// Column count of the dataset.
        columns: usize,
    },
    /// The corruption strategy does not override [`crate::Corruption::corrupt`].
    #[error("corruption strategy `{strategy}` does not implement `corrupt`")]
    CorruptionUnimplemented {
        /// Name of the strategy.
        strategy: Arc<str>,
    },
    /// The corruption strategy returned rows of the wrong shape.
    #[error(
        "corruption strategy `{strategy}` returned ({rows}, {columns}) but ({expected_rows}, {expected_columns}) was required"
    )]
    CorruptedShapeMismatch {
        /// Name of the strategy.
        strategy: Arc<str>,
        /// Number of rows handed to the strategy.
        expected_rows: usize,
        /// Number of columns handed to the strategy.
        expected_columns: usize,
        /// Number of rows returned.
        rows: usize,
        /// Number of columns returned.
        columns: usize,
    },
    /// A row partition was not a valid split of the dataset rows.
    #[error("invalid row partition: {reason}")]
    InvalidPartition {
        /// Explanation of the violated constraint.
        reason: String,
    },
    /// A [`crate::Dataset`] operation failed while applying noise.
    #[error("dataset `{dataset}` failed: {error}")]
    Dataset {
        /// Name of the dataset that produced the error.
        dataset: Arc<str>,
        #[source]
        /// Underlying dataset error.
        error: DatasetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`NoiseModelError`] variants.
    enum NoiseModelErrorCode for NoiseModelError {
        /// Shape dimensions must both be strictly positive.
        InvalidShape => InvalidShape { .. } => "NOISE_INVALID_SHAPE",
        /// Shape must contain exactly two dimensions.
        InvalidShapeArity => InvalidShapeArity { .. } => "NOISE_INVALID_SHAPE_ARITY",
        /// Probability must lie in `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "NOISE_INVALID_PROBABILITY",
        /// Feature importance must be a permutation of the column indices.
        InvalidFeatureImportance => InvalidFeatureImportance { .. } => "NOISE_INVALID_FEATURE_IMPORTANCE",
        /// The dataset does not match the configured shape.
        ShapeMismatch => ShapeMismatch { .. } => "NOISE_SHAPE_MISMATCH",
        /// The corruption strategy does not implement `corrupt`.
        CorruptionUnimplemented => CorruptionUnimplemented { .. } => "NOISE_CORRUPTION_UNIMPLEMENTED",
        /// The corruption strategy returned rows of the wrong shape.
        CorruptedShapeMismatch => CorruptedShapeMismatch { .. } => "NOISE_CORRUPTED_SHAPE_MISMATCH",
        /// A row partition was not a valid split of the dataset rows.
        InvalidPartition => InvalidPartition { .. } => "NOISE_INVALID_PARTITION",
        /// A dataset operation failed while applying noise.
        DatasetFailure => Dataset { .. } => "NOISE_DATASET_FAILURE",
    }
}

impl NoiseModelError {
    /// Returns `true` for errors raised while validating a configuration,
    /// either at construction or during [`crate::NoiseModel::reshape`].
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidShape { .. }
                | Self::InvalidShapeArity { .. }
                | Self::InvalidProbability { .. }
                | Self::InvalidFeatureImportance { .. }
        )
    }

    /// Retrieve the inner [`DatasetErrorCode`] when the error originated in a
    /// [`crate::Dataset`].
    #[must_use]
    pub const fn dataset_code(&self) -> Option<DatasetErrorCode> {
        match self {
            Self::Dataset { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NoiseModelError>;
