//! Tabular dataset abstractions consumed by the noise model.

use std::{fmt, sync::Arc};

use crate::error::DatasetError;

/// A single value read from or written to a [`Dataset`].
///
/// Numeric arrays only ever hold [`Cell::Float`]; labeled tables map their
/// typed columns onto the matching variant and use [`Cell::Missing`] for
/// nulls.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// Absent value.
    Missing,
    /// Floating-point value.
    Float(f64),
    /// Integer value.
    Int(i64),
    /// Text value.
    Text(String),
}

impl Cell {
    /// Returns a short name for the kind of value held, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
        }
    }

    /// Returns whether the cell holds no value.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns the numeric value, widening integers to `f64`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "integers are widened for numeric strategies"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            Self::Missing | Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("NA"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Two-dimensional, row-addressable container the noise model operates on.
///
/// Implementations must preserve row and column identity (labels and order)
/// across [`select_rows`](Dataset::select_rows) and
/// [`write_rows`](Dataset::write_rows), so the rows handed to a corruption
/// strategy can be written back exactly where they came from.
///
/// # Examples
/// ```
/// use noisemodel_core::{Cell, Dataset, DatasetError};
///
/// #[derive(Clone)]
/// struct Column(Vec<f64>);
///
/// impl Dataset for Column {
///     fn name(&self) -> &str { "column" }
///     fn n_rows(&self) -> usize { self.0.len() }
///     fn n_columns(&self) -> usize { 1 }
///     fn select_rows(&self, indices: &[usize]) -> Result<Self, DatasetError> {
///         indices
///             .iter()
///             .map(|&index| self.0.get(index).copied().ok_or(DatasetError::OutOfBounds { index }))
///             .collect::<Result<_, _>>()
///             .map(Column)
///     }
///     fn write_rows(&mut self, indices: &[usize], rows: &Self) -> Result<(), DatasetError> {
///         for (&index, value) in indices.iter().zip(&rows.0) {
///             *self.0.get_mut(index).ok_or(DatasetError::OutOfBounds { index })? = *value;
///         }
///         Ok(())
///     }
///     fn cell(&self, row: usize, _column: usize) -> Result<Cell, DatasetError> {
///         self.0.get(row).map(|v| Cell::Float(*v)).ok_or(DatasetError::OutOfBounds { index: row })
///     }
///     fn set_cell(&mut self, row: usize, _column: usize, value: Cell) -> Result<(), DatasetError> {
///         let slot = self.0.get_mut(row).ok_or(DatasetError::OutOfBounds { index: row })?;
///         *slot = value.as_f64().unwrap_or(f64::NAN);
///         Ok(())
///     }
/// }
///
/// let data = Column(vec![1.0, 2.0, 3.0]);
/// let picked = data.select_rows(&[2, 0])?;
/// assert_eq!(picked.0, [3.0, 1.0]);
/// assert_eq!(data.dimensions(), (3, 1));
/// assert!(!data.supports_int_cast());
/// # Ok::<(), DatasetError>(())
/// ```
pub trait Dataset: Clone {
    /// Returns a human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Returns the number of rows.
    fn n_rows(&self) -> usize;

    /// Returns the number of columns.
    fn n_columns(&self) -> usize;

    /// Returns `(rows, columns)`.
    fn dimensions(&self) -> (usize, usize) {
        (self.n_rows(), self.n_columns())
    }

    /// Extracts the rows at `indices`, in the order given, as a new dataset
    /// carrying the same columns and the selected rows' labels.
    ///
    /// # Errors
    /// Returns [`DatasetError::OutOfBounds`] for any invalid index.
    fn select_rows(&self, indices: &[usize]) -> Result<Self, DatasetError>;

    /// Overwrites the rows at `indices` with the rows of `rows`, pairing them
    /// positionally. Row labels of the destination are kept.
    ///
    /// # Errors
    /// Implementations must return [`DatasetError::RowCountMismatch`] when
    /// `rows` does not hold exactly `indices.len()` rows,
    /// [`DatasetError::ColumnCountMismatch`] when the column counts differ, and
    /// [`DatasetError::OutOfBounds`] for invalid indices. On error `self` is
    /// left unmodified.
    fn write_rows(&mut self, indices: &[usize], rows: &Self) -> Result<(), DatasetError>;

    /// Reads a single cell.
    ///
    /// # Errors
    /// Returns [`DatasetError::OutOfBounds`] or
    /// [`DatasetError::ColumnOutOfBounds`] for invalid coordinates.
    fn cell(&self, row: usize, column: usize) -> Result<Cell, DatasetError>;

    /// Writes a single cell.
    ///
    /// # Errors
    /// Returns an out-of-bounds error for invalid coordinates and
    /// [`DatasetError::TypeMismatch`] when the column cannot store `value`.
    fn set_cell(&mut self, row: usize, column: usize, value: Cell) -> Result<(), DatasetError>;

    /// Returns whether [`cast_to_int`](Dataset::cast_to_int) is supported.
    fn supports_int_cast(&self) -> bool {
        false
    }

    /// Casts every cell to an integer representation in place.
    ///
    /// The default implementation rejects the request; homogeneous numeric
    /// representations override it.
    ///
    /// # Errors
    /// Returns [`DatasetError::IntCastUnsupported`] unless overridden.
    fn cast_to_int(&mut self) -> Result<(), DatasetError> {
        Err(DatasetError::IntCastUnsupported {
            dataset: Arc::from(self.name()),
        })
    }
}
