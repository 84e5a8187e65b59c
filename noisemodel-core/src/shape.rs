//! Validated dataset dimensions.

use std::{fmt, num::NonZeroUsize};

use crate::{Result, error::NoiseModelError};

/// The `(rows, columns)` pair a [`crate::NoiseModel`] is configured for.
///
/// Both dimensions are strictly positive. Raw input that may be negative or
/// have the wrong arity can be validated through the [`TryFrom`]
/// implementations.
///
/// # Examples
/// ```
/// use noisemodel_core::{NoiseModelError, Shape};
///
/// let shape = Shape::new(4, 3)?;
/// assert_eq!((shape.rows(), shape.columns()), (4, 3));
///
/// let err = Shape::try_from((5_i64, -1_i64)).expect_err("negative columns are invalid");
/// assert!(matches!(err, NoiseModelError::InvalidShape { rows: 5, columns: -1 }));
/// # Ok::<(), NoiseModelError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Shape {
    rows: NonZeroUsize,
    columns: NonZeroUsize,
}

impl Shape {
    /// Creates a shape from positive dimensions.
    ///
    /// # Errors
    /// Returns [`NoiseModelError::InvalidShape`] when either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        match (NonZeroUsize::new(rows), NonZeroUsize::new(columns)) {
            (Some(rows), Some(columns)) => Ok(Self { rows, columns }),
            _ => Err(NoiseModelError::InvalidShape {
                rows: saturating_i64(rows),
                columns: saturating_i64(columns),
            }),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows.get()
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns.get()
    }

    /// Returns whether a `rows × columns` dataset fits this shape exactly.
    #[must_use]
    pub const fn matches(&self, rows: usize, columns: usize) -> bool {
        self.rows.get() == rows && self.columns.get() == columns
    }
}

fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl TryFrom<(i64, i64)> for Shape {
    type Error = NoiseModelError;

    fn try_from((rows, columns): (i64, i64)) -> Result<Self> {
        let invalid = || NoiseModelError::InvalidShape { rows, columns };
        let rows_usize = usize::try_from(rows).map_err(|_| invalid())?;
        let columns_usize = usize::try_from(columns).map_err(|_| invalid())?;
        Self::new(rows_usize, columns_usize)
    }
}

impl TryFrom<&[i64]> for Shape {
    type Error = NoiseModelError;

    fn try_from(dims: &[i64]) -> Result<Self> {
        match *dims {
            [rows, columns] => Self::try_from((rows, columns)),
            _ => Err(NoiseModelError::InvalidShapeArity { len: dims.len() }),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}
