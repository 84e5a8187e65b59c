//! Row-major `f64` matrix implementing [`Dataset`].
use arrow_array::FixedSizeListArray;
use noisemodel_core::{Cell, Dataset, DatasetError};

use crate::{
    errors::DenseMatrixError,
    ingest::{copy_list_values, validate_fixed_size_list},
};

/// Homogeneous numeric matrix backed by a contiguous row-major buffer.
///
/// Cells read back as [`Cell::Float`] until [`Dataset::cast_to_int`] has run,
/// after which they read back as [`Cell::Int`].
///
/// # Examples
/// ```
/// use noisemodel_core::{Cell, Dataset};
/// use noisemodel_providers_dense::DenseMatrix;
///
/// let mut matrix = DenseMatrix::try_new("demo", vec![vec![1.5, -2.5], vec![3.0, 4.9]])?;
/// assert_eq!(matrix.dimensions(), (2, 2));
/// matrix.cast_to_int()?;
/// assert_eq!(matrix.cell(0, 1)?, Cell::Int(-2));
/// assert_eq!(matrix.cell(1, 1)?, Cell::Int(4));
/// # Ok::<(), noisemodel_core::DatasetError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    name: String,
    rows: usize,
    columns: usize,
    values: Vec<f64>,
    integral: bool,
}

impl DenseMatrix {
    /// Builds a matrix from rows of equal length.
    ///
    /// # Errors
    /// Returns [`DatasetError::EmptyData`] when `data` is empty,
    /// [`DatasetError::ZeroDimension`] when the rows have no columns and
    /// [`DatasetError::RowLengthMismatch`] when a row differs in length from
    /// the first.
    pub fn try_new(name: impl Into<String>, data: Vec<Vec<f64>>) -> Result<Self, DatasetError> {
        let Some(first) = data.first() else {
            return Err(DatasetError::EmptyData);
        };
        let columns = first.len();
        if columns == 0 {
            return Err(DatasetError::ZeroDimension);
        }
        if let Some((row, values)) = data
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != columns)
        {
            return Err(DatasetError::RowLengthMismatch {
                row,
                expected: columns,
                actual: values.len(),
            });
        }
        let rows = data.len();
        Ok(Self {
            name: name.into(),
            rows,
            columns,
            values: data.into_iter().flatten().collect(),
            integral: false,
        })
    }

    /// Builds a matrix from a flat row-major buffer.
    ///
    /// # Errors
    /// Returns [`DatasetError::ZeroDimension`] when `columns` is zero,
    /// [`DatasetError::EmptyData`] when `values` is empty and
    /// [`DatasetError::RowLengthMismatch`] when the final row is incomplete.
    pub fn from_row_major(
        name: impl Into<String>,
        columns: usize,
        values: Vec<f64>,
    ) -> Result<Self, DatasetError> {
        if columns == 0 {
            return Err(DatasetError::ZeroDimension);
        }
        if values.is_empty() {
            return Err(DatasetError::EmptyData);
        }
        let chunks = values.chunks_exact(columns);
        let remainder = chunks.remainder().len();
        let rows = chunks.len();
        if remainder != 0 {
            return Err(DatasetError::RowLengthMismatch {
                row: rows,
                expected: columns,
                actual: remainder,
            });
        }
        Ok(Self {
            name: name.into(),
            rows,
            columns,
            values,
            integral: false,
        })
    }

    /// Loads a matrix from an Arrow `FixedSizeList<Float64, D>` array.
    ///
    /// # Errors
    /// Returns [`DenseMatrixError`] when the child type is not `Float64`, a
    /// row or value is null, or the array holds no rows or zero-width rows.
    pub fn try_from_fixed_size_list(
        name: impl Into<String>,
        array: &FixedSizeListArray,
    ) -> Result<Self, DenseMatrixError> {
        let dimension = validate_fixed_size_list(array)?;
        let mut values = Vec::new();
        copy_list_values(array, dimension, &mut values)?;
        Ok(Self::from_row_major(name, dimension, values)?)
    }

    /// Returns the row-major values.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.values
    }

    /// Returns row `index`, if present.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.values.chunks_exact(self.columns).nth(index)
    }

    /// Returns whether the values have been cast to integers.
    #[must_use]
    pub const fn is_integral(&self) -> bool {
        self.integral
    }

    fn offset(&self, row: usize, column: usize) -> Result<usize, DatasetError> {
        if row >= self.rows {
            return Err(DatasetError::OutOfBounds { index: row });
        }
        if column >= self.columns {
            return Err(DatasetError::ColumnOutOfBounds { column });
        }
        row.checked_mul(self.columns)
            .and_then(|start| start.checked_add(column))
            .ok_or(DatasetError::OutOfBounds { index: row })
    }

    const fn locate(&self, position: usize) -> (usize, usize) {
        (
            position.div_euclid(self.columns),
            position.rem_euclid(self.columns),
        )
    }
}

impl Dataset for DenseMatrix {
    fn name(&self) -> &str {
        &self.name
    }

    fn n_rows(&self) -> usize {
        self.rows
    }

    fn n_columns(&self) -> usize {
        self.columns
    }

    fn select_rows(&self, indices: &[usize]) -> Result<Self, DatasetError> {
        let mut values = Vec::with_capacity(indices.len().saturating_mul(self.columns));
        for &index in indices {
            let row = self.row(index).ok_or(DatasetError::OutOfBounds { index })?;
            values.extend_from_slice(row);
        }
        Ok(Self {
            name: self.name.clone(),
            rows: indices.len(),
            columns: self.columns,
            values,
            integral: self.integral,
        })
    }

    fn write_rows(&mut self, indices: &[usize], rows: &Self) -> Result<(), DatasetError> {
        if rows.rows != indices.len() {
            return Err(DatasetError::RowCountMismatch {
                expected: indices.len(),
                actual: rows.rows,
            });
        }
        if rows.columns != self.columns {
            return Err(DatasetError::ColumnCountMismatch {
                expected: self.columns,
                actual: rows.columns,
            });
        }
        if let Some(&index) = indices.iter().find(|&&index| index >= self.rows) {
            return Err(DatasetError::OutOfBounds { index });
        }
        let columns = self.columns;
        for (&index, source) in indices.iter().zip(rows.values.chunks_exact(columns)) {
            if let Some(target) = self.values.chunks_exact_mut(columns).nth(index) {
                target.copy_from_slice(source);
            }
        }
        self.integral &= rows.integral;
        Ok(())
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "integral matrices only hold truncated values checked to fit i64"
    )]
    fn cell(&self, row: usize, column: usize) -> Result<Cell, DatasetError> {
        let value = self
            .values
            .get(self.offset(row, column)?)
            .copied()
            .ok_or(DatasetError::OutOfBounds { index: row })?;
        Ok(if self.integral {
            Cell::Int(value as i64)
        } else {
            Cell::Float(value)
        })
    }

    fn set_cell(&mut self, row: usize, column: usize, value: Cell) -> Result<(), DatasetError> {
        let offset = self.offset(row, column)?;
        let number = match value {
            Cell::Float(number) => Some(number),
            Cell::Int(integer) => exact_f64(integer),
            Cell::Missing | Cell::Text(_) => None,
        }
        .ok_or(DatasetError::TypeMismatch {
            column,
            expected: "float",
            actual: value.kind(),
        })?;
        let slot = self
            .values
            .get_mut(offset)
            .ok_or(DatasetError::OutOfBounds { index: row })?;
        *slot = number;
        if matches!(value, Cell::Float(_)) {
            self.integral = false;
        }
        Ok(())
    }

    fn supports_int_cast(&self) -> bool {
        true
    }

    /// Truncates every value towards zero.
    ///
    /// Non-finite values and values outside the `i64` range fail with
    /// [`DatasetError::IntCast`], leaving the matrix unchanged.
    #[expect(
        clippy::cast_precision_loss,
        reason = "bounds are compared in f64, the storage type"
    )]
    fn cast_to_int(&mut self) -> Result<(), DatasetError> {
        let bounds = i64::MIN as f64..(i64::MAX as f64);
        if let Some(position) = self
            .values
            .iter()
            .position(|value| !value.is_finite() || !bounds.contains(&value.trunc()))
        {
            let (row, column) = self.locate(position);
            return Err(DatasetError::IntCast { row, column });
        }
        for value in &mut self.values {
            *value = value.trunc();
        }
        self.integral = true;
        Ok(())
    }
}

/// Widens `value` to `f64` only when the conversion is lossless.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "the widened value is checked by converting it back"
)]
fn exact_f64(value: i64) -> Option<f64> {
    let number = value as f64;
    (number < i64::MAX as f64 && number as i64 == value).then_some(number)
}
