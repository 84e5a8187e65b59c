//! Typed, nullable column storage.
use std::fmt;

use noisemodel_core::{Cell, DatasetError};

/// Storage type of a [`Column`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColumnType {
    /// 64-bit floating-point values.
    Float64,
    /// 64-bit signed integers.
    Int64,
    /// UTF-8 strings.
    Utf8,
}

impl ColumnType {
    /// Returns the lower-case type name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Float64 => "float64",
            Self::Int64 => "int64",
            Self::Utf8 => "utf8",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values of a single column; `None` marks a missing value.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    /// Floating-point values.
    Float64(Vec<Option<f64>>),
    /// Integer values.
    Int64(Vec<Option<i64>>),
    /// Text values.
    Utf8(Vec<Option<String>>),
}

impl ColumnData {
    /// Returns the storage type.
    #[must_use]
    pub const fn column_type(&self) -> ColumnType {
        match self {
            Self::Float64(_) => ColumnType::Float64,
            Self::Int64(_) => ColumnType::Int64,
            Self::Utf8(_) => ColumnType::Utf8,
        }
    }

    /// Returns the number of values, missing ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Float64(values) => values.len(),
            Self::Int64(values) => values.len(),
            Self::Utf8(values) => values.len(),
        }
    }

    /// Returns whether the column holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads row `row` as a [`Cell`].
    #[must_use]
    pub fn get(&self, row: usize) -> Option<Cell> {
        match self {
            Self::Float64(values) => values
                .get(row)
                .map(|value| value.map_or(Cell::Missing, Cell::Float)),
            Self::Int64(values) => values
                .get(row)
                .map(|value| value.map_or(Cell::Missing, Cell::Int)),
            Self::Utf8(values) => values
                .get(row)
                .map(|value| value.clone().map_or(Cell::Missing, Cell::Text)),
        }
    }

    pub(crate) fn select(&self, indices: &[usize]) -> Result<Self, DatasetError> {
        fn pick<T: Clone>(values: &[T], indices: &[usize]) -> Result<Vec<T>, DatasetError> {
            indices
                .iter()
                .map(|&index| {
                    values
                        .get(index)
                        .cloned()
                        .ok_or(DatasetError::OutOfBounds { index })
                })
                .collect()
        }
        Ok(match self {
            Self::Float64(values) => Self::Float64(pick(values, indices)?),
            Self::Int64(values) => Self::Int64(pick(values, indices)?),
            Self::Utf8(values) => Self::Utf8(pick(values, indices)?),
        })
    }

    /// Copies `source` into the rows named by `indices`. Callers check types
    /// and bounds first.
    pub(crate) fn write(&mut self, indices: &[usize], source: &Self) {
        fn copy<T: Clone>(target: &mut [T], indices: &[usize], source: &[T]) {
            for (&index, value) in indices.iter().zip(source) {
                if let Some(slot) = target.get_mut(index) {
                    slot.clone_from(value);
                }
            }
        }
        match (self, source) {
            (Self::Float64(target), Self::Float64(source)) => copy(target, indices, source),
            (Self::Int64(target), Self::Int64(source)) => copy(target, indices, source),
            (Self::Utf8(target), Self::Utf8(source)) => copy(target, indices, source),
            _ => {}
        }
    }

    /// Stores `value` at `row`, widening integers written to float columns.
    pub(crate) fn set(&mut self, row: usize, column: usize, value: Cell) -> Result<(), DatasetError> {
        let column_type = self.column_type();
        let mismatch = DatasetError::TypeMismatch {
            column,
            expected: column_type.as_str(),
            actual: value.kind(),
        };
        let out_of_bounds = DatasetError::OutOfBounds { index: row };
        match (self, value) {
            (Self::Float64(values), Cell::Missing) => {
                *values.get_mut(row).ok_or(out_of_bounds)? = None;
            }
            (Self::Float64(values), number @ (Cell::Float(_) | Cell::Int(_))) => {
                *values.get_mut(row).ok_or(out_of_bounds)? = number.as_f64();
            }
            (Self::Int64(values), Cell::Missing) => {
                *values.get_mut(row).ok_or(out_of_bounds)? = None;
            }
            (Self::Int64(values), Cell::Int(number)) => {
                *values.get_mut(row).ok_or(out_of_bounds)? = Some(number);
            }
            (Self::Utf8(values), Cell::Missing) => {
                *values.get_mut(row).ok_or(out_of_bounds)? = None;
            }
            (Self::Utf8(values), Cell::Text(text)) => {
                *values.get_mut(row).ok_or(out_of_bounds)? = Some(text);
            }
            _ => return Err(mismatch),
        }
        Ok(())
    }
}

/// A named column of a [`crate::LabeledTable`].
///
/// # Examples
/// ```
/// use noisemodel_core::Cell;
/// use noisemodel_providers_table::{Column, ColumnType};
///
/// let column = Column::int64("age", [Some(31), None]);
/// assert_eq!(column.column_type(), ColumnType::Int64);
/// assert_eq!(column.data().get(1), Some(Cell::Missing));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Creates a column from raw data.
    #[must_use]
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Creates a floating-point column.
    #[must_use]
    pub fn float64(name: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self::new(name, ColumnData::Float64(values.into_iter().collect()))
    }

    /// Creates an integer column.
    #[must_use]
    pub fn int64(name: impl Into<String>, values: impl IntoIterator<Item = Option<i64>>) -> Self {
        Self::new(name, ColumnData::Int64(values.into_iter().collect()))
    }

    /// Creates a text column.
    #[must_use]
    pub fn utf8<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        Self::new(
            name,
            ColumnData::Utf8(values.into_iter().map(|value| value.map(Into::into)).collect()),
        )
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the storage type.
    #[must_use]
    pub const fn column_type(&self) -> ColumnType {
        self.data.column_type()
    }

    /// Returns the column values.
    #[must_use]
    pub const fn data(&self) -> &ColumnData {
        &self.data
    }

    pub(crate) const fn data_mut(&mut self) -> &mut ColumnData {
        &mut self.data
    }

    pub(crate) fn select(&self, indices: &[usize]) -> Result<Self, DatasetError> {
        Ok(Self {
            name: self.name.clone(),
            data: self.data.select(indices)?,
        })
    }
}
