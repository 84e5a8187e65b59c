//! Row-labelled table of typed columns implementing [`Dataset`].
use std::collections::HashSet;

use noisemodel_core::{Cell, Dataset, DatasetError};

use crate::{column::Column, errors::TableError};

/// Table with row labels and named, typed, nullable columns.
///
/// Row labels and column names travel with the rows through
/// [`Dataset::select_rows`]; [`Dataset::write_rows`] refuses rows whose
/// columns differ in name or type from the destination.
///
/// # Examples
/// ```
/// use noisemodel_core::{Cell, Dataset};
/// use noisemodel_providers_table::{Column, LabeledTable};
///
/// let table = LabeledTable::try_new(
///     "people",
///     vec!["ann".into(), "bob".into(), "cy".into()],
///     vec![
///         Column::utf8("name", [Some("Ann"), Some("Bob"), None]),
///         Column::int64("age", [Some(31), Some(47), Some(22)]),
///     ],
/// )?;
/// let picked = table.select_rows(&[2, 0])?;
/// assert_eq!(picked.row_labels(), ["cy", "ann"]);
/// assert_eq!(picked.cell(0, 0)?, Cell::Missing);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledTable {
    name: String,
    row_labels: Vec<String>,
    columns: Vec<Column>,
}

impl LabeledTable {
    /// Builds a table, checking that every column has one value per label and
    /// that column names are unique.
    ///
    /// # Errors
    /// Returns [`TableError::Dataset`] wrapping [`DatasetError::EmptyData`]
    /// when there are no rows or [`DatasetError::ZeroDimension`] when there are
    /// no columns, [`TableError::ColumnLength`] for a column of the wrong
    /// length and [`TableError::DuplicateColumn`] for a repeated name.
    pub fn try_new(
        name: impl Into<String>,
        row_labels: Vec<String>,
        columns: Vec<Column>,
    ) -> Result<Self, TableError> {
        if row_labels.is_empty() {
            return Err(DatasetError::EmptyData.into());
        }
        if columns.is_empty() {
            return Err(DatasetError::ZeroDimension.into());
        }
        let mut names = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.data().len() != row_labels.len() {
                return Err(TableError::ColumnLength {
                    column: column.name().to_owned(),
                    expected: row_labels.len(),
                    actual: column.data().len(),
                });
            }
            if !names.insert(column.name()) {
                return Err(TableError::DuplicateColumn {
                    column: column.name().to_owned(),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            row_labels,
            columns,
        })
    }

    /// Builds a table labelled `"0"`, `"1"`, … in row order.
    ///
    /// # Errors
    /// See [`try_new`](Self::try_new).
    pub fn with_positional_labels(
        name: impl Into<String>,
        columns: Vec<Column>,
    ) -> Result<Self, TableError> {
        let rows = columns.first().map_or(0, |column| column.data().len());
        let labels = (0..rows).map(|row| row.to_string()).collect();
        Self::try_new(name, labels, columns)
    }

    /// Returns the row labels in row order.
    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Returns the columns in order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column called `name`.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// Returns the position of the row labelled `label`.
    #[must_use]
    pub fn row_position(&self, label: &str) -> Option<usize> {
        self.row_labels.iter().position(|candidate| candidate == label)
    }

    fn check_compatible(&self, rows: &Self) -> Result<(), DatasetError> {
        if rows.columns.len() != self.columns.len() {
            return Err(DatasetError::ColumnCountMismatch {
                expected: self.columns.len(),
                actual: rows.columns.len(),
            });
        }
        for (index, (target, source)) in self.columns.iter().zip(&rows.columns).enumerate() {
            if target.name() != source.name() {
                return Err(DatasetError::ColumnLabelMismatch {
                    column: index,
                    expected: target.name().to_owned(),
                    actual: source.name().to_owned(),
                });
            }
            if target.column_type() != source.column_type() {
                return Err(DatasetError::TypeMismatch {
                    column: index,
                    expected: target.column_type().as_str(),
                    actual: source.column_type().as_str(),
                });
            }
        }
        Ok(())
    }
}

impl Dataset for LabeledTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    fn n_columns(&self) -> usize {
        self.columns.len()
    }

    fn select_rows(&self, indices: &[usize]) -> Result<Self, DatasetError> {
        let row_labels = indices
            .iter()
            .map(|&index| {
                self.row_labels
                    .get(index)
                    .cloned()
                    .ok_or(DatasetError::OutOfBounds { index })
            })
            .collect::<Result<_, _>>()?;
        let columns = self
            .columns
            .iter()
            .map(|column| column.select(indices))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            name: self.name.clone(),
            row_labels,
            columns,
        })
    }

    fn write_rows(&mut self, indices: &[usize], rows: &Self) -> Result<(), DatasetError> {
        if rows.n_rows() != indices.len() {
            return Err(DatasetError::RowCountMismatch {
                expected: indices.len(),
                actual: rows.n_rows(),
            });
        }
        self.check_compatible(rows)?;
        if let Some(&index) = indices.iter().find(|&&index| index >= self.n_rows()) {
            return Err(DatasetError::OutOfBounds { index });
        }
        for (target, source) in self.columns.iter_mut().zip(&rows.columns) {
            target.data_mut().write(indices, source.data());
        }
        Ok(())
    }

    fn cell(&self, row: usize, column: usize) -> Result<Cell, DatasetError> {
        let values = self
            .columns
            .get(column)
            .ok_or(DatasetError::ColumnOutOfBounds { column })?;
        values
            .data()
            .get(row)
            .ok_or(DatasetError::OutOfBounds { index: row })
    }

    fn set_cell(&mut self, row: usize, column: usize, value: Cell) -> Result<(), DatasetError> {
        self.columns
            .get_mut(column)
            .ok_or(DatasetError::ColumnOutOfBounds { column })?
            .data_mut()
            .set(row, column, value)
    }
}
