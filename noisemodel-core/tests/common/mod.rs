use std::sync::Arc;

use noisemodel_core::{Cell, Corruption, Dataset, DatasetError, NoiseConfig, NoiseModelError};
use rand::Rng;

/// Dense numeric matrix used to drive the public API from integration tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl Matrix {
    #[must_use]
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        let columns = rows.first().map_or(0, Vec::len);
        Self { rows, columns }
    }

    #[must_use]
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }
}

impl Dataset for Matrix {
    fn name(&self) -> &str {
        "matrix"
    }

    fn n_rows(&self) -> usize {
        self.rows.len()
    }

    fn n_columns(&self) -> usize {
        self.columns
    }

    fn select_rows(&self, indices: &[usize]) -> Result<Self, DatasetError> {
        let rows = indices
            .iter()
            .map(|&index| {
                self.rows
                    .get(index)
                    .cloned()
                    .ok_or(DatasetError::OutOfBounds { index })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            rows,
            columns: self.columns,
        })
    }

    fn write_rows(&mut self, indices: &[usize], rows: &Self) -> Result<(), DatasetError> {
        if indices.len() != rows.n_rows() {
            return Err(DatasetError::RowCountMismatch {
                expected: indices.len(),
                actual: rows.n_rows(),
            });
        }
        for (&index, row) in indices.iter().zip(&rows.rows) {
            let slot = self
                .rows
                .get_mut(index)
                .ok_or(DatasetError::OutOfBounds { index })?;
            slot.clone_from(row);
        }
        Ok(())
    }

    fn cell(&self, row: usize, column: usize) -> Result<Cell, DatasetError> {
        let values = self
            .rows
            .get(row)
            .ok_or(DatasetError::OutOfBounds { index: row })?;
        values
            .get(column)
            .map(|&value| Cell::Float(value))
            .ok_or(DatasetError::ColumnOutOfBounds { column })
    }

    fn set_cell(&mut self, row: usize, column: usize, value: Cell) -> Result<(), DatasetError> {
        let number = value.as_f64().ok_or(DatasetError::TypeMismatch {
            column,
            expected: "float",
            actual: value.kind(),
        })?;
        let values = self
            .rows
            .get_mut(row)
            .ok_or(DatasetError::OutOfBounds { index: row })?;
        let slot = values
            .get_mut(column)
            .ok_or(DatasetError::ColumnOutOfBounds { column })?;
        *slot = number;
        Ok(())
    }
}

/// Overwrites every cell it receives with `-1.0`.
#[derive(Clone)]
pub struct Sentinel;

impl Corruption for Sentinel {
    fn name(&self) -> &str {
        "sentinel"
    }

    fn corrupt<D: Dataset, R: Rng + ?Sized>(
        &self,
        mut rows: D,
        _config: &NoiseConfig,
        _rng: &mut R,
    ) -> Result<D, NoiseModelError> {
        for row in 0..rows.n_rows() {
            for column in 0..rows.n_columns() {
                if let Err(error) = rows.set_cell(row, column, Cell::Float(-1.0)) {
                    return Err(NoiseModelError::Dataset {
                        dataset: Arc::from(rows.name()),
                        error,
                    });
                }
            }
        }
        Ok(rows)
    }
}

/// Writes a missing value, which numeric matrices reject.
#[derive(Clone)]
pub struct Blank;

impl Corruption for Blank {
    fn name(&self) -> &str {
        "blank"
    }

    fn corrupt<D: Dataset, R: Rng + ?Sized>(
        &self,
        mut rows: D,
        _config: &NoiseConfig,
        _rng: &mut R,
    ) -> Result<D, NoiseModelError> {
        for row in 0..rows.n_rows() {
            if let Err(error) = rows.set_cell(row, 0, Cell::Missing) {
                return Err(NoiseModelError::Dataset {
                    dataset: Arc::from(rows.name()),
                    error,
                });
            }
        }
        Ok(rows)
    }
}

/// Strategy relying on the provided `corrupt`.
#[derive(Clone)]
pub struct Unimplemented;

impl Corruption for Unimplemented {
    fn name(&self) -> &str {
        "unimplemented"
    }
}
