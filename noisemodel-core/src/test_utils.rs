//! Shared test utilities for `noisemodel-core`.

use noisemodel_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;
use rand::Rng;

use crate::{
    config::NoiseConfig,
    corruption::Corruption,
    dataset::{Cell, Dataset},
    error::{DatasetError, NoiseModelError},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Builds the proptest configuration for a suite from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestRunProfile::load(default_cases, false).into_config()
}

/// Row-major grid of cells that tracks each row's original position as a
/// label, so tests can check which rows reached a strategy.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GridDataset {
    name: &'static str,
    columns: usize,
    labels: Vec<usize>,
    rows: Vec<Vec<Cell>>,
    castable: bool,
}

impl GridDataset {
    pub(crate) fn from_ints(name: &'static str, rows: &[&[i64]]) -> Self {
        let columns = rows.first().map_or(0, |row| row.len());
        Self {
            name,
            columns,
            labels: (0..rows.len()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|&value| Cell::Int(value)).collect())
                .collect(),
            castable: false,
        }
    }

    /// Builds a `rows × columns` grid whose cell `(r, c)` holds `r * columns + c`.
    pub(crate) fn sequential(name: &'static str, rows: usize, columns: usize) -> Self {
        let data: Vec<Vec<i64>> = (0..rows)
            .map(|row| {
                (0..columns)
                    .map(|column| i64::try_from(row * columns + column).expect("fits in i64"))
                    .collect()
            })
            .collect();
        let borrowed: Vec<&[i64]> = data.iter().map(Vec::as_slice).collect();
        Self::from_ints(name, &borrowed)
    }

    pub(crate) fn with_floats(mut self) -> Self {
        for row in &mut self.rows {
            for cell in row.iter_mut() {
                if let Cell::Int(value) = *cell {
                    *cell = Cell::Float(value as f64 + 0.75);
                }
            }
        }
        self
    }

    pub(crate) fn castable(mut self) -> Self {
        self.castable = true;
        self
    }

    pub(crate) fn row(&self, index: usize) -> &[Cell] {
        &self.rows[index]
    }

    pub(crate) fn labels(&self) -> &[usize] {
        &self.labels
    }
}

impl Dataset for GridDataset {
    fn name(&self) -> &str {
        self.name
    }

    fn n_rows(&self) -> usize {
        self.rows.len()
    }

    fn n_columns(&self) -> usize {
        self.columns
    }

    fn select_rows(&self, indices: &[usize]) -> Result<Self, DatasetError> {
        let mut labels = Vec::with_capacity(indices.len());
        let mut rows = Vec::with_capacity(indices.len());
        for &index in indices {
            let row = self
                .rows
                .get(index)
                .ok_or(DatasetError::OutOfBounds { index })?;
            labels.push(self.labels[index]);
            rows.push(row.clone());
        }
        Ok(Self {
            labels,
            rows,
            ..self.clone()
        })
    }

    fn write_rows(&mut self, indices: &[usize], rows: &Self) -> Result<(), DatasetError> {
        if rows.n_rows() != indices.len() {
            return Err(DatasetError::RowCountMismatch {
                expected: indices.len(),
                actual: rows.n_rows(),
            });
        }
        if rows.columns != self.columns {
            return Err(DatasetError::ColumnCountMismatch {
                expected: self.columns,
                actual: rows.columns,
            });
        }
        if let Some(&index) = indices.iter().find(|&&index| index >= self.rows.len()) {
            return Err(DatasetError::OutOfBounds { index });
        }
        for (&index, row) in indices.iter().zip(&rows.rows) {
            self.rows[index] = row.clone();
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
            .cloned()
            .ok_or(DatasetError::ColumnOutOfBounds { column })
    }

    fn set_cell(&mut self, row: usize, column: usize, value: Cell) -> Result<(), DatasetError> {
        let values = self
            .rows
            .get_mut(row)
            .ok_or(DatasetError::OutOfBounds { index: row })?;
        let slot = values
            .get_mut(column)
            .ok_or(DatasetError::ColumnOutOfBounds { column })?;
        *slot = value;
        Ok(())
    }

    fn supports_int_cast(&self) -> bool {
        self.castable
    }

    fn cast_to_int(&mut self) -> Result<(), DatasetError> {
        if !self.castable {
            return Err(DatasetError::IntCastUnsupported {
                dataset: Arc::from(self.name),
            });
        }
        for (row_index, row) in self.rows.iter_mut().enumerate() {
            for (column, cell) in row.iter_mut().enumerate() {
                let value = cell.as_f64().ok_or(DatasetError::IntCast {
                    row: row_index,
                    column,
                })?;
                *cell = Cell::Int(value.trunc() as i64);
            }
        }
        Ok(())
    }
}

/// Strategy that zeroes whole rows, or only the most important column when
/// the one-cell policy is enabled. Records the first cell of every row it
/// receives before overwriting it.
#[derive(Debug, Clone, Default)]
pub(crate) struct ZeroFill {
    seen: Arc<Mutex<Vec<Cell>>>,
    calls: Arc<AtomicUsize>,
}

impl ZeroFill {
    pub(crate) fn seen(&self) -> Vec<Cell> {
        self.seen.lock().expect("lock poisoned").clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Corruption for ZeroFill {
    fn name(&self) -> &str {
        "zero-fill"
    }

    fn corrupt<D: Dataset, R: Rng + ?Sized>(
        &self,
        mut rows: D,
        config: &NoiseConfig,
        _rng: &mut R,
    ) -> Result<D, NoiseModelError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let wrap = |error, rows: &D| NoiseModelError::Dataset {
            dataset: Arc::from(rows.name()),
            error,
        };
        let columns: Vec<usize> = if config.one_cell() {
            config.feature_importance().iter().take(1).copied().collect()
        } else {
            (0..rows.n_columns()).collect()
        };
        for row in 0..rows.n_rows() {
            let first = rows.cell(row, 0).map_err(|error| wrap(error, &rows))?;
            self.seen.lock().expect("lock poisoned").push(first);
            for &column in &columns {
                rows.set_cell(row, column, Cell::Int(0))
                    .map_err(|error| wrap(error, &rows))?;
            }
        }
        Ok(rows)
    }
}

/// Strategy that drops the last row, violating the shape contract.
#[derive(Clone)]
pub(crate) struct DropLast;

impl Corruption for DropLast {
    fn name(&self) -> &str {
        "drop-last"
    }

    fn corrupt<D: Dataset, R: Rng + ?Sized>(
        &self,
        rows: D,
        _config: &NoiseConfig,
        _rng: &mut R,
    ) -> Result<D, NoiseModelError> {
        let keep: Vec<usize> = (0..rows.n_rows().saturating_sub(1)).collect();
        rows.select_rows(&keep)
            .map_err(|error| NoiseModelError::Dataset {
                dataset: Arc::from(rows.name()),
                error,
            })
    }
}
