//! Synthetic datasets for benchmarking.
//!
//! Both generators draw the same uniform values for a given configuration, so
//! dense and table benchmarks corrupt identical content.

use noisemodel_providers_dense::DenseMatrix;
use noisemodel_providers_table::{Column, LabeledTable};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Uniform random dataset configuration.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of rows to generate.
    pub rows: usize,
    /// Number of columns per row.
    pub columns: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticConfig {
    fn validate(&self) -> Result<(), BenchSetupError> {
        if self.rows == 0 {
            return Err(BenchSetupError::ZeroValue { context: "rows" });
        }
        if self.columns == 0 {
            return Err(BenchSetupError::ZeroValue { context: "columns" });
        }
        Ok(())
    }

    /// Draws `rows × columns` values in `[-10, 10)` in row-major order.
    fn values(&self) -> Vec<f64> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (0..self.rows.saturating_mul(self.columns))
            .map(|_| rng.gen_range(-10.0..10.0))
            .collect()
    }
}

/// Generates a dense matrix of uniform values.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when either dimension is zero.
pub fn dense_matrix(config: &SyntheticConfig) -> Result<DenseMatrix, BenchSetupError> {
    config.validate()?;
    Ok(DenseMatrix::from_row_major(
        "synthetic",
        config.columns,
        config.values(),
    )?)
}

/// Generates a table of `Float64` columns named `f0`, `f1`, … holding the
/// same values as [`dense_matrix`].
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when either dimension is zero.
pub fn labeled_table(config: &SyntheticConfig) -> Result<LabeledTable, BenchSetupError> {
    config.validate()?;
    let values = config.values();
    let columns = (0..config.columns)
        .map(|column| {
            Column::float64(
                format!("f{column}"),
                values
                    .iter()
                    .skip(column)
                    .step_by(config.columns)
                    .copied()
                    .map(Some),
            )
        })
        .collect();
    Ok(LabeledTable::with_positional_labels("synthetic", columns)?)
}
