//! Corruption strategy used by the benchmarks.

use std::sync::Arc;

use noisemodel_core::{Cell, Corruption, Dataset, NoiseConfig, NoiseModelError};
use rand::Rng;

use crate::error::BenchSetupError;

/// Replaces cells with uniform values in `[-magnitude, magnitude)`.
///
/// Only the most important feature is touched under the one-cell policy;
/// otherwise every column of a sampled row is redrawn.
#[derive(Clone, Copy, Debug)]
pub struct Jitter {
    magnitude: f64,
}

impl Jitter {
    /// Creates a strategy drawing replacements from `[-magnitude, magnitude)`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::InvalidFloatParameter`] when `magnitude` is
    /// not strictly positive or the range width overflows.
    #[expect(
        clippy::float_arithmetic,
        reason = "the range width must stay finite for uniform sampling"
    )]
    pub const fn new(magnitude: f64) -> Result<Self, BenchSetupError> {
        if magnitude <= 0.0 || !(magnitude + magnitude).is_finite() {
            return Err(BenchSetupError::InvalidFloatParameter {
                parameter: "magnitude",
            });
        }
        Ok(Self { magnitude })
    }
}

impl Corruption for Jitter {
    fn name(&self) -> &str {
        "jitter"
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the lower bound negates the magnitude"
    )]
    fn corrupt<D: Dataset, R: Rng + ?Sized>(
        &self,
        mut rows: D,
        config: &NoiseConfig,
        rng: &mut R,
    ) -> Result<D, NoiseModelError> {
        let take = if config.one_cell() { 1 } else { usize::MAX };
        for row in 0..rows.n_rows() {
            for &column in config.feature_importance().iter().take(take) {
                let value = rng.gen_range(-self.magnitude..self.magnitude);
                if let Err(error) = rows.set_cell(row, column, Cell::Float(value)) {
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
