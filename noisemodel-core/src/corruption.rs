//! The pluggable corruption capability.

use std::sync::Arc;

use rand::Rng;

use crate::{Result, config::NoiseConfig, dataset::Dataset, error::NoiseModelError};

/// A corruption strategy applied to the rows a [`crate::NoiseModel`] samples.
///
/// `corrupt` receives a sub-dataset of `R` rows (`R` may be zero) with every
/// column, and must return a dataset of exactly the same shape. It must not
/// assume anything about which positions the rows came from; the model writes
/// them back. Strategies may consult
/// [`NoiseConfig::feature_importance`] and [`NoiseConfig::one_cell`] to decide
/// which cells to alter, and draw randomness from `rng`.
///
/// The provided `corrupt` fails with
/// [`NoiseModelError::CorruptionUnimplemented`]; every concrete strategy is
/// expected to override it.
///
/// # Examples
/// ```
/// use noisemodel_core::{Cell, Corruption, Dataset, NoiseConfig, NoiseModelError};
/// use rand::Rng;
///
/// struct Blank;
///
/// impl Corruption for Blank {
///     fn name(&self) -> &str { "blank" }
///
///     fn corrupt<D: Dataset, R: Rng + ?Sized>(
///         &self,
///         mut rows: D,
///         config: &NoiseConfig,
///         _rng: &mut R,
///     ) -> Result<D, NoiseModelError> {
///         let target = config.feature_importance().first().copied().unwrap_or(0);
///         for row in 0..rows.n_rows() {
///             rows.set_cell(row, target, Cell::Missing)
///                 .map_err(|error| NoiseModelError::Dataset {
///                     dataset: rows.name().into(),
///                     error,
///                 })?;
///         }
///         Ok(rows)
///     }
/// }
///
/// assert_eq!(Blank.name(), "blank");
/// ```
pub trait Corruption {
    /// Returns a human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Transforms `rows` according to the strategy's corruption policy.
    ///
    /// # Errors
    /// The provided implementation always returns
    /// [`NoiseModelError::CorruptionUnimplemented`]. Overrides report their
    /// own failures, typically as [`NoiseModelError::Dataset`].
    fn corrupt<D: Dataset, R: Rng + ?Sized>(
        &self,
        _rows: D,
        _config: &NoiseConfig,
        _rng: &mut R,
    ) -> Result<D> {
        Err(NoiseModelError::CorruptionUnimplemented {
            strategy: Arc::from(self.name()),
        })
    }
}
