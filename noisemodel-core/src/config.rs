//! Validated noise model configuration.
//!
//! Holds the shape, row probability, feature ordering and one-cell policy a
//! [`crate::NoiseModel`] runs with, and enforces their invariants whenever a
//! configuration is created or reshaped.

use crate::{Result, error::NoiseModelError, shape::Shape};

/// Seed used for the model RNG unless one is supplied explicitly.
pub const DEFAULT_RNG_SEED: u64 = 0x5EED_CAFE;

/// Immutable configuration shared by every [`crate::NoiseModel`].
///
/// # Examples
/// ```
/// use noisemodel_core::{NoiseConfig, Shape};
///
/// let config = NoiseConfig::new(Shape::new(4, 3)?, 0.5, Vec::new(), false)?;
/// assert_eq!(config.feature_importance(), &[0, 1, 2]);
/// assert_eq!(config.sample_count(), 2);
/// # Ok::<(), noisemodel_core::NoiseModelError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseConfig {
    shape: Shape,
    probability: f64,
    feature_importance: Vec<usize>,
    one_cell: bool,
    rng_seed: u64,
}

impl NoiseConfig {
    /// Validates and creates a configuration.
    ///
    /// An empty `feature_importance` stands for the identity ordering
    /// `[0, 1, .., columns - 1]`.
    ///
    /// # Errors
    /// Returns [`NoiseModelError::InvalidProbability`] when `probability` is
    /// outside `[0, 1]` (or NaN) and
    /// [`NoiseModelError::InvalidFeatureImportance`] when the ordering is not a
    /// permutation of the column indices.
    pub fn new(
        shape: Shape,
        probability: f64,
        feature_importance: Vec<usize>,
        one_cell: bool,
    ) -> Result<Self> {
        validate_probability(probability)?;
        let feature_importance = resolve_feature_importance(shape, feature_importance)?;
        Ok(Self {
            shape,
            probability,
            feature_importance,
            one_cell,
            rng_seed: DEFAULT_RNG_SEED,
        })
    }

    /// Overrides the seed used for the model RNG.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Returns the configured dataset shape.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the fraction of rows selected for corruption.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Returns the column ordering, most important first.
    #[must_use]
    pub fn feature_importance(&self) -> &[usize] {
        &self.feature_importance
    }

    /// Returns whether strategies should corrupt at most one cell per row.
    #[must_use]
    pub const fn one_cell(&self) -> bool {
        self.one_cell
    }

    /// Returns the seed the model RNG starts from.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Number of rows corrupted per application: `round(rows × probability)`,
    /// rounding halves away from zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "probability is validated to [0, 1] so the product is a non-negative row count"
    )]
    pub fn sample_count(&self) -> usize {
        let rows = self.shape.rows();
        let scaled = (rows as f64 * self.probability).round();
        (scaled as usize).min(rows)
    }

    /// Copies the configuration with a new shape and feature ordering,
    /// re-validating both. Probability is carried over unchanged.
    pub(crate) fn reshaped(&self, shape: Shape, feature_importance: Vec<usize>) -> Result<Self> {
        let feature_importance = resolve_feature_importance(shape, feature_importance)?;
        Ok(Self {
            shape,
            feature_importance,
            ..self.clone()
        })
    }
}

fn validate_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(NoiseModelError::InvalidProbability { got: probability })
    }
}

fn resolve_feature_importance(shape: Shape, feature_importance: Vec<usize>) -> Result<Vec<usize>> {
    let columns = shape.columns();
    if feature_importance.is_empty() {
        return Ok((0..columns).collect());
    }
    let mut sorted = feature_importance.clone();
    sorted.sort_unstable();
    if sorted.into_iter().eq(0..columns) {
        Ok(feature_importance)
    } else {
        Err(NoiseModelError::InvalidFeatureImportance {
            got: feature_importance,
            columns,
        })
    }
}
