//! Builder utilities for configuring noise models.
//!
//! Collects raw dimensions and options, then validates them in a fixed order
//! (shape, probability, feature importance) before producing a
//! [`NoiseConfig`].

use tracing::debug;

use crate::{Result, config::DEFAULT_RNG_SEED, config::NoiseConfig, shape::Shape};

/// Configures and constructs [`NoiseConfig`] instances.
///
/// # Examples
/// ```
/// use noisemodel_core::NoiseConfigBuilder;
///
/// let config = NoiseConfigBuilder::new(4, 3)
///     .with_probability(0.5)
///     .with_feature_importance(vec![2, 0, 1])
///     .with_one_cell(true)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(config.shape().rows(), 4);
/// assert_eq!(config.feature_importance(), &[2, 0, 1]);
/// assert!(config.one_cell());
/// ```
#[derive(Debug, Clone)]
pub struct NoiseConfigBuilder {
    rows: usize,
    columns: usize,
    probability: f64,
    feature_importance: Vec<usize>,
    one_cell: bool,
    rng_seed: u64,
}

impl Default for NoiseConfigBuilder {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl NoiseConfigBuilder {
    /// Creates a builder for a `rows × columns` dataset with probability `0`,
    /// identity feature ordering and whole-row corruption.
    ///
    /// # Examples
    /// ```
    /// use noisemodel_core::NoiseConfigBuilder;
    ///
    /// let builder = NoiseConfigBuilder::new(10, 2);
    /// assert_eq!(builder.dimensions(), (10, 2));
    /// assert_eq!(builder.probability(), 0.0);
    /// ```
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            probability: 0.0,
            feature_importance: Vec::new(),
            one_cell: false,
            rng_seed: DEFAULT_RNG_SEED,
        }
    }

    /// Overrides the fraction of rows selected for corruption.
    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Overrides the column ordering. An empty ordering means identity.
    #[must_use]
    pub fn with_feature_importance(mut self, feature_importance: impl Into<Vec<usize>>) -> Self {
        self.feature_importance = feature_importance.into();
        self
    }

    /// Selects the one-cell-per-row policy hint for strategies.
    #[must_use]
    pub fn with_one_cell(mut self, one_cell: bool) -> Self {
        self.one_cell = one_cell;
        self
    }

    /// Seeds the model RNG so row sampling is reproducible.
    ///
    /// # Examples
    /// ```
    /// use noisemodel_core::NoiseConfigBuilder;
    ///
    /// let config = NoiseConfigBuilder::new(3, 1).with_rng_seed(7).build()?;
    /// assert_eq!(config.rng_seed(), 7);
    /// # Ok::<(), noisemodel_core::NoiseModelError>(())
    /// ```
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Returns the configured `(rows, columns)`.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Returns the configured probability.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Validates the configuration and constructs a [`NoiseConfig`].
    ///
    /// # Errors
    /// Returns the first configuration error found, checking shape, then
    /// probability, then feature importance.
    ///
    /// # Examples
    /// ```
    /// use noisemodel_core::{NoiseConfigBuilder, NoiseModelError};
    ///
    /// let err = NoiseConfigBuilder::new(0, 5)
    ///     .with_probability(1.1)
    ///     .build()
    ///     .expect_err("zero rows are invalid");
    /// assert!(matches!(err, NoiseModelError::InvalidShape { rows: 0, columns: 5 }));
    /// ```
    pub fn build(self) -> Result<NoiseConfig> {
        let shape = Shape::new(self.rows, self.columns)?;
        let config = NoiseConfig::new(
            shape,
            self.probability,
            self.feature_importance,
            self.one_cell,
        )?
        .with_rng_seed(self.rng_seed);
        debug!(
            shape = %config.shape(),
            probability = config.probability(),
            one_cell = config.one_cell(),
            "noise configuration validated"
        );
        Ok(config)
    }
}
