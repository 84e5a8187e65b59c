//! Row-sampling noise orchestration.
//!
//! Provides the [`NoiseModel`] entry point, which validates a dataset
//! against its configured shape, samples rows, hands them to a
//! [`Corruption`] strategy and reassembles a dataset of the original shape.

use std::sync::Arc;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, debug, field, instrument, warn};

use crate::{
    Result,
    config::NoiseConfig,
    corruption::Corruption,
    dataset::Dataset,
    error::{DatasetError, NoiseModelError},
    outcome::{CorruptionOutcome, RowPartition},
    shape::Shape,
};

/// A configured corruption pipeline wrapping strategy `S`.
///
/// The model owns its RNG, so [`apply`](Self::apply) takes `&mut self`:
/// applications on one model are serialised by the borrow checker, while
/// independent models share no state. Use
/// [`apply_with_rng`](Self::apply_with_rng) to drive sampling from an
/// external generator through a shared reference.
///
/// # Examples
/// ```
/// use noisemodel_core::{Cell, Corruption, Dataset, DatasetError, NoiseConfigBuilder, NoiseModel, NoiseModelError};
/// use rand::Rng;
///
/// #[derive(Clone)]
/// struct Values(Vec<f64>);
///
/// impl Dataset for Values {
///     fn name(&self) -> &str { "values" }
///     fn n_rows(&self) -> usize { self.0.len() }
///     fn n_columns(&self) -> usize { 1 }
///     fn select_rows(&self, indices: &[usize]) -> Result<Self, DatasetError> {
///         indices
///             .iter()
///             .map(|&index| self.0.get(index).copied().ok_or(DatasetError::OutOfBounds { index }))
///             .collect::<Result<_, _>>()
///             .map(Values)
///     }
///     fn write_rows(&mut self, indices: &[usize], rows: &Self) -> Result<(), DatasetError> {
///         for (&index, value) in indices.iter().zip(&rows.0) {
///             *self.0.get_mut(index).ok_or(DatasetError::OutOfBounds { index })? = *value;
///         }
///         Ok(())
///     }
///     fn cell(&self, row: usize, _: usize) -> Result<Cell, DatasetError> {
///         self.0.get(row).map(|v| Cell::Float(*v)).ok_or(DatasetError::OutOfBounds { index: row })
///     }
///     fn set_cell(&mut self, row: usize, _: usize, value: Cell) -> Result<(), DatasetError> {
///         *self.0.get_mut(row).ok_or(DatasetError::OutOfBounds { index: row })? =
///             value.as_f64().unwrap_or(0.0);
///         Ok(())
///     }
/// }
///
/// #[derive(Clone)]
/// struct Identity;
///
/// impl Corruption for Identity {
///     fn name(&self) -> &str { "identity" }
///     fn corrupt<D: Dataset, R: Rng + ?Sized>(
///         &self,
///         rows: D,
///         _: &noisemodel_core::NoiseConfig,
///         _: &mut R,
///     ) -> Result<D, NoiseModelError> {
///         Ok(rows)
///     }
/// }
///
/// let config = NoiseConfigBuilder::new(4, 1).with_probability(0.5).build()?;
/// let mut model = NoiseModel::new(config, Identity);
/// let data = Values(vec![1.0, 2.0, 3.0, 4.0]);
/// let outcome = model.apply(&data, false)?;
/// assert_eq!(outcome.sampled.sample_count(), 2);
/// assert_eq!(outcome.corrupted.n_rows(), 4);
/// # Ok::<(), NoiseModelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NoiseModel<S> {
    config: NoiseConfig,
    strategy: S,
    rng: SmallRng,
}

impl<S: Corruption> NoiseModel<S> {
    /// Creates a model whose RNG is seeded from [`NoiseConfig::rng_seed`].
    #[must_use]
    pub fn new(config: NoiseConfig, strategy: S) -> Self {
        let rng = SmallRng::seed_from_u64(config.rng_seed());
        Self::with_rng(config, strategy, rng)
    }

    /// Creates a model that samples rows from the supplied RNG.
    #[must_use]
    pub fn with_rng(config: NoiseConfig, strategy: S, rng: SmallRng) -> Self {
        Self {
            config,
            strategy,
            rng,
        }
    }

    /// Returns the model configuration.
    #[must_use]
    pub const fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// Returns the configured shape.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.config.shape()
    }

    /// Returns the configured row probability.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.config.probability()
    }

    /// Returns the column ordering, most important first.
    #[must_use]
    pub fn feature_importance(&self) -> &[usize] {
        self.config.feature_importance()
    }

    /// Returns the one-cell-per-row policy hint.
    #[must_use]
    pub const fn one_cell(&self) -> bool {
        self.config.one_cell()
    }

    /// Returns the wrapped corruption strategy.
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Corrupts a random `round(rows × probability)` subset of `dataset`'s
    /// rows, drawing from the model's own RNG.
    ///
    /// When `cast_to_int` is set every cell of the corrupted output is cast
    /// to an integer representation; datasets that do not support the cast
    /// are rejected before any row is sampled.
    ///
    /// # Errors
    /// Returns [`NoiseModelError::ShapeMismatch`] when the dataset does not
    /// match the configured shape, [`NoiseModelError::Dataset`] when a dataset
    /// operation (including the integer cast) fails, and any error raised by
    /// the strategy, including
    /// [`NoiseModelError::CorruptedShapeMismatch`] when it returns rows of the
    /// wrong shape.
    pub fn apply<'a, D: Dataset>(
        &mut self,
        dataset: &'a D,
        cast_to_int: bool,
    ) -> Result<CorruptionOutcome<'a, D>> {
        let Self {
            config,
            strategy,
            rng,
        } = self;
        sample_and_corrupt(config, strategy, dataset, cast_to_int, rng)
    }

    /// Like [`apply`](Self::apply) but samples from `rng` and leaves the
    /// model untouched.
    ///
    /// # Errors
    /// See [`apply`](Self::apply).
    pub fn apply_with_rng<'a, D: Dataset, R: Rng + ?Sized>(
        &self,
        dataset: &'a D,
        cast_to_int: bool,
        rng: &mut R,
    ) -> Result<CorruptionOutcome<'a, D>> {
        sample_and_corrupt(&self.config, &self.strategy, dataset, cast_to_int, rng)
    }

    /// Corrupts exactly the rows `partition` marks, skipping sampling.
    ///
    /// Lets a harness replay a recorded ground-truth mask. The strategy still
    /// draws from the model's RNG.
    ///
    /// # Errors
    /// Returns [`NoiseModelError::InvalidPartition`] when the partition does
    /// not cover the dataset's rows, plus everything [`apply`](Self::apply)
    /// can return.
    pub fn apply_partition<'a, D: Dataset>(
        &mut self,
        dataset: &'a D,
        partition: RowPartition,
        cast_to_int: bool,
    ) -> Result<CorruptionOutcome<'a, D>> {
        ensure_shape(self.config.shape(), dataset)?;
        ensure_castable(dataset, cast_to_int)?;
        if partition.rows() != dataset.n_rows() {
            return Err(NoiseModelError::InvalidPartition {
                reason: format!(
                    "partition covers {} rows but the dataset has {}",
                    partition.rows(),
                    dataset.n_rows()
                ),
            });
        }
        let Self {
            config,
            strategy,
            rng,
        } = self;
        corrupt_partition(config, strategy, dataset, partition, cast_to_int, rng)
    }
}

impl<S: Corruption + Clone> NoiseModel<S> {
    /// Returns an independent copy of the model adapted to `shape`.
    ///
    /// The strategy, configuration and RNG state are cloned; `shape` and
    /// `feature_importance` (identity when empty) replace the originals and
    /// are re-validated. Probability, the one-cell hint and the RNG seed carry
    /// over. `self` is never modified.
    ///
    /// # Errors
    /// Returns [`NoiseModelError::InvalidFeatureImportance`] when the ordering
    /// is not a permutation of the new column indices.
    ///
    /// # Examples
    /// ```
    /// use noisemodel_core::{Corruption, NoiseConfigBuilder, NoiseModel, Shape};
    ///
    /// #[derive(Clone)]
    /// struct Placeholder;
    /// impl Corruption for Placeholder {
    ///     fn name(&self) -> &str { "placeholder" }
    /// }
    ///
    /// let config = NoiseConfigBuilder::new(4, 3).with_probability(0.25).build()?;
    /// let model = NoiseModel::new(config, Placeholder);
    /// let wider = model.reshape(Shape::new(8, 5)?, Vec::new())?;
    /// assert_eq!(wider.feature_importance(), &[0, 1, 2, 3, 4]);
    /// assert_eq!(wider.probability(), 0.25);
    /// assert!(model.shape().matches(4, 3));
    /// # Ok::<(), noisemodel_core::NoiseModelError>(())
    /// ```
    pub fn reshape(&self, shape: Shape, feature_importance: Vec<usize>) -> Result<Self> {
        let config = self.config.reshaped(shape, feature_importance)?;
        debug!(
            from = %self.config.shape(),
            to = %shape,
            strategy = self.strategy.name(),
            "reshaped noise model"
        );
        Ok(Self {
            config,
            strategy: self.strategy.clone(),
            rng: self.rng.clone(),
        })
    }
}

#[instrument(
    name = "noise.apply",
    err,
    skip_all,
    fields(
        dataset = %dataset.name(),
        rows = dataset.n_rows(),
        columns = dataset.n_columns(),
        probability = config.probability(),
        strategy = %strategy.name(),
        sampled = field::Empty,
    ),
)]
fn sample_and_corrupt<'a, S, D, R>(
    config: &NoiseConfig,
    strategy: &S,
    dataset: &'a D,
    cast_to_int: bool,
    rng: &mut R,
) -> Result<CorruptionOutcome<'a, D>>
where
    S: Corruption,
    D: Dataset,
    R: Rng + ?Sized,
{
    ensure_shape(config.shape(), dataset)?;
    ensure_castable(dataset, cast_to_int)?;
    let partition = RowPartition::sample(dataset.n_rows(), config.sample_count(), rng);
    Span::current().record("sampled", partition.sample_count());
    corrupt_partition(config, strategy, dataset, partition, cast_to_int, rng)
}

fn ensure_shape<D: Dataset>(shape: Shape, dataset: &D) -> Result<()> {
    let (rows, columns) = dataset.dimensions();
    if shape.matches(rows, columns) {
        return Ok(());
    }
    warn!(
        dataset = dataset.name(),
        expected = %shape,
        rows,
        columns,
        "dataset shape does not match the noise model"
    );
    Err(NoiseModelError::ShapeMismatch {
        dataset: Arc::from(dataset.name()),
        expected: shape,
        rows,
        columns,
    })
}

fn ensure_castable<D: Dataset>(dataset: &D, cast_to_int: bool) -> Result<()> {
    if !cast_to_int || dataset.supports_int_cast() {
        return Ok(());
    }
    Err(wrap_dataset_error(
        dataset,
        DatasetError::IntCastUnsupported {
            dataset: Arc::from(dataset.name()),
        },
    ))
}

fn corrupt_partition<'a, S, D, R>(
    config: &NoiseConfig,
    strategy: &S,
    dataset: &'a D,
    partition: RowPartition,
    cast_to_int: bool,
    rng: &mut R,
) -> Result<CorruptionOutcome<'a, D>>
where
    S: Corruption,
    D: Dataset,
    R: Rng + ?Sized,
{
    let selected = dataset
        .select_rows(partition.corrupted())
        .map_err(|error| wrap_dataset_error(dataset, error))?;
    let replaced = strategy.corrupt(selected, config, rng)?;

    let expected = (partition.sample_count(), dataset.n_columns());
    let (rows, columns) = replaced.dimensions();
    if (rows, columns) != expected {
        return Err(NoiseModelError::CorruptedShapeMismatch {
            strategy: Arc::from(strategy.name()),
            expected_rows: expected.0,
            expected_columns: expected.1,
            rows,
            columns,
        });
    }

    let mut corrupted = dataset.clone();
    corrupted
        .write_rows(partition.corrupted(), &replaced)
        .map_err(|error| wrap_dataset_error(dataset, error))?;
    if cast_to_int {
        corrupted
            .cast_to_int()
            .map_err(|error| wrap_dataset_error(dataset, error))?;
    }

    debug!(
        dataset = dataset.name(),
        corrupted = partition.sample_count(),
        clean = partition.clean().len(),
        "noise applied"
    );
    Ok(CorruptionOutcome {
        corrupted,
        original: dataset,
        sampled: partition,
    })
}

fn wrap_dataset_error<D: Dataset>(dataset: &D, error: DatasetError) -> NoiseModelError {
    NoiseModelError::Dataset {
        dataset: Arc::from(dataset.name()),
        error,
    }
}


#[cfg(test)]
mod property;
