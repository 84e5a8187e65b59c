//! Result types for noise applications.
//!
//! [`RowPartition`] records which rows an application corrupted, and
//! [`CorruptionOutcome`] bundles it with the corrupted and original datasets
//! so harnesses can score cleaning algorithms against the ground truth.

use rand::{Rng, seq::SliceRandom};
use tracing::debug;

use crate::{Result, error::NoiseModelError};

/// Split of a dataset's row indices into a corrupted and a clean set.
///
/// The two sets are disjoint and together cover `0..rows`. Corrupted indices
/// keep the order in which they were drawn, which is also the order the rows
/// are handed to the corruption strategy.
///
/// # Examples
/// ```
/// use noisemodel_core::RowPartition;
///
/// let partition = RowPartition::from_permutation(vec![2, 0, 3, 1], 2)?;
/// assert_eq!(partition.corrupted(), &[2, 0]);
/// assert_eq!(partition.clean(), &[3, 1]);
/// assert_eq!(partition.mask(), vec![true, false, true, false]);
/// # Ok::<(), noisemodel_core::NoiseModelError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowPartition {
    corrupted: Vec<usize>,
    clean: Vec<usize>,
}

impl RowPartition {
    /// Shuffles `0..rows` uniformly and marks the first `sample_count`
    /// indices as corrupted.
    pub(crate) fn sample<R: Rng + ?Sized>(rows: usize, sample_count: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..rows).collect();
        order.shuffle(rng);
        let clean = order.split_off(sample_count.min(rows));
        debug!(rows, sampled = order.len(), "sampled rows for corruption");
        Self {
            corrupted: order,
            clean,
        }
    }

    /// Builds a partition from an explicit row ordering, marking the first
    /// `sample_count` rows as corrupted.
    ///
    /// Useful for replaying a recorded ground-truth mask.
    ///
    /// # Errors
    /// Returns [`NoiseModelError::InvalidPartition`] when `order` is not a
    /// permutation of `0..order.len()` or `sample_count` exceeds its length.
    pub fn from_permutation(mut order: Vec<usize>, sample_count: usize) -> Result<Self> {
        if sample_count > order.len() {
            return Err(NoiseModelError::InvalidPartition {
                reason: format!(
                    "sample count {sample_count} exceeds {} rows",
                    order.len()
                ),
            });
        }
        let mut seen = vec![false; order.len()];
        for &row in &order {
            match seen.get_mut(row) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(NoiseModelError::InvalidPartition {
                        reason: format!("row {row} appears more than once"),
                    });
                }
                None => {
                    return Err(NoiseModelError::InvalidPartition {
                        reason: format!("row {row} is out of range for {} rows", order.len()),
                    });
                }
            }
        }
        let clean = order.split_off(sample_count);
        Ok(Self {
            corrupted: order,
            clean,
        })
    }

    /// Returns the rows selected for corruption, in draw order.
    #[must_use]
    pub fn corrupted(&self) -> &[usize] {
        &self.corrupted
    }

    /// Returns the rows left untouched.
    #[must_use]
    pub fn clean(&self) -> &[usize] {
        &self.clean
    }

    /// Returns the total number of rows covered by the partition.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.corrupted.len() + self.clean.len()
    }

    /// Returns the number of corrupted rows.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.corrupted.len()
    }

    /// Returns whether `row` was selected for corruption.
    #[must_use]
    pub fn is_corrupted(&self, row: usize) -> bool {
        self.corrupted.contains(&row)
    }

    /// Returns a per-row ground-truth mask, `true` where the row was corrupted.
    #[must_use]
    pub fn mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.rows()];
        for &row in &self.corrupted {
            if let Some(slot) = mask.get_mut(row) {
                *slot = true;
            }
        }
        mask
    }

    /// Consumes the partition, returning `(corrupted, clean)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.corrupted, self.clean)
    }
}

/// The result of applying a [`crate::NoiseModel`] to a dataset.
///
/// `original` borrows the input, which is never modified.
#[derive(Debug)]
pub struct CorruptionOutcome<'a, D> {
    /// Dataset with the sampled rows replaced by the strategy's output.
    pub corrupted: D,
    /// The untouched input dataset.
    pub original: &'a D,
    /// Which rows were corrupted.
    pub sampled: RowPartition,
}

impl<'a, D> CorruptionOutcome<'a, D> {
    /// Consumes the outcome, returning `(corrupted, original, sampled)`.
    #[must_use]
    pub fn into_parts(self) -> (D, &'a D, RowPartition) {
        (self.corrupted, self.original, self.sampled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    #[case(7)]
    fn sample_partitions_every_row(#[case] sample_count: usize) {
        let mut rng = SmallRng::seed_from_u64(11);
        let partition = RowPartition::sample(7, sample_count, &mut rng);
        assert_eq!(partition.sample_count(), sample_count);
        assert_eq!(partition.rows(), 7);

        let mut all: Vec<usize> = partition
            .corrupted()
            .iter()
            .chain(partition.clean())
            .copied()
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn sample_clamps_count_to_row_total() {
        let mut rng = SmallRng::seed_from_u64(3);
        let partition = RowPartition::sample(3, 10, &mut rng);
        assert_eq!(partition.sample_count(), 3);
        assert!(partition.clean().is_empty());
    }

    #[test]
    fn sample_is_reproducible_for_a_seed() {
        let first = RowPartition::sample(20, 5, &mut SmallRng::seed_from_u64(42));
        let second = RowPartition::sample(20, 5, &mut SmallRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[rstest]
    #[case::duplicate(vec![0, 0, 2], 1, "appears more than once")]
    #[case::out_of_range(vec![0, 3, 1], 1, "out of range")]
    #[case::count_too_large(vec![0, 1], 3, "exceeds")]
    fn from_permutation_rejects_invalid_input(
        #[case] order: Vec<usize>,
        #[case] sample_count: usize,
        #[case] fragment: &str,
    ) {
        let err = RowPartition::from_permutation(order, sample_count)
            .expect_err("invalid partition must fail");
        match err {
            NoiseModelError::InvalidPartition { reason } => {
                assert!(reason.contains(fragment), "unexpected reason: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn mask_and_membership_agree() {
        let partition =
            RowPartition::from_permutation(vec![4, 1, 0, 2, 3], 2).expect("valid permutation");
        let mask = partition.mask();
        for (row, &flag) in mask.iter().enumerate() {
            assert_eq!(partition.is_corrupted(row), flag);
        }
        assert_eq!(partition.into_parts(), (vec![4, 1], vec![0, 2, 3]));
    }
}
