//! Property tests for row sampling and reassembly.

use proptest::prelude::*;
use test_strategy::Arbitrary;

use super::NoiseModel;
use crate::{
    builder::NoiseConfigBuilder,
    dataset::{Cell, Dataset},
    test_utils::{GridDataset, ZeroFill, suite_proptest_config},
};

/// Randomised noise model scenario over a sequential grid.
#[derive(Clone, Debug, Arbitrary)]
struct Scenario {
    #[strategy(1_usize..=24)]
    rows: usize,
    #[strategy(1_usize..=6)]
    columns: usize,
    #[strategy(0.0_f64..=1.0)]
    probability: f64,
    #[strategy(Just((0..#columns).collect::<Vec<usize>>()).prop_shuffle())]
    feature_importance: Vec<usize>,
    one_cell: bool,
    seed: u64,
}

impl Scenario {
    fn model(&self) -> NoiseModel<ZeroFill> {
        let config = NoiseConfigBuilder::new(self.rows, self.columns)
            .with_probability(self.probability)
            .with_feature_importance(self.feature_importance.clone())
            .with_one_cell(self.one_cell)
            .with_rng_seed(self.seed)
            .build()
            .expect("generated configuration must be valid");
        NoiseModel::new(config, ZeroFill::default())
    }

    fn grid(&self) -> GridDataset {
        GridDataset::sequential("grid", self.rows, self.columns)
    }
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn apply_preserves_shape_and_partitions_rows(scenario: Scenario) {
        let grid = scenario.grid();
        let mut model = scenario.model();
        let expected = model.config().sample_count();

        let outcome = model.apply(&grid, false).expect("apply must succeed");

        prop_assert_eq!(outcome.corrupted.dimensions(), grid.dimensions());
        prop_assert_eq!(outcome.sampled.sample_count(), expected);
        prop_assert_eq!(outcome.sampled.rows(), scenario.rows);

        let mut covered: Vec<usize> = outcome
            .sampled
            .corrupted()
            .iter()
            .chain(outcome.sampled.clean())
            .copied()
            .collect();
        covered.sort_unstable();
        prop_assert_eq!(covered, (0..scenario.rows).collect::<Vec<_>>());
    }

    #[test]
    fn clean_rows_are_left_untouched(scenario: Scenario) {
        let grid = scenario.grid();
        let mut model = scenario.model();

        let outcome = model.apply(&grid, false).expect("apply must succeed");

        for &row in outcome.sampled.clean() {
            prop_assert_eq!(outcome.corrupted.row(row), grid.row(row));
        }
        prop_assert_eq!(outcome.original, &grid);
    }

    #[test]
    fn corrupted_rows_follow_the_cell_policy(scenario: Scenario) {
        let grid = scenario.grid();
        let mut model = scenario.model();
        let target = scenario.feature_importance[0];

        let outcome = model.apply(&grid, false).expect("apply must succeed");

        for &row in outcome.sampled.corrupted() {
            for (column, cell) in outcome.corrupted.row(row).iter().enumerate() {
                if scenario.one_cell && column != target {
                    prop_assert_eq!(cell, &grid.row(row)[column]);
                } else {
                    prop_assert_eq!(cell, &Cell::Int(0));
                }
            }
        }
    }

    #[test]
    fn sample_count_is_rounded_fraction_of_rows(scenario: Scenario) {
        let model = scenario.model();
        let count = model.config().sample_count();
        #[expect(
            clippy::cast_precision_loss,
            clippy::float_arithmetic,
            reason = "row counts are small enough to be exact in f64"
        )]
        let exact = scenario.rows as f64 * scenario.probability;
        prop_assert!(count <= scenario.rows);
        #[expect(
            clippy::cast_precision_loss,
            clippy::float_arithmetic,
            reason = "row counts are small enough to be exact in f64"
        )]
        let error = (count as f64 - exact).abs();
        prop_assert!(error <= 0.5, "count {} too far from {}", count, exact);
    }
}
