//! Benchmark parameter types.

use std::fmt;

/// Parameters for a single `apply` benchmark run.
#[derive(Clone, Debug)]
pub struct ApplyBenchParams {
    /// Number of rows in the dataset.
    pub rows: usize,
    /// Row corruption probability in whole percent.
    pub percent: u8,
}

impl fmt::Display for ApplyBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}%", self.rows, self.percent)
    }
}
