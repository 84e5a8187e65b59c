//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?` instead of `.expect()`.

use noisemodel_core::{DatasetError, NoiseModelError};
use noisemodel_providers_table::TableError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A synthetic dense matrix could not be built.
    #[error("dense matrix generation failed: {0}")]
    Dataset(#[from] DatasetError),
    /// A synthetic table could not be built.
    #[error("table generation failed: {0}")]
    Table(#[from] TableError),
    /// Noise model configuration or application failed.
    #[error("noise model operation failed: {0}")]
    NoiseModel(#[from] NoiseModelError),
    /// A floating-point parameter was non-finite or out of range.
    #[error("invalid value for floating-point parameter {parameter}")]
    InvalidFloatParameter {
        /// The parameter that failed validation.
        parameter: &'static str,
    },
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
