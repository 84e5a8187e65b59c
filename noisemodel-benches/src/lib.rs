//! Benchmark support crate for noisemodel.
//!
//! Provides synthetic datasets, a representative corruption strategy and
//! parameter types used by the Criterion benchmarks of
//! [`noisemodel_core::NoiseModel::apply`] over the dense and table adapters.

pub mod error;
pub mod params;
pub mod source;
pub mod strategy;
