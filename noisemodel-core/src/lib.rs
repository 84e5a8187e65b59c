//! Noise model core library.
//!
//! Samples a fraction of a dataset's rows, hands them to a pluggable
//! [`Corruption`] strategy and reassembles a dataset of the original shape,
//! reporting which rows were touched.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod config;
mod corruption;
mod dataset;
mod error;
mod model;
mod outcome;
mod shape;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::NoiseConfigBuilder,
    config::{DEFAULT_RNG_SEED, NoiseConfig},
    corruption::Corruption,
    dataset::{Cell, Dataset},
    error::{DatasetError, DatasetErrorCode, NoiseModelError, NoiseModelErrorCode, Result},
    model::NoiseModel,
    outcome::{CorruptionOutcome, RowPartition},
    shape::Shape,
};
