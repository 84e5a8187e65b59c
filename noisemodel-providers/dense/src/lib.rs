//! Dense numeric matrices for the noise model.
//!
//! [`DenseMatrix`] stores homogeneous `f64` values in a contiguous row-major
//! buffer, carries no row or column labels and supports integer casting.

mod errors;
mod ingest;
mod matrix;

pub use errors::DenseMatrixError;
pub use matrix::DenseMatrix;

#[cfg(test)]
mod tests;
