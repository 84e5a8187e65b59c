pub(crate) use super::{DenseMatrix, DenseMatrixError};
