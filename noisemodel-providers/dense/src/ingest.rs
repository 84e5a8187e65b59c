//! Copies `FixedSizeList<Float64, D>` arrays into row-major buffers.
use arrow_array::{Array, FixedSizeListArray, Float64Array};
use arrow_schema::DataType;

use crate::errors::DenseMatrixError;

/// Returns the row width of `array` after checking its child type.
pub(crate) fn validate_fixed_size_list(
    array: &FixedSizeListArray,
) -> Result<usize, DenseMatrixError> {
    let value_type = array.value_type();
    if value_type != DataType::Float64 {
        return Err(DenseMatrixError::InvalidListValueType { actual: value_type });
    }
    usize::try_from(array.value_length()).map_err(|_| DenseMatrixError::InvalidDimension {
        actual: array.value_length(),
    })
}

/// Appends every row of `array` to `out`, rejecting nulls.
pub(crate) fn copy_list_values(
    array: &FixedSizeListArray,
    dimension: usize,
    out: &mut Vec<f64>,
) -> Result<(), DenseMatrixError> {
    let rows = array.len();
    let additional = rows
        .checked_mul(dimension)
        .ok_or(DenseMatrixError::CapacityOverflow { rows, dimension })?;
    out.reserve(additional);
    for row in 0..rows {
        if array.is_null(row) {
            return Err(DenseMatrixError::NullRow { row });
        }
        let values = array.value(row);
        let floats = values
            .as_any()
            .downcast_ref::<Float64Array>()
            .ok_or_else(|| DenseMatrixError::InvalidListValueType {
                actual: values.data_type().clone(),
            })?;
        if let Some(value_index) = (0..floats.len()).find(|&index| floats.is_null(index)) {
            return Err(DenseMatrixError::NullValue { row, value_index });
        }
        out.extend(floats.values().iter().copied());
    }
    Ok(())
}
