//! Conversion between [`LabeledTable`] and Arrow record batches.
use std::sync::Arc;

use arrow_array::{
    ArrayRef, Float64Array, Int64Array, RecordBatch, StringArray,
    cast::AsArray,
    types::{Float64Type, Int64Type},
};
use arrow_schema::{DataType, Field, Schema};

use crate::{
    column::{Column, ColumnData},
    errors::TableError,
    table::LabeledTable,
};

impl LabeledTable {
    /// Loads a table from a record batch.
    ///
    /// When `label_column` is given, that `Utf8` column supplies the row
    /// labels and is not stored as data; otherwise rows are labelled by
    /// position. Supported column types are `Float64`, `Int64` and `Utf8`.
    ///
    /// # Errors
    /// Returns [`TableError::LabelColumnNotFound`] or
    /// [`TableError::NullLabel`] for an unusable label column,
    /// [`TableError::UnsupportedType`] for any other column type, and the
    /// errors of [`LabeledTable::try_new`].
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use arrow_array::{ArrayRef, Float64Array, RecordBatch, StringArray};
    /// use noisemodel_core::Dataset;
    /// use noisemodel_providers_table::LabeledTable;
    ///
    /// let batch = RecordBatch::try_from_iter([
    ///     ("id", Arc::new(StringArray::from(vec!["a", "b"])) as ArrayRef),
    ///     ("score", Arc::new(Float64Array::from(vec![Some(0.5), None])) as ArrayRef),
    /// ])?;
    /// let table = LabeledTable::try_from_record_batch("scores", &batch, Some("id"))?;
    /// assert_eq!(table.dimensions(), (2, 1));
    /// assert_eq!(table.row_labels(), ["a", "b"]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_record_batch(
        name: impl Into<String>,
        batch: &RecordBatch,
        label_column: Option<&str>,
    ) -> Result<Self, TableError> {
        let schema = batch.schema();
        let label_index = label_column
            .map(|column| {
                schema
                    .index_of(column)
                    .map_err(|_| TableError::LabelColumnNotFound {
                        column: column.to_owned(),
                    })
            })
            .transpose()?;

        let mut columns = Vec::with_capacity(batch.num_columns());
        for (index, (field, array)) in schema.fields().iter().zip(batch.columns()).enumerate() {
            if Some(index) == label_index {
                continue;
            }
            columns.push(Column::new(field.name().as_str(), column_data(field, array)?));
        }

        let Some(label_index) = label_index else {
            return Self::with_positional_labels(name, columns);
        };
        let labels = batch
            .column(label_index)
            .as_string_opt::<i32>()
            .ok_or_else(|| TableError::UnsupportedType {
                column: schema.field(label_index).name().clone(),
                actual: schema.field(label_index).data_type().clone(),
            })?;
        let row_labels = labels
            .iter()
            .enumerate()
            .map(|(row, label)| {
                label
                    .map(str::to_owned)
                    .ok_or(TableError::NullLabel { row })
            })
            .collect::<Result<_, _>>()?;
        Self::try_new(name, row_labels, columns)
    }

    /// Converts the table into a record batch with nullable columns.
    ///
    /// When `label_column` is given the row labels are prepended as a
    /// non-nullable `Utf8` column of that name.
    ///
    /// # Errors
    /// Returns [`TableError::Arrow`] when Arrow rejects the assembled batch.
    pub fn to_record_batch(&self, label_column: Option<&str>) -> Result<RecordBatch, TableError> {
        let mut fields = Vec::with_capacity(self.columns().len() + 1);
        let mut arrays: Vec<ArrayRef> = Vec::with_capacity(self.columns().len() + 1);
        if let Some(label_column) = label_column {
            fields.push(Field::new(label_column, DataType::Utf8, false));
            arrays.push(Arc::new(StringArray::from_iter_values(self.row_labels())));
        }
        for column in self.columns() {
            let (data_type, array): (DataType, ArrayRef) = match column.data() {
                ColumnData::Float64(values) => (
                    DataType::Float64,
                    Arc::new(values.iter().copied().collect::<Float64Array>()),
                ),
                ColumnData::Int64(values) => (
                    DataType::Int64,
                    Arc::new(values.iter().copied().collect::<Int64Array>()),
                ),
                ColumnData::Utf8(values) => (
                    DataType::Utf8,
                    Arc::new(values.iter().map(Option::as_deref).collect::<StringArray>()),
                ),
            };
            fields.push(Field::new(column.name(), data_type, true));
            arrays.push(array);
        }
        Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?)
    }
}

fn column_data(field: &Field, array: &ArrayRef) -> Result<ColumnData, TableError> {
    let unsupported = || TableError::UnsupportedType {
        column: field.name().clone(),
        actual: field.data_type().clone(),
    };
    match field.data_type() {
        DataType::Float64 => {
            let values = array
                .as_primitive_opt::<Float64Type>()
                .ok_or_else(unsupported)?;
            Ok(ColumnData::Float64(values.iter().collect()))
        }
        DataType::Int64 => {
            let values = array
                .as_primitive_opt::<Int64Type>()
                .ok_or_else(unsupported)?;
            Ok(ColumnData::Int64(values.iter().collect()))
        }
        DataType::Utf8 => {
            let values = array.as_string_opt::<i32>().ok_or_else(unsupported)?;
            Ok(ColumnData::Utf8(
                values.iter().map(|value| value.map(str::to_owned)).collect(),
            ))
        }
        _ => Err(unsupported()),
    }
}
