use arrow::array::{ArrayRef, Float64Array};
use arrow::compute::kernels::numeric::mul;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::core::GlimpseError;
use crate::table::Table;

/// Multiply the selected numeric columns of `table` by `multiplier`.
///
/// Pure: returns a new table with the same schema, row count, and row order.
/// Unselected columns are shared unchanged; null cells stay null. Selecting
/// a nonexistent or non-numeric column fails with `InvalidSelection`, as
/// does a non-finite multiplier. The selection is a set, so listing a
/// column twice scales it once.
pub fn scale(table: &Table, columns: &[&str], multiplier: f64) -> Result<Table, GlimpseError> {
    if !multiplier.is_finite() {
        return Err(GlimpseError::InvalidSelection(format!(
            "multiplier must be finite, got {multiplier}"
        )));
    }

    let schema = table.schema();
    let mut indices: Vec<usize> = Vec::with_capacity(columns.len());
    for name in columns {
        let idx = schema.index_of(name).map_err(|_| {
            GlimpseError::InvalidSelection(format!("column '{name}' does not exist"))
        })?;
        let dtype = schema.field(idx).data_type();
        if dtype != &DataType::Float64 {
            return Err(GlimpseError::InvalidSelection(format!(
                "column '{name}' is not numeric (found {dtype})"
            )));
        }
        if !indices.contains(&idx) {
            indices.push(idx);
        }
    }

    let scalar = Float64Array::new_scalar(multiplier);
    let mut arrays: Vec<ArrayRef> = table.batch().columns().to_vec();
    for idx in indices {
        arrays[idx] = mul(table.batch().column(idx), &scalar)?;
    }

    let batch = RecordBatch::try_new(schema, arrays)?;
    Ok(Table::new(batch))
}
