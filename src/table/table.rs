use arrow::compute::concat_batches;
use arrow::datatypes::{DataType, SchemaRef};
use arrow::record_batch::RecordBatch;

use crate::core::GlimpseError;

/// An immutable in-memory table: ordered rows of named, typed columns.
///
/// Numeric columns are always Float64 (the loader coerces inferred integer
/// columns), text is Utf8, timestamp-like columns keep their inferred arrow
/// type. Missing cells are arrow nulls. Transforms return new tables; a
/// `Table` is never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    batch: RecordBatch,
}

impl Table {
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// Concatenate reader output into a single backing batch.
    pub fn from_batches(schema: &SchemaRef, batches: &[RecordBatch]) -> Result<Self, GlimpseError> {
        let batch = concat_batches(schema, batches)?;
        Ok(Self { batch })
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Names of the Float64 columns, in schema order. These are the only
    /// columns the scenario transform accepts.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .filter(|f| f.data_type() == &DataType::Float64)
            .map(|f| f.name().clone())
            .collect()
    }

    /// First `n` rows as a zero-copy slice of the backing batch.
    pub fn head(&self, n: usize) -> Table {
        let len = n.min(self.batch.num_rows());
        Table {
            batch: self.batch.slice(0, len),
        }
    }
}
