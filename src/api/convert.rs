use arrow::array::{
    Array, BooleanArray, Date32Array, Float64Array, StringArray, TimestampMicrosecondArray,
    TimestampMillisecondArray, TimestampNanosecondArray, TimestampSecondArray,
};
use arrow::datatypes::{DataType, TimeUnit};
use chrono::DateTime;
use serde::Serialize;
use serde_json::Value;

use crate::core::GlimpseError;
use crate::table::Table;

/// Columnar JSON rendering of (the head of) a table. Column order follows
/// the schema; missing cells serialize as JSON null, timestamps as RFC 3339
/// strings.
#[derive(Debug, Serialize)]
pub struct TablePreview {
    pub num_rows: usize,
    pub columns: Vec<ColumnData>,
}

#[derive(Debug, Serialize)]
pub struct ColumnData {
    pub name: String,
    pub dtype: String,
    pub values: Vec<Value>,
}

impl TryFrom<&Table> for TablePreview {
    type Error = GlimpseError;

    fn try_from(table: &Table) -> Result<Self, GlimpseError> {
        let batch = table.batch();
        let schema = batch.schema();

        let mut columns = Vec::with_capacity(batch.num_columns());
        for (i, field) in schema.fields().iter().enumerate() {
            columns.push(ColumnData {
                name: field.name().clone(),
                dtype: dtype_label(field.data_type()),
                values: array_to_json_values(batch.column(i).as_ref())?,
            });
        }

        Ok(TablePreview {
            num_rows: batch.num_rows(),
            columns,
        })
    }
}

fn dtype_label(dtype: &DataType) -> String {
    match dtype {
        DataType::Float64 => "number".to_string(),
        DataType::Utf8 => "text".to_string(),
        DataType::Boolean => "bool".to_string(),
        DataType::Date32 | DataType::Timestamp(_, _) => "timestamp".to_string(),
        other => format!("{other}"),
    }
}

fn array_to_json_values(array: &dyn Array) -> Result<Vec<Value>, GlimpseError> {
    let values = match array.data_type() {
        DataType::Float64 => {
            let arr = downcast::<Float64Array>(array)?;
            collect(arr, |a, i| Value::from(a.value(i)))
        }
        DataType::Utf8 => {
            let arr = downcast::<StringArray>(array)?;
            collect(arr, |a, i| Value::String(a.value(i).to_string()))
        }
        DataType::Boolean => {
            let arr = downcast::<BooleanArray>(array)?;
            collect(arr, |a, i| Value::Bool(a.value(i)))
        }
        DataType::Date32 => {
            let arr = downcast::<Date32Array>(array)?;
            collect(arr, |a, i| {
                a.value_as_date(i)
                    .map(|d| Value::String(d.to_string()))
                    .unwrap_or(Value::Null)
            })
        }
        DataType::Timestamp(unit, _) => timestamps_to_json(array, unit)?,
        other => {
            return Err(GlimpseError::ArrowError(format!(
                "unsupported array type in preview: {other:?}"
            )));
        }
    };
    Ok(values)
}

fn timestamps_to_json(array: &dyn Array, unit: &TimeUnit) -> Result<Vec<Value>, GlimpseError> {
    let values = match unit {
        TimeUnit::Second => {
            let arr = downcast::<TimestampSecondArray>(array)?;
            collect(arr, |a, i| rfc3339(DateTime::from_timestamp(a.value(i), 0)))
        }
        TimeUnit::Millisecond => {
            let arr = downcast::<TimestampMillisecondArray>(array)?;
            collect(arr, |a, i| {
                rfc3339(DateTime::from_timestamp_millis(a.value(i)))
            })
        }
        TimeUnit::Microsecond => {
            let arr = downcast::<TimestampMicrosecondArray>(array)?;
            collect(arr, |a, i| {
                rfc3339(DateTime::from_timestamp_micros(a.value(i)))
            })
        }
        TimeUnit::Nanosecond => {
            let arr = downcast::<TimestampNanosecondArray>(array)?;
            collect(arr, |a, i| {
                rfc3339(Some(DateTime::from_timestamp_nanos(a.value(i))))
            })
        }
    };
    Ok(values)
}

fn downcast<T: Array + 'static>(array: &dyn Array) -> Result<&T, GlimpseError> {
    array.as_any().downcast_ref::<T>().ok_or_else(|| {
        GlimpseError::ArrowError(format!("dtype/array mismatch: {:?}", array.data_type()))
    })
}

fn collect<T: Array>(arr: &T, value: impl Fn(&T, usize) -> Value) -> Vec<Value> {
    (0..arr.len())
        .map(|i| {
            if arr.is_null(i) {
                Value::Null
            } else {
                value(arr, i)
            }
        })
        .collect()
}

fn rfc3339(dt: Option<chrono::DateTime<chrono::Utc>>) -> Value {
    dt.map(|dt| Value::String(dt.to_rfc3339()))
        .unwrap_or(Value::Null)
}
