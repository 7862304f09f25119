use std::io::{Cursor, Seek};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};

use crate::core::GlimpseError;
use crate::table::Table;

/// Rows sampled for type inference before the full parse.
const INFER_SAMPLE_ROWS: usize = 100;
const BATCH_SIZE: usize = 8192;

/// Parse delimited text (header row required) into a [`Table`].
///
/// Column types are inferred from a sample of the rows; integer columns are
/// coerced to Float64 so every numeric column shares one domain. Malformed
/// input yields `ParseError`.
pub fn load_csv_bytes(bytes: &[u8]) -> Result<Table, GlimpseError> {
    let format = Format::default().with_header(true);

    let mut cursor = Cursor::new(bytes);
    let (inferred, _) = format
        .infer_schema(&mut cursor, Some(INFER_SAMPLE_ROWS))
        .map_err(|e| GlimpseError::ParseError(e.to_string()))?;
    if inferred.fields().is_empty() {
        return Err(GlimpseError::ParseError(
            "input has no columns (empty or missing header row)".to_string(),
        ));
    }
    let schema = coerce_numeric_to_f64(&inferred);

    cursor.rewind()?;
    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .with_batch_size(BATCH_SIZE)
        .build(cursor)
        .map_err(|e| GlimpseError::ParseError(e.to_string()))?;
    let batches: Vec<_> = reader
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| GlimpseError::ParseError(e.to_string()))?;

    Table::from_batches(&schema, &batches)
}

/// Load a repo-relative CSV path, resolved against `root`.
pub fn load_csv_path(root: &Path, path: &str) -> Result<Table, GlimpseError> {
    let resolved = resolve_repo_path(root, path)?;
    let bytes = std::fs::read(&resolved).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GlimpseError::NotFound(path.to_string())
        } else {
            GlimpseError::IoError(format!("reading {}: {e}", resolved.display()))
        }
    })?;
    load_csv_bytes(&bytes)
}

/// Join a repo-relative path onto the data root. Absolute paths and paths
/// with parent components are rejected so a request cannot read outside
/// the root.
pub fn resolve_repo_path(root: &Path, path: &str) -> Result<PathBuf, GlimpseError> {
    let relative = Path::new(path);
    let escapes = relative.is_absolute()
        || relative
            .components()
            .any(|c| matches!(c, Component::ParentDir));
    if escapes {
        return Err(GlimpseError::NotFound(path.to_string()));
    }
    Ok(root.join(relative))
}

fn coerce_numeric_to_f64(inferred: &Schema) -> SchemaRef {
    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|f| {
            if f.data_type().is_numeric() {
                Field::new(f.name(), DataType::Float64, true)
            } else {
                f.as_ref().clone().with_nullable(true)
            }
        })
        .collect();
    Arc::new(Schema::new(fields))
}
