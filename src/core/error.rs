use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GlimpseError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Arrow error: {0}")]
    ArrowError(String),
    #[error("Cannot parse dataset: {0}")]
    ParseError(String),
    #[error("Dataset not found: {0}")]
    NotFound(String),
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

impl From<std::io::Error> for GlimpseError {
    fn from(err: std::io::Error) -> Self {
        GlimpseError::IoError(err.to_string())
    }
}

impl From<arrow::error::ArrowError> for GlimpseError {
    fn from(err: arrow::error::ArrowError) -> Self {
        GlimpseError::ArrowError(err.to_string())
    }
}
