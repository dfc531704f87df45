use thiserror::Error;

use synthtab_core::ColumnType;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no generator registered for column type '{0}'")]
    UnknownType(ColumnType),
    #[error("generator for '{expected}' cannot handle column '{column}' of type '{actual}'")]
    MismatchedConfig {
        expected: ColumnType,
        actual: ColumnType,
        column: String,
    },
    #[error("column '{column}': {message}")]
    InvalidConfig { column: String, message: String },
    #[error("column '{column}' produced {actual} values, expected {expected}")]
    RowCountMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
