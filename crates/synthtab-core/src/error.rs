use thiserror::Error;

use crate::types::ColumnType;

/// A column configuration rejected at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("column name must not be empty")]
    EmptyName,
    #[error("{column_type}: {field} must be a finite number")]
    NonFinite {
        column_type: ColumnType,
        field: &'static str,
    },
    #[error("{column_type}: min ({min}) must be <= max ({max})")]
    InvertedRange {
        column_type: ColumnType,
        min: String,
        max: String,
    },
    #[error("{column_type}: max - min overflows")]
    RangeTooWide { column_type: ColumnType },
    #[error("{column_type}: no value with {precision} decimal places lies within [{min}, {max}]")]
    EmptyAtPrecision {
        column_type: ColumnType,
        min: String,
        max: String,
        precision: u32,
    },
    #[error("float precision {precision} exceeds the maximum of {max} decimal places")]
    PrecisionTooLarge { precision: u32, max: u32 },
    #[error("string max_length must be >= 1, got {0}")]
    MaxLengthTooSmall(usize),
    #[error("true_probability must be within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
    #[error("price bounds must not be negative (min = {0})")]
    NegativePrice(f64),
    #[error("custom id digits must be within 1..={max}, got {digits}")]
    DigitsOutOfRange { digits: u32, max: u32 },
    #[error("custom id prefix must be at most {max} characters, got {len}")]
    PrefixTooLong { len: usize, max: usize },
}

/// Errors raised by `TableSchema` mutations and lookups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("invalid column: {0}")]
    Validation(#[from] ValidationError),
    /// A column at `position` (zero-based) of a table spec failed validation.
    #[error("invalid column #{position} ('{name}'): {source}")]
    InvalidColumn {
        position: usize,
        name: String,
        source: ValidationError,
    },
    #[error("column '{0}' already exists")]
    DuplicateName(String),
    #[error("row count must be >= 1, got {0}")]
    InvalidRowCount(usize),
    #[error("column '{0}' not found")]
    NotFound(String),
}

/// Convenience alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
