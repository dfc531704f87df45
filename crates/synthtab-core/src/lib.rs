//! Core contracts for synthtab.
//!
//! This crate defines the column type taxonomy, the validated column
//! configurations and the `TableSchema` aggregate that generation consumes.

pub mod column;
pub mod error;
pub mod schema;
pub mod types;
pub mod validation;

pub use column::{ColumnConfig, ColumnParams, ColumnSpec};
pub use error::{Result, SchemaError, ValidationError};
pub use schema::{DEFAULT_NUM_ROWS, TableSchema, TableSpec};
pub use types::{ColumnFormat, ColumnType, TypeGroup};
pub use validation::{
    MAX_CUSTOM_ID_DIGITS, MAX_CUSTOM_ID_PREFIX, MAX_FLOAT_PRECISION, PRICE_PRECISION,
    normalize_name, precision_bounds, validate_params,
};
