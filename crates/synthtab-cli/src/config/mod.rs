mod atomic;
mod output;
mod schema_file;

pub use atomic::{write_bytes_atomic, write_json_atomic};
pub use output::{DEFAULT_OUTPUT_FILE, OutputTarget};
pub use schema_file::{DEFAULT_MAX_ROWS, GenerateOverrides, ResolvedRun, SchemaFile};

use std::io;

use thiserror::Error;

use synthtab_core::SchemaError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("{rows} rows requested, limit is {max}")]
    RowLimit { rows: usize, max: usize },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
