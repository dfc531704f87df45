use std::path::Path;

use serde::{Deserialize, Serialize};

use synthtab_core::{DEFAULT_NUM_ROWS, TableSchema, TableSpec};
use synthtab_generate::{GenerateOptions, LocaleKey};

use super::{ConfigError, ConfigResult};

/// Row ceiling applied by the CLI unless `--max-rows` says otherwise.
pub const DEFAULT_MAX_ROWS: usize = 100_000;

/// On-disk schema file: a table spec plus optional run settings.
///
/// ```toml
/// rows = 100
/// seed = 42
/// locale = "pt_BR"
///
/// [[columns]]
/// name = "Age"
/// type = "integer"
/// min = 18
/// max = 65
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<LocaleKey>,
    #[serde(flatten)]
    pub table: TableSpec,
}

/// Command-line values that take precedence over the schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOverrides {
    pub rows: Option<usize>,
    pub seed: Option<u64>,
    pub locale: Option<LocaleKey>,
    pub max_rows: usize,
}

impl Default for GenerateOverrides {
    fn default() -> Self {
        Self {
            rows: None,
            seed: None,
            locale: None,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// A validated schema and the options to generate it with.
#[derive(Debug, Clone)]
pub struct ResolvedRun {
    pub schema: TableSchema,
    pub options: GenerateOptions,
}

impl SchemaFile {
    /// Load TOML, or JSON when the extension is `.json`.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        if is_json(path) {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Merge overrides, enforce the row ceiling and validate every column.
    pub fn resolve(self, overrides: &GenerateOverrides) -> ConfigResult<ResolvedRun> {
        let rows = overrides
            .rows
            .or(self.table.rows)
            .unwrap_or(DEFAULT_NUM_ROWS);
        if rows > overrides.max_rows {
            return Err(ConfigError::RowLimit {
                rows,
                max: overrides.max_rows,
            });
        }

        let schema = TableSchema::from_spec(TableSpec {
            rows: Some(rows),
            columns: self.table.columns,
        })?;
        let options = GenerateOptions {
            seed: overrides.seed.or(self.seed),
            locale: overrides.locale.or(self.locale).unwrap_or_default(),
        };
        Ok(ResolvedRun { schema, options })
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
