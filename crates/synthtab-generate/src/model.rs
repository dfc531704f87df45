use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use synthtab_core::ColumnType;

use crate::faker_rs::LocaleKey;
use crate::generators::GeneratedValue;

/// Options for the generation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Seed for reproducible output; each run is freshly seeded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Locale passed to the text synthesis provider.
    #[serde(default)]
    pub locale: LocaleKey,
}

impl GenerateOptions {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_locale(mut self, locale: LocaleKey) -> Self {
        self.locale = locale;
        self
    }
}

/// One generated column: its values plus what is needed to render them.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedColumn {
    pub name: String,
    pub column_type: ColumnType,
    /// Decimal places for float rendering; `None` for non-float columns.
    pub precision: Option<u32>,
    pub values: Vec<GeneratedValue>,
}

impl GeneratedColumn {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Column-major table in schema order.
///
/// Every column holds the same number of values; a table without columns
/// has zero rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedTable {
    columns: Vec<GeneratedColumn>,
    num_rows: usize,
}

impl GeneratedTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Callers guarantee each column holds `num_rows` values.
    pub(crate) fn from_columns(columns: Vec<GeneratedColumn>, num_rows: usize) -> Self {
        let num_rows = if columns.is_empty() { 0 } else { num_rows };
        Self { columns, num_rows }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.name.as_str())
            .collect()
    }

    pub fn column(&self, name: &str) -> Option<&GeneratedColumn> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn columns(&self) -> &[GeneratedColumn] {
        &self.columns
    }

    /// Values of row `index` in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&GeneratedValue>> {
        if index >= self.num_rows {
            return None;
        }
        self.columns
            .iter()
            .map(|column| column.values.get(index))
            .collect()
    }

    /// Row-major iteration.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&GeneratedValue>> + '_ {
        (0..self.num_rows).filter_map(|index| self.row(index))
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: String,
    pub locale: LocaleKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub rows: usize,
    pub columns: usize,
    /// Columns generated per column type tag.
    pub generator_usage: BTreeMap<String, u64>,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, started_at: String, options: &GenerateOptions) -> Self {
        Self {
            run_id,
            started_at,
            locale: options.locale,
            seed: options.seed,
            rows: 0,
            columns: 0,
            generator_usage: BTreeMap::new(),
            duration_ms: 0,
        }
    }

    pub fn record_generator_usage(&mut self, column_type: ColumnType) {
        *self
            .generator_usage
            .entry(column_type.tag().to_string())
            .or_insert(0) += 1;
    }
}
