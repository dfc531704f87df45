use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::column::{ColumnConfig, ColumnSpec};
use crate::error::{Result, SchemaError};

/// Row count used until a collaborator sets one.
pub const DEFAULT_NUM_ROWS: usize = 10;

/// Serializable table description (schema files).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TableSpec {
    /// Rows to generate; `DEFAULT_NUM_ROWS` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    /// Columns in output order.
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

/// Ordered, name-unique collection of column configurations plus a row count.
///
/// Column order is insertion order and defines output order. Names are
/// compared exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    columns: Vec<ColumnConfig>,
    num_rows: usize,
}

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            num_rows: DEFAULT_NUM_ROWS,
        }
    }
}

impl TableSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from a spec, validating columns in order.
    pub fn from_spec(spec: TableSpec) -> Result<Self> {
        let mut schema = Self::new();
        if let Some(rows) = spec.rows {
            schema.set_num_rows(rows)?;
        }
        for (position, column) in spec.columns.into_iter().enumerate() {
            let name = column.name.clone();
            let config = ColumnConfig::try_from(column).map_err(|source| {
                SchemaError::InvalidColumn {
                    position,
                    name,
                    source,
                }
            })?;
            schema.add(config)?;
        }
        Ok(schema)
    }

    pub fn to_spec(&self) -> TableSpec {
        TableSpec {
            rows: Some(self.num_rows),
            columns: self.columns.iter().map(ColumnConfig::to_spec).collect(),
        }
    }

    /// Append a column; rejects a name that is already present.
    pub fn add(&mut self, config: ColumnConfig) -> Result<()> {
        if self.contains(config.name()) {
            return Err(SchemaError::DuplicateName(config.name().to_string()));
        }
        self.columns.push(config);
        Ok(())
    }

    /// Remove the column named `name`, returning it when present.
    pub fn remove(&mut self, name: &str) -> Option<ColumnConfig> {
        let index = self.columns.iter().position(|column| column.name() == name)?;
        Some(self.columns.remove(index))
    }

    pub fn get(&self, name: &str) -> Result<&ColumnConfig> {
        self.columns
            .iter()
            .find(|column| column.name() == name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name() == name)
    }

    /// Columns in output order.
    pub fn list(&self) -> &[ColumnConfig] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn set_num_rows(&mut self, num_rows: usize) -> Result<()> {
        if num_rows < 1 {
            return Err(SchemaError::InvalidRowCount(num_rows));
        }
        self.num_rows = num_rows;
        Ok(())
    }

    /// Drop every column; the row count is kept.
    pub fn clear(&mut self) {
        self.columns.clear();
    }
}
