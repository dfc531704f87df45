use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use synthtab_core::{ColumnConfig, ColumnParams, PRICE_PRECISION, TableSchema};

use crate::errors::GenerationError;
use crate::generators::{GeneratorContext, GeneratorRegistry};
use crate::model::{GenerateOptions, GeneratedColumn, GeneratedTable, GenerationReport};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub table: GeneratedTable,
    pub report: GenerationReport,
}

/// Turns a `TableSchema` into a `GeneratedTable`, column by column.
#[derive(Debug)]
pub struct GenerationEngine {
    options: GenerateOptions,
    registry: GeneratorRegistry,
}

impl GenerationEngine {
    /// Engine over the built-in generators.
    pub fn new(options: GenerateOptions) -> Result<Self, GenerationError> {
        Self::with_registry(options, GeneratorRegistry::new())
    }

    /// Engine over a caller-assembled registry; it must cover every column type.
    pub fn with_registry(
        options: GenerateOptions,
        registry: GeneratorRegistry,
    ) -> Result<Self, GenerationError> {
        registry.verify()?;
        Ok(Self { options, registry })
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    pub fn generate(&self, schema: &TableSchema) -> Result<GeneratedTable, GenerationError> {
        self.run(schema).map(|result| result.table)
    }

    /// Generate every column in schema order.
    ///
    /// Any column failure aborts the run; no partial table is returned.
    pub fn run(&self, schema: &TableSchema) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().to_rfc3339();
        let mut report = GenerationReport::new(run_id.clone(), started_at, &self.options);

        info!(
            run_id = %run_id,
            columns = schema.len(),
            rows = schema.num_rows(),
            seed = self.options.seed,
            locale = %self.options.locale,
            "generation started"
        );

        let rows = schema.num_rows();
        let mut columns = Vec::with_capacity(schema.len());
        for column in schema.list() {
            match self.generate_column(column, rows) {
                Ok(generated) => {
                    report.record_generator_usage(column.column_type());
                    columns.push(generated);
                }
                Err(err) => {
                    warn!(
                        run_id = %run_id,
                        column = %column.name(),
                        error = %err,
                        "generation failed"
                    );
                    return Err(err);
                }
            }
        }

        let table = GeneratedTable::from_columns(columns, rows);
        report.rows = table.num_rows();
        report.columns = table.num_columns();
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            rows = report.rows,
            columns = report.columns,
            duration_ms = report.duration_ms,
            "generation completed"
        );
        Ok(GenerationResult { table, report })
    }

    fn generate_column(
        &self,
        column: &ColumnConfig,
        rows: usize,
    ) -> Result<GeneratedColumn, GenerationError> {
        let column_type = column.column_type();
        let generator = self.registry.resolve(column_type)?;
        let ctx = GeneratorContext {
            column,
            rows,
            locale: self.options.locale,
        };
        let mut rng = self.column_rng(column.name());
        let column_start = Instant::now();
        let values = generator.generate(&ctx, &mut rng)?;
        if values.len() != rows {
            return Err(GenerationError::RowCountMismatch {
                column: column.name().to_string(),
                expected: rows,
                actual: values.len(),
            });
        }

        debug!(
            column = %column.name(),
            column_type = %column_type,
            rows,
            duration_ms = column_start.elapsed().as_millis() as u64,
            "column generated"
        );
        Ok(GeneratedColumn {
            name: column.name().to_string(),
            column_type,
            precision: float_precision(column.params()),
            values,
        })
    }

    fn column_rng(&self, column_name: &str) -> ChaCha8Rng {
        match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(hash_seed(seed, column_name)),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

/// Generation straight from a schema.
pub trait GenerateTable {
    /// Generate with default options (unseeded, `en_US`).
    fn generate(&self) -> Result<GeneratedTable, GenerationError>;

    fn generate_with(&self, options: GenerateOptions) -> Result<GeneratedTable, GenerationError>;
}

impl GenerateTable for TableSchema {
    fn generate(&self) -> Result<GeneratedTable, GenerationError> {
        self.generate_with(GenerateOptions::default())
    }

    fn generate_with(&self, options: GenerateOptions) -> Result<GeneratedTable, GenerationError> {
        GenerationEngine::new(options)?.generate(self)
    }
}

fn float_precision(params: &ColumnParams) -> Option<u32> {
    match params {
        ColumnParams::Float { precision, .. } => Some(*precision),
        ColumnParams::Price { .. } => Some(PRICE_PRECISION),
        _ => None,
    }
}

/// FNV-1a over the column name, keyed by the run seed.
fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
