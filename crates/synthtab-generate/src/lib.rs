//! Column generation engine for synthtab.
//!
//! Resolves each column of a `TableSchema` to its registered generator and
//! assembles the values into a `GeneratedTable`, which can be exported as
//! CSV.

pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{GenerateTable, GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use faker_rs::LocaleKey;
pub use generators::{ColumnGenerator, GeneratedValue, GeneratorContext, GeneratorRegistry};
pub use model::{GenerateOptions, GeneratedColumn, GeneratedTable, GenerationReport};
pub use output::{table_to_csv_string, write_table_csv};
