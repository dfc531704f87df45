use std::collections::BTreeMap;
use std::fmt;

use rand::RngCore;
use tracing::warn;

use synthtab_core::{ColumnConfig, ColumnType};

use crate::errors::GenerationError;
use crate::faker_rs::{FakerKind, LocaleKey};

pub mod faker_rs;
pub mod primitives;

/// Generated value for a column.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl GeneratedValue {
    /// Render for CSV; floats honour the producing column's precision.
    pub fn to_csv(&self, precision: Option<u32>) -> String {
        match self {
            GeneratedValue::Bool(value) => value.to_string(),
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Float(value) => match precision {
                Some(precision) => {
                    let precision = precision as usize;
                    format!("{value:.precision$}")
                }
                None => value.to_string(),
            },
            GeneratedValue::Text(value) => value.clone(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            GeneratedValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Int(value) => Some(*value as f64),
            GeneratedValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Inputs handed to a generator for one column.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub column: &'a ColumnConfig,
    pub rows: usize,
    pub locale: LocaleKey,
}

/// Generation strategy for one column type.
///
/// Implementations must return exactly `ctx.rows` values and must not
/// re-validate the column; configurations arrive already validated.
pub trait ColumnGenerator: Send + Sync {
    fn column_type(&self) -> ColumnType;

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError>;
}

/// Lookup table from column type to its generator.
pub struct GeneratorRegistry {
    generators: BTreeMap<ColumnType, Box<dyn ColumnGenerator>>,
}

impl GeneratorRegistry {
    /// Registry holding the built-in generator for every column type.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for generator in ColumnType::ALL.into_iter().filter_map(builtin_generator) {
            registry.register_generator(generator);
        }
        registry
    }

    pub fn empty() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Register a generator under its column type, returning the one it replaces.
    pub fn register_generator(
        &mut self,
        generator: Box<dyn ColumnGenerator>,
    ) -> Option<Box<dyn ColumnGenerator>> {
        let column_type = generator.column_type();
        let previous = self.generators.insert(column_type, generator);
        if previous.is_some() {
            warn!(column_type = %column_type, "generator replaced");
        }
        previous
    }

    pub fn resolve(&self, column_type: ColumnType) -> Result<&dyn ColumnGenerator, GenerationError> {
        self.generators
            .get(&column_type)
            .map(|generator| generator.as_ref())
            .ok_or(GenerationError::UnknownType(column_type))
    }

    /// Registered column types in canonical order.
    pub fn column_types(&self) -> Vec<ColumnType> {
        self.generators.keys().copied().collect()
    }

    /// Fail on the first taxonomy type without a generator.
    pub fn verify(&self) -> Result<(), GenerationError> {
        for column_type in ColumnType::ALL {
            self.resolve(column_type)?;
        }
        Ok(())
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("column_types", &self.column_types())
            .finish()
    }
}

/// Built-in generator for `column_type`; `None` leaves a gap that
/// `GeneratorRegistry::verify` reports.
fn builtin_generator(column_type: ColumnType) -> Option<Box<dyn ColumnGenerator>> {
    let generator: Box<dyn ColumnGenerator> = match column_type {
        ColumnType::Integer => Box::new(primitives::IntegerGenerator),
        ColumnType::Float => Box::new(primitives::FloatGenerator),
        ColumnType::String => Box::new(primitives::StringGenerator),
        ColumnType::Boolean => Box::new(primitives::BooleanGenerator),
        ColumnType::Price => Box::new(primitives::PriceGenerator),
        ColumnType::CustomId => Box::new(primitives::CustomIdGenerator),
        delegated => {
            let kind = FakerKind::for_column_type(delegated)?;
            Box::new(faker_rs::FakerGenerator::new(delegated, kind))
        }
    };
    Some(generator)
}

pub(crate) fn mismatch(expected: ColumnType, column: &ColumnConfig) -> GenerationError {
    GenerationError::MismatchedConfig {
        expected,
        actual: column.column_type(),
        column: column.name().to_string(),
    }
}
