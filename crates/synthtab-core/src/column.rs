use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{ColumnFormat, ColumnType};
use crate::validation::{normalize_name, validate_params};

const DEFAULT_INT_MIN: i64 = 0;
const DEFAULT_INT_MAX: i64 = 100;
const DEFAULT_FLOAT_MIN: f64 = 0.0;
const DEFAULT_FLOAT_MAX: f64 = 1.0;
const DEFAULT_FLOAT_PRECISION: u32 = 2;
const DEFAULT_MAX_LENGTH: usize = 20;
const DEFAULT_TRUE_PROBABILITY: f64 = 0.5;
const DEFAULT_PRICE_MIN: f64 = 1.0;
const DEFAULT_PRICE_MAX: f64 = 1000.0;
const DEFAULT_ID_PREFIX: &str = "ID-";
const DEFAULT_ID_DIGITS: u32 = 6;

/// Type-specific parameters; one case per `ColumnType`.
///
/// In schema files the case is selected by the `type` field and every
/// parameter falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnParams {
    Integer {
        #[serde(default = "default_int_min")]
        min: i64,
        #[serde(default = "default_int_max")]
        max: i64,
    },
    Float {
        #[serde(default = "default_float_min")]
        min: f64,
        #[serde(default = "default_float_max")]
        max: f64,
        /// Decimal places kept after rounding.
        #[serde(default = "default_float_precision")]
        precision: u32,
    },
    String {
        #[serde(default = "default_max_length")]
        max_length: usize,
    },
    Boolean {
        #[serde(default = "default_true_probability")]
        true_probability: f64,
    },
    PersonName,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Country,
    City,
    Address,
    Price {
        #[serde(default = "default_price_min")]
        min: f64,
        #[serde(default = "default_price_max")]
        max: f64,
    },
    CustomId {
        #[serde(default = "default_id_prefix")]
        prefix: String,
        #[serde(default = "default_id_digits")]
        digits: u32,
    },
}

impl ColumnParams {
    /// Default parameters for a column type.
    pub fn defaults(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Integer => Self::Integer {
                min: DEFAULT_INT_MIN,
                max: DEFAULT_INT_MAX,
            },
            ColumnType::Float => Self::Float {
                min: DEFAULT_FLOAT_MIN,
                max: DEFAULT_FLOAT_MAX,
                precision: DEFAULT_FLOAT_PRECISION,
            },
            ColumnType::String => Self::String {
                max_length: DEFAULT_MAX_LENGTH,
            },
            ColumnType::Boolean => Self::Boolean {
                true_probability: DEFAULT_TRUE_PROBABILITY,
            },
            ColumnType::PersonName => Self::PersonName,
            ColumnType::FirstName => Self::FirstName,
            ColumnType::LastName => Self::LastName,
            ColumnType::Email => Self::Email,
            ColumnType::PhoneNumber => Self::PhoneNumber,
            ColumnType::Country => Self::Country,
            ColumnType::City => Self::City,
            ColumnType::Address => Self::Address,
            ColumnType::Price => Self::Price {
                min: DEFAULT_PRICE_MIN,
                max: DEFAULT_PRICE_MAX,
            },
            ColumnType::CustomId => Self::CustomId {
                prefix: DEFAULT_ID_PREFIX.to_string(),
                digits: DEFAULT_ID_DIGITS,
            },
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Integer { .. } => ColumnType::Integer,
            Self::Float { .. } => ColumnType::Float,
            Self::String { .. } => ColumnType::String,
            Self::Boolean { .. } => ColumnType::Boolean,
            Self::PersonName => ColumnType::PersonName,
            Self::FirstName => ColumnType::FirstName,
            Self::LastName => ColumnType::LastName,
            Self::Email => ColumnType::Email,
            Self::PhoneNumber => ColumnType::PhoneNumber,
            Self::Country => ColumnType::Country,
            Self::City => ColumnType::City,
            Self::Address => ColumnType::Address,
            Self::Price { .. } => ColumnType::Price,
            Self::CustomId { .. } => ColumnType::CustomId,
        }
    }

    pub fn format(&self) -> ColumnFormat {
        self.column_type().format()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_params(self)
    }
}

impl fmt::Display for ColumnParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer { min, max } => write!(f, "min={min}, max={max}"),
            Self::Float {
                min,
                max,
                precision,
            } => write!(f, "min={min}, max={max}, precision={precision}"),
            Self::String { max_length } => write!(f, "max_length={max_length}"),
            Self::Boolean { true_probability } => {
                write!(f, "true_probability={true_probability}")
            }
            Self::Price { min, max } => write!(f, "min={min:.2}, max={max:.2}"),
            Self::CustomId { prefix, digits } => write!(f, "prefix={prefix:?}, digits={digits}"),
            _ => Ok(()),
        }
    }
}

/// Serializable form of a column: a name plus its tagged parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(flatten)]
    pub params: ColumnParams,
}

/// A validated column configuration.
///
/// Only obtainable through validating constructors, so a value of this
/// type always has a non-empty trimmed name and in-domain parameters.
/// The column type and format are derived from the parameter case and
/// cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColumnSpec", into = "ColumnSpec")]
pub struct ColumnConfig {
    name: String,
    params: ColumnParams,
}

impl ColumnConfig {
    pub fn new(name: &str, params: ColumnParams) -> Result<Self, ValidationError> {
        let name = normalize_name(name)?;
        params.validate()?;
        Ok(Self { name, params })
    }

    /// Column of `column_type` with default parameters.
    pub fn with_defaults(name: &str, column_type: ColumnType) -> Result<Self, ValidationError> {
        Self::new(name, ColumnParams::defaults(column_type))
    }

    pub fn integer(name: &str, min: i64, max: i64) -> Result<Self, ValidationError> {
        Self::new(name, ColumnParams::Integer { min, max })
    }

    pub fn float(name: &str, min: f64, max: f64, precision: u32) -> Result<Self, ValidationError> {
        Self::new(
            name,
            ColumnParams::Float {
                min,
                max,
                precision,
            },
        )
    }

    pub fn string(name: &str, max_length: usize) -> Result<Self, ValidationError> {
        Self::new(name, ColumnParams::String { max_length })
    }

    pub fn boolean(name: &str, true_probability: f64) -> Result<Self, ValidationError> {
        Self::new(name, ColumnParams::Boolean { true_probability })
    }

    pub fn price(name: &str, min: f64, max: f64) -> Result<Self, ValidationError> {
        Self::new(name, ColumnParams::Price { min, max })
    }

    pub fn custom_id(name: &str, prefix: &str, digits: u32) -> Result<Self, ValidationError> {
        Self::new(
            name,
            ColumnParams::CustomId {
                prefix: prefix.to_string(),
                digits,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.params.column_type()
    }

    pub fn format(&self) -> ColumnFormat {
        self.params.format()
    }

    pub fn params(&self) -> &ColumnParams {
        &self.params
    }

    pub fn to_spec(&self) -> ColumnSpec {
        ColumnSpec::from(self.clone())
    }
}

impl fmt::Display for ColumnConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.column_type())
    }
}

impl TryFrom<ColumnSpec> for ColumnConfig {
    type Error = ValidationError;

    fn try_from(spec: ColumnSpec) -> Result<Self, Self::Error> {
        Self::new(&spec.name, spec.params)
    }
}

impl From<ColumnConfig> for ColumnSpec {
    fn from(config: ColumnConfig) -> Self {
        Self {
            name: config.name,
            params: config.params,
        }
    }
}

fn default_int_min() -> i64 {
    DEFAULT_INT_MIN
}

fn default_int_max() -> i64 {
    DEFAULT_INT_MAX
}

fn default_float_min() -> f64 {
    DEFAULT_FLOAT_MIN
}

fn default_float_max() -> f64 {
    DEFAULT_FLOAT_MAX
}

fn default_float_precision() -> u32 {
    DEFAULT_FLOAT_PRECISION
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_true_probability() -> f64 {
    DEFAULT_TRUE_PROBABILITY
}

fn default_price_min() -> f64 {
    DEFAULT_PRICE_MIN
}

fn default_price_max() -> f64 {
    DEFAULT_PRICE_MAX
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

fn default_id_digits() -> u32 {
    DEFAULT_ID_DIGITS
}
