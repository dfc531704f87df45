use rand::RngCore;
use rand::distr::{Bernoulli, Distribution, Uniform};

use synthtab_core::{ColumnParams, ColumnType, PRICE_PRECISION, precision_bounds};

use crate::errors::GenerationError;
use crate::faker_rs::{FakeRsAdapter, FakerKind};
use crate::generators::{ColumnGenerator, GeneratedValue, GeneratorContext, mismatch};

/// Round to `precision` decimal places, ties to even.
///
/// Values too large to scale are returned unchanged.
pub fn round_half_even(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}

/// Uniform float sampling over `[min, max)` followed by rounding.
///
/// Raw draws never reach `max`. Rounded values are clamped to the
/// smallest and largest values at `precision` inside `[min, max]`, so every
/// output is both rounded and in range, and rounding may land on `max`.
#[derive(Debug, Clone, Copy)]
pub struct FloatSampler {
    min: f64,
    precision: u32,
    low: f64,
    high: f64,
    uniform: Option<Uniform<f64>>,
}

impl FloatSampler {
    pub fn new(min: f64, max: f64, precision: u32) -> Result<Self, String> {
        let (low, high) = precision_bounds(min, max, precision)
            .ok_or_else(|| format!("no value with {precision} decimals in [{min}, {max}]"))?;
        // A degenerate range has a single value and no distribution.
        let uniform = if min == max {
            None
        } else {
            Some(Uniform::new(min, max).map_err(|err| err.to_string())?)
        };
        Ok(Self {
            min,
            precision,
            low,
            high,
            uniform,
        })
    }

    /// Unrounded draw from `[min, max)`, or `min` when the range is empty.
    pub fn sample_raw(&self, rng: &mut dyn RngCore) -> f64 {
        match &self.uniform {
            Some(uniform) => uniform.sample(rng),
            None => self.min,
        }
    }

    pub fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        round_half_even(self.sample_raw(rng), self.precision).clamp(self.low, self.high)
    }
}

pub struct IntegerGenerator;

impl ColumnGenerator for IntegerGenerator {
    fn column_type(&self) -> ColumnType {
        ColumnType::Integer
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let ColumnParams::Integer { min, max } = ctx.column.params() else {
            return Err(mismatch(ColumnType::Integer, ctx.column));
        };
        let uniform = Uniform::new_inclusive(*min, *max).map_err(|err| invalid(ctx, err))?;
        Ok((0..ctx.rows)
            .map(|_| GeneratedValue::Int(uniform.sample(rng)))
            .collect())
    }
}

pub struct FloatGenerator;

impl ColumnGenerator for FloatGenerator {
    fn column_type(&self) -> ColumnType {
        ColumnType::Float
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let ColumnParams::Float {
            min,
            max,
            precision,
        } = ctx.column.params()
        else {
            return Err(mismatch(ColumnType::Float, ctx.column));
        };
        let sampler = FloatSampler::new(*min, *max, *precision).map_err(|err| invalid(ctx, err))?;
        Ok((0..ctx.rows)
            .map(|_| GeneratedValue::Float(sampler.sample(rng)))
            .collect())
    }
}

pub struct PriceGenerator;

impl ColumnGenerator for PriceGenerator {
    fn column_type(&self) -> ColumnType {
        ColumnType::Price
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let ColumnParams::Price { min, max } = ctx.column.params() else {
            return Err(mismatch(ColumnType::Price, ctx.column));
        };
        let sampler =
            FloatSampler::new(*min, *max, PRICE_PRECISION).map_err(|err| invalid(ctx, err))?;
        Ok((0..ctx.rows)
            .map(|_| GeneratedValue::Float(sampler.sample(rng)))
            .collect())
    }
}

pub struct StringGenerator;

impl ColumnGenerator for StringGenerator {
    fn column_type(&self) -> ColumnType {
        ColumnType::String
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let ColumnParams::String { max_length } = ctx.column.params() else {
            return Err(mismatch(ColumnType::String, ctx.column));
        };
        Ok((0..ctx.rows)
            .map(|_| {
                let word = FakeRsAdapter::generate_text(FakerKind::Word, ctx.locale, rng);
                GeneratedValue::Text(truncate_chars(&word, *max_length))
            })
            .collect())
    }
}

pub struct BooleanGenerator;

impl ColumnGenerator for BooleanGenerator {
    fn column_type(&self) -> ColumnType {
        ColumnType::Boolean
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let ColumnParams::Boolean { true_probability } = ctx.column.params() else {
            return Err(mismatch(ColumnType::Boolean, ctx.column));
        };
        let bernoulli = Bernoulli::new(*true_probability).map_err(|err| invalid(ctx, err))?;
        Ok((0..ctx.rows)
            .map(|_| GeneratedValue::Bool(bernoulli.sample(rng)))
            .collect())
    }
}

pub struct CustomIdGenerator;

impl ColumnGenerator for CustomIdGenerator {
    fn column_type(&self) -> ColumnType {
        ColumnType::CustomId
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let ColumnParams::CustomId { prefix, digits } = ctx.column.params() else {
            return Err(mismatch(ColumnType::CustomId, ctx.column));
        };
        let upper = 10_u64
            .checked_pow(*digits)
            .ok_or_else(|| invalid(ctx, format!("{digits} digits overflow u64")))?;
        let uniform = Uniform::new(0, upper).map_err(|err| invalid(ctx, err))?;
        let width = *digits as usize;
        Ok((0..ctx.rows)
            .map(|_| {
                let number = uniform.sample(rng);
                GeneratedValue::Text(format!("{prefix}{number:0width$}"))
            })
            .collect())
    }
}

/// Keep at most `max_chars` characters; shorter input is returned as is.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

fn invalid(ctx: &GeneratorContext<'_>, err: impl ToString) -> GenerationError {
    GenerationError::InvalidConfig {
        column: ctx.column.name().to_string(),
        message: err.to_string(),
    }
}
