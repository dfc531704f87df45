use crate::column::ColumnParams;
use crate::error::ValidationError;
use crate::types::ColumnType;

/// Highest decimal precision accepted for float columns.
pub const MAX_FLOAT_PRECISION: u32 = 10;
/// Decimal places used for price columns.
pub const PRICE_PRECISION: u32 = 2;
/// Highest digit count accepted for custom ids (10^18 still fits in u64).
pub const MAX_CUSTOM_ID_DIGITS: u32 = 18;
/// Longest custom id prefix, in characters.
pub const MAX_CUSTOM_ID_PREFIX: usize = 32;

/// Scaled values this close to a whole number count as on the grid.
const GRID_TOLERANCE: f64 = 1e-9;

/// Smallest and largest multiples of `10^-precision` within `[min, max]`.
///
/// Returns `None` when the range holds no such value. Bounds too large to
/// scale are returned unchanged.
pub fn precision_bounds(min: f64, max: f64, precision: u32) -> Option<(f64, f64)> {
    let factor = 10_f64.powi(precision as i32);
    let low = snap_to_grid(min, factor, f64::ceil);
    let high = snap_to_grid(max, factor, f64::floor);
    (low <= high).then_some((low, high))
}

fn snap_to_grid(value: f64, factor: f64, direction: fn(f64) -> f64) -> f64 {
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let nearest = scaled.round_ties_even();
    // 0.7 * 10 is 7.000000000000001, which must not ceil to 8.
    let snapped = if (scaled - nearest).abs() <= GRID_TOLERANCE * nearest.abs().max(1.0) {
        nearest
    } else {
        direction(scaled)
    };
    snapped / factor
}

/// Trim a column name and reject it when nothing is left.
pub fn normalize_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Validate type-specific parameters against their domains.
///
/// This checks:
/// - numeric bounds are finite and ordered (`min <= max`)
/// - float precision stays within `MAX_FLOAT_PRECISION`
/// - float and price ranges hold at least one value at their precision
/// - string length, boolean probability, price sign and custom id shape
pub fn validate_params(params: &ColumnParams) -> Result<(), ValidationError> {
    match params {
        ColumnParams::Integer { min, max } => {
            if min > max {
                return Err(ValidationError::InvertedRange {
                    column_type: ColumnType::Integer,
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
            Ok(())
        }
        ColumnParams::Float {
            min,
            max,
            precision,
        } => {
            validate_float_range(ColumnType::Float, *min, *max)?;
            if *precision > MAX_FLOAT_PRECISION {
                return Err(ValidationError::PrecisionTooLarge {
                    precision: *precision,
                    max: MAX_FLOAT_PRECISION,
                });
            }
            validate_grid(ColumnType::Float, *min, *max, *precision)
        }
        ColumnParams::String { max_length } => {
            if *max_length < 1 {
                return Err(ValidationError::MaxLengthTooSmall(*max_length));
            }
            Ok(())
        }
        ColumnParams::Boolean { true_probability } => {
            // NaN fails the range check as well.
            if !(0.0..=1.0).contains(true_probability) {
                return Err(ValidationError::ProbabilityOutOfRange(*true_probability));
            }
            Ok(())
        }
        ColumnParams::Price { min, max } => {
            validate_float_range(ColumnType::Price, *min, *max)?;
            if *min < 0.0 {
                return Err(ValidationError::NegativePrice(*min));
            }
            validate_grid(ColumnType::Price, *min, *max, PRICE_PRECISION)
        }
        ColumnParams::CustomId { prefix, digits } => {
            if *digits < 1 || *digits > MAX_CUSTOM_ID_DIGITS {
                return Err(ValidationError::DigitsOutOfRange {
                    digits: *digits,
                    max: MAX_CUSTOM_ID_DIGITS,
                });
            }
            let len = prefix.chars().count();
            if len > MAX_CUSTOM_ID_PREFIX {
                return Err(ValidationError::PrefixTooLong {
                    len,
                    max: MAX_CUSTOM_ID_PREFIX,
                });
            }
            Ok(())
        }
        ColumnParams::PersonName
        | ColumnParams::FirstName
        | ColumnParams::LastName
        | ColumnParams::Email
        | ColumnParams::PhoneNumber
        | ColumnParams::Country
        | ColumnParams::City
        | ColumnParams::Address => Ok(()),
    }
}

fn validate_float_range(column_type: ColumnType, min: f64, max: f64) -> Result<(), ValidationError> {
    if !min.is_finite() {
        return Err(ValidationError::NonFinite {
            column_type,
            field: "min",
        });
    }
    if !max.is_finite() {
        return Err(ValidationError::NonFinite {
            column_type,
            field: "max",
        });
    }
    if min > max {
        return Err(ValidationError::InvertedRange {
            column_type,
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    if !(max - min).is_finite() {
        return Err(ValidationError::RangeTooWide { column_type });
    }
    Ok(())
}

fn validate_grid(
    column_type: ColumnType,
    min: f64,
    max: f64,
    precision: u32,
) -> Result<(), ValidationError> {
    if precision_bounds(min, max, precision).is_none() {
        return Err(ValidationError::EmptyAtPrecision {
            column_type,
            min: min.to_string(),
            max: max.to_string(),
            precision,
        });
    }
    Ok(())
}
