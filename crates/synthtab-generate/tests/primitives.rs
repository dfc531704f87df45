use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use synthtab_core::ColumnConfig;
use synthtab_generate::errors::GenerationError;
use synthtab_generate::faker_rs::LocaleKey;
use synthtab_generate::generators::primitives::{
    BooleanGenerator, CustomIdGenerator, FloatGenerator, FloatSampler, IntegerGenerator,
    PriceGenerator, StringGenerator, round_half_even, truncate_chars,
};
use synthtab_generate::generators::{ColumnGenerator, GeneratedValue, GeneratorContext};

fn run(
    generator: &dyn ColumnGenerator,
    column: &ColumnConfig,
    rows: usize,
    seed: u64,
) -> Result<Vec<GeneratedValue>, GenerationError> {
    let ctx = GeneratorContext {
        column,
        rows,
        locale: LocaleKey::EnUs,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generator.generate(&ctx, &mut rng)
}

fn floats(values: &[GeneratedValue]) -> Vec<f64> {
    values
        .iter()
        .map(|value| value.as_f64().expect("float value"))
        .collect()
}

#[test]
fn integer_values_stay_in_inclusive_range_and_hit_both_bounds() {
    let column = ColumnConfig::integer("Dice", 1, 6).expect("valid column");
    let values = run(&IntegerGenerator, &column, 2000, 7).expect("generate");

    assert_eq!(values.len(), 2000);
    let ints: Vec<i64> = values.iter().map(|v| v.as_i64().expect("int")).collect();
    assert!(ints.iter().all(|v| (1..=6).contains(v)));
    assert!(ints.contains(&1), "lower bound never drawn");
    assert!(ints.contains(&6), "upper bound never drawn");
}

#[test]
fn integer_degenerate_range_is_constant() {
    let column = ColumnConfig::integer("Fixed", -4, -4).expect("valid column");
    let values = run(&IntegerGenerator, &column, 50, 1).expect("generate");
    assert!(values.iter().all(|v| *v == GeneratedValue::Int(-4)));
}

#[test]
fn zero_rows_yield_no_values() {
    let column = ColumnConfig::integer("Age", 0, 10).expect("valid column");
    let values = run(&IntegerGenerator, &column, 0, 1).expect("generate");
    assert!(values.is_empty());
}

#[test]
fn float_values_are_rounded_and_within_range() {
    let column = ColumnConfig::float("Score", -2.5, 7.25, 3).expect("valid column");
    let values = floats(&run(&FloatGenerator, &column, 1000, 11).expect("generate"));

    for value in values {
        assert!((-2.5..=7.25).contains(&value), "{value} out of range");
        let scaled = value * 1000.0;
        assert!((scaled - scaled.round()).abs() < 1e-6, "{value} not at 3 places");
    }
}

#[test]
fn float_raw_draws_exclude_upper_bound() {
    let sampler = FloatSampler::new(0.0, 1.0, 2).expect("sampler");
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..5000 {
        let raw = sampler.sample_raw(&mut rng);
        assert!((0.0..1.0).contains(&raw), "{raw} outside [0, 1)");
    }
}

#[test]
fn float_rounding_can_reach_upper_bound_but_never_exceeds_it() {
    let column = ColumnConfig::float("Coin", 0.0, 1.0, 0).expect("valid column");
    let values = floats(&run(&FloatGenerator, &column, 1000, 5).expect("generate"));

    assert!(values.iter().all(|v| *v == 0.0 || *v == 1.0));
    assert!(values.contains(&0.0));
    assert!(values.contains(&1.0));
}

#[test]
fn float_bounds_off_the_precision_grid_still_yield_rounded_values() {
    let column = ColumnConfig::float("X", 0.123, 0.187, 2).expect("valid column");
    let values = floats(&run(&FloatGenerator, &column, 200, 1).expect("generate"));

    for value in &values {
        assert!((0.123..=0.187).contains(value), "{value} out of range");
        let cents = value * 100.0;
        assert!((cents - cents.round()).abs() < 1e-9, "{value} not at 2 places");
    }
    assert!(values.contains(&0.13));
    assert!(values.contains(&0.18));
}

#[test]
fn price_bounds_off_the_cent_grid_stay_in_range() {
    let column = ColumnConfig::price("Fee", 0.999, 1.001).expect("valid column");
    let values = floats(&run(&PriceGenerator, &column, 50, 6).expect("generate"));
    assert!(values.iter().all(|v| *v == 1.0));
}

#[test]
fn float_degenerate_range_is_constant() {
    let column = ColumnConfig::float("Ratio", 0.5, 0.5, 2).expect("valid column");
    let values = floats(&run(&FloatGenerator, &column, 20, 9).expect("generate"));
    assert!(values.iter().all(|v| *v == 0.5));
}

#[test]
fn rounding_ties_go_to_even() {
    assert_eq!(round_half_even(2.5, 0), 2.0);
    assert_eq!(round_half_even(3.5, 0), 4.0);
    assert_eq!(round_half_even(-2.5, 0), -2.0);
    assert_eq!(round_half_even(0.125, 2), 0.12);
    assert_eq!(round_half_even(0.375, 2), 0.38);
    assert_eq!(round_half_even(1.26, 1), 1.3);
}

#[test]
fn rounding_leaves_unscalable_values_alone() {
    assert_eq!(round_half_even(f64::MAX, 10), f64::MAX);
}

#[test]
fn price_values_have_two_decimals() {
    let column = ColumnConfig::price("Cost", 1.0, 50.0).expect("valid column");
    let values = floats(&run(&PriceGenerator, &column, 500, 21).expect("generate"));

    for value in values {
        assert!((1.0..=50.0).contains(&value));
        let cents = value * 100.0;
        assert!((cents - cents.round()).abs() < 1e-6, "{value} not at 2 places");
    }
}

#[test]
fn string_values_respect_max_length() {
    let column = ColumnConfig::string("Code", 3).expect("valid column");
    let values = run(&StringGenerator, &column, 500, 13).expect("generate");

    for value in &values {
        let text = value.as_str().expect("text value");
        assert!(text.chars().count() <= 3, "'{text}' longer than 3");
    }
}

#[test]
fn truncation_never_pads_and_counts_characters() {
    assert_eq!(truncate_chars("ab", 5), "ab");
    assert_eq!(truncate_chars("abcdef", 4), "abcd");
    assert_eq!(truncate_chars("ação", 2), "aç");
}

#[test]
fn boolean_frequency_converges_to_probability() {
    let rows = 10_000;
    let p = 0.3;
    let column = ColumnConfig::boolean("Flag", p).expect("valid column");
    let values = run(&BooleanGenerator, &column, rows, 17).expect("generate");

    let trues = values
        .iter()
        .filter(|v| v.as_bool().expect("bool value"))
        .count() as f64;
    let expected = rows as f64 * p;
    let sigma = (rows as f64 * p * (1.0 - p)).sqrt();
    assert!(
        (trues - expected).abs() <= 3.0 * sigma,
        "{trues} trues, expected {expected} +/- {}",
        3.0 * sigma
    );
}

#[test]
fn boolean_extreme_probabilities_are_exact() {
    let never = ColumnConfig::boolean("Never", 0.0).expect("valid column");
    let always = ColumnConfig::boolean("Always", 1.0).expect("valid column");

    let never = run(&BooleanGenerator, &never, 300, 2).expect("generate");
    let always = run(&BooleanGenerator, &always, 300, 2).expect("generate");

    assert!(never.iter().all(|v| *v == GeneratedValue::Bool(false)));
    assert!(always.iter().all(|v| *v == GeneratedValue::Bool(true)));
}

#[test]
fn custom_ids_are_prefixed_and_zero_padded() {
    let column = ColumnConfig::custom_id("Ticket", "TK-", 5).expect("valid column");
    let values = run(&CustomIdGenerator, &column, 300, 4).expect("generate");

    for value in &values {
        let text = value.as_str().expect("text value");
        let digits = text.strip_prefix("TK-").expect("prefix present");
        assert_eq!(digits.len(), 5, "'{text}' not padded to 5 digits");
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn custom_ids_support_maximum_width() {
    let column = ColumnConfig::custom_id("Serial", "", 18).expect("valid column");
    let values = run(&CustomIdGenerator, &column, 50, 8).expect("generate");
    assert!(
        values
            .iter()
            .all(|v| v.as_str().map(str::len) == Some(18))
    );
}

#[test]
fn generator_rejects_column_of_another_type() {
    let column = ColumnConfig::boolean("Active", 0.5).expect("valid column");
    let result = run(&IntegerGenerator, &column, 10, 1);

    match result {
        Err(GenerationError::MismatchedConfig {
            expected,
            actual,
            column,
        }) => {
            assert_eq!(expected, synthtab_core::ColumnType::Integer);
            assert_eq!(actual, synthtab_core::ColumnType::Boolean);
            assert_eq!(column, "Active");
        }
        other => panic!("expected mismatch, got {other:?}"),
    }
}
