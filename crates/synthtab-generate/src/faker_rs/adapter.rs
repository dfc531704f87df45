use fake::Fake;
use fake::faker::address::raw::{
    BuildingNumber, CityName, CountryName, StateAbbr, StreetName, ZipCode,
};
use fake::faker::internet::raw::SafeEmail;
use fake::faker::lorem::raw::Word;
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{EN, PT_BR};
use rand::RngCore;

use synthtab_core::ColumnType;

use crate::faker_rs::locales::LocaleKey;

/// Kinds of synthetic text the adapter can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FakerKind {
    PersonName,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Country,
    City,
    Address,
    Word,
}

impl FakerKind {
    pub const ALL: [FakerKind; 9] = [
        FakerKind::PersonName,
        FakerKind::FirstName,
        FakerKind::LastName,
        FakerKind::Email,
        FakerKind::PhoneNumber,
        FakerKind::Country,
        FakerKind::City,
        FakerKind::Address,
        FakerKind::Word,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::PersonName => "faker.name.full",
            Self::FirstName => "faker.name.first",
            Self::LastName => "faker.name.last",
            Self::Email => "faker.internet.safe_email",
            Self::PhoneNumber => "faker.phone_number",
            Self::Country => "faker.address.country",
            Self::City => "faker.address.city",
            Self::Address => "faker.address.full",
            Self::Word => "faker.lorem.word",
        }
    }

    /// Faker backing a column type whose generation is fully delegated.
    pub fn for_column_type(column_type: ColumnType) -> Option<Self> {
        match column_type {
            ColumnType::PersonName => Some(Self::PersonName),
            ColumnType::FirstName => Some(Self::FirstName),
            ColumnType::LastName => Some(Self::LastName),
            ColumnType::Email => Some(Self::Email),
            ColumnType::PhoneNumber => Some(Self::PhoneNumber),
            ColumnType::Country => Some(Self::Country),
            ColumnType::City => Some(Self::City),
            ColumnType::Address => Some(Self::Address),
            ColumnType::Integer
            | ColumnType::Float
            | ColumnType::String
            | ColumnType::Boolean
            | ColumnType::Price
            | ColumnType::CustomId => None,
        }
    }
}

macro_rules! fake_text {
    ($faker:ident, $locale:expr, $rng:expr) => {
        match $locale {
            LocaleKey::EnUs => {
                let value: String = $faker(EN).fake_with_rng(&mut *$rng);
                value
            }
            LocaleKey::PtBr => {
                let value: String = $faker(PT_BR).fake_with_rng(&mut *$rng);
                value
            }
        }
    };
}

pub struct FakeRsAdapter;

impl FakeRsAdapter {
    /// Produce one independent value; repeated calls may return duplicates.
    pub fn generate_text(kind: FakerKind, locale: LocaleKey, rng: &mut dyn RngCore) -> String {
        match kind {
            FakerKind::PersonName => fake_text!(Name, locale, rng),
            FakerKind::FirstName => fake_text!(FirstName, locale, rng),
            FakerKind::LastName => fake_text!(LastName, locale, rng),
            FakerKind::Email => fake_text!(SafeEmail, locale, rng),
            FakerKind::PhoneNumber => fake_text!(PhoneNumber, locale, rng),
            FakerKind::Country => fake_text!(CountryName, locale, rng),
            FakerKind::City => fake_text!(CityName, locale, rng),
            FakerKind::Address => flatten_lines(&postal_address(locale, rng)),
            FakerKind::Word => fake_text!(Word, locale, rng),
        }
    }
}

/// Two-line postal address (street line, then city line).
fn postal_address(locale: LocaleKey, rng: &mut dyn RngCore) -> String {
    let building = fake_text!(BuildingNumber, locale, rng);
    let street = fake_text!(StreetName, locale, rng);
    let city = fake_text!(CityName, locale, rng);
    let state = fake_text!(StateAbbr, locale, rng);
    let zip = fake_text!(ZipCode, locale, rng);
    format!("{building} {street}\n{city}, {state} {zip}")
}

/// Join the non-blank lines of `value` into a single comma-separated line.
pub fn flatten_lines(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
