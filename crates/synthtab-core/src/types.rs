use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of value a column holds.
///
/// Declaration order is the canonical presentation order; `ALL` and the
/// derived `Ord` both follow it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    Float,
    String,
    Boolean,
    PersonName,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Country,
    City,
    Address,
    Price,
    CustomId,
}

impl ColumnType {
    /// Every column type in canonical order.
    pub const ALL: [ColumnType; 14] = [
        ColumnType::Integer,
        ColumnType::Float,
        ColumnType::String,
        ColumnType::Boolean,
        ColumnType::PersonName,
        ColumnType::FirstName,
        ColumnType::LastName,
        ColumnType::Email,
        ColumnType::PhoneNumber,
        ColumnType::Country,
        ColumnType::City,
        ColumnType::Address,
        ColumnType::Price,
        ColumnType::CustomId,
    ];

    /// Coarse generation character of this type.
    pub fn format(self) -> ColumnFormat {
        match self {
            Self::Integer | Self::Float | Self::Price => ColumnFormat::Numeric,
            Self::Boolean | Self::Country | Self::City => ColumnFormat::Categorical,
            Self::String
            | Self::PersonName
            | Self::FirstName
            | Self::LastName
            | Self::Email
            | Self::PhoneNumber
            | Self::Address
            | Self::CustomId => ColumnFormat::Text,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::PersonName => "Person Name",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Country => "Country",
            Self::City => "City",
            Self::Address => "Address",
            Self::Price => "Price",
            Self::CustomId => "Custom ID",
        }
    }

    /// Stable tag used in schema files.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::PersonName => "person_name",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::Country => "country",
            Self::City => "city",
            Self::Address => "address",
            Self::Price => "price",
            Self::CustomId => "custom_id",
        }
    }

    /// Groups this type belongs to, in `TypeGroup::ALL` order.
    pub fn groups(self) -> Vec<TypeGroup> {
        TypeGroup::ALL
            .into_iter()
            .filter(|group| group.contains(self))
            .collect()
    }

    /// Parse either the tag (`person_name`) or the label (`Person Name`),
    /// ignoring ASCII case.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|ty| {
            ty.tag().eq_ignore_ascii_case(value) || ty.label().eq_ignore_ascii_case(value)
        })
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| format!("unknown column type '{value}'"))
    }
}

/// Generation character of a column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ColumnFormat {
    Numeric,
    Text,
    Categorical,
}

impl ColumnFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "Numeric",
            Self::Text => "Text",
            Self::Categorical => "Categorical",
        }
    }
}

impl fmt::Display for ColumnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Curated bundle of column types, used for presentation filtering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TypeGroup {
    Basic,
    Personal,
    Location,
    Commerce,
    Contacts,
    All,
}

impl TypeGroup {
    pub const ALL: [TypeGroup; 6] = [
        TypeGroup::Basic,
        TypeGroup::Personal,
        TypeGroup::Location,
        TypeGroup::Commerce,
        TypeGroup::Contacts,
        TypeGroup::All,
    ];

    /// Member types in their stable presentation order.
    pub fn types(self) -> &'static [ColumnType] {
        match self {
            Self::Basic => &[
                ColumnType::Integer,
                ColumnType::Float,
                ColumnType::String,
                ColumnType::Boolean,
            ],
            Self::Personal => &[
                ColumnType::PersonName,
                ColumnType::FirstName,
                ColumnType::LastName,
                ColumnType::Email,
                ColumnType::PhoneNumber,
            ],
            Self::Location => &[ColumnType::Country, ColumnType::City, ColumnType::Address],
            Self::Commerce => &[ColumnType::Price, ColumnType::CustomId],
            Self::Contacts => &[ColumnType::Email, ColumnType::PhoneNumber],
            Self::All => &ColumnType::ALL,
        }
    }

    pub fn contains(self, column_type: ColumnType) -> bool {
        self.types().contains(&column_type)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Personal => "Personal Info",
            Self::Location => "Location",
            Self::Commerce => "Commerce",
            Self::Contacts => "Contacts",
            Self::All => "All Types",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Personal => "personal",
            Self::Location => "location",
            Self::Commerce => "commerce",
            Self::Contacts => "contacts",
            Self::All => "all",
        }
    }

    /// Same matching rule as `ColumnType::parse`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|group| {
            group.tag().eq_ignore_ascii_case(value) || group.label().eq_ignore_ascii_case(value)
        })
    }
}

impl fmt::Display for TypeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
