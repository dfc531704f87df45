use std::fs;
use std::path::PathBuf;

use synthtab_cli::config::{ConfigError, DEFAULT_MAX_ROWS, GenerateOverrides, SchemaFile};
use synthtab_core::{ColumnType, DEFAULT_NUM_ROWS, SchemaError};
use synthtab_generate::LocaleKey;

const TOML_SCHEMA: &str = r#"
rows = 250
seed = 42
locale = "pt_BR"

[[columns]]
name = "Age"
type = "integer"
min = 18
max = 65

[[columns]]
name = "Active"
type = "boolean"
true_probability = 0.8

[[columns]]
name = "Customer"
type = "person_name"
"#;

fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("synthtab_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn toml_file_resolves_with_its_own_settings() {
    let file = SchemaFile::from_toml_str(TOML_SCHEMA).expect("parse toml");
    assert_eq!(file.seed, Some(42));
    assert_eq!(file.locale, Some(LocaleKey::PtBr));

    let resolved = file
        .resolve(&GenerateOverrides::default())
        .expect("resolve");
    assert_eq!(resolved.schema.num_rows(), 250);
    assert_eq!(resolved.options.seed, Some(42));
    assert_eq!(resolved.options.locale, LocaleKey::PtBr);

    let types: Vec<ColumnType> = resolved
        .schema
        .list()
        .iter()
        .map(|column| column.column_type())
        .collect();
    assert_eq!(
        types,
        vec![
            ColumnType::Integer,
            ColumnType::Boolean,
            ColumnType::PersonName
        ]
    );
}

#[test]
fn flags_override_the_file() {
    let file = SchemaFile::from_toml_str(TOML_SCHEMA).expect("parse toml");
    let overrides = GenerateOverrides {
        rows: Some(5),
        seed: Some(7),
        locale: Some(LocaleKey::EnUs),
        max_rows: DEFAULT_MAX_ROWS,
    };

    let resolved = file.resolve(&overrides).expect("resolve");
    assert_eq!(resolved.schema.num_rows(), 5);
    assert_eq!(resolved.options.seed, Some(7));
    assert_eq!(resolved.options.locale, LocaleKey::EnUs);
}

#[test]
fn missing_settings_fall_back_to_defaults() {
    let file = SchemaFile::from_toml_str(
        r#"
[[columns]]
name = "Id"
type = "custom_id"
"#,
    )
    .expect("parse toml");

    let resolved = file
        .resolve(&GenerateOverrides::default())
        .expect("resolve");
    assert_eq!(resolved.schema.num_rows(), DEFAULT_NUM_ROWS);
    assert_eq!(resolved.options.seed, None);
    assert_eq!(resolved.options.locale, LocaleKey::EnUs);
}

#[test]
fn row_ceiling_is_enforced() {
    let file = SchemaFile::from_toml_str(TOML_SCHEMA).expect("parse toml");
    let overrides = GenerateOverrides {
        max_rows: 100,
        ..GenerateOverrides::default()
    };

    let err = file.resolve(&overrides).expect_err("over the ceiling");
    assert!(matches!(
        err,
        ConfigError::RowLimit { rows: 250, max: 100 }
    ));
}

#[test]
fn zero_rows_are_rejected() {
    let file = SchemaFile::from_toml_str(TOML_SCHEMA).expect("parse toml");
    let overrides = GenerateOverrides {
        rows: Some(0),
        ..GenerateOverrides::default()
    };

    let err = file.resolve(&overrides).expect_err("zero rows");
    assert!(matches!(
        err,
        ConfigError::Schema(SchemaError::InvalidRowCount(0))
    ));
}

#[test]
fn invalid_column_reports_its_position() {
    let file = SchemaFile::from_toml_str(
        r#"
[[columns]]
name = "Ok"
type = "integer"

[[columns]]
name = "Broken"
type = "integer"
min = 10
max = 1
"#,
    )
    .expect("parse toml");

    let err = file
        .resolve(&GenerateOverrides::default())
        .expect_err("inverted range");
    assert!(matches!(
        err,
        ConfigError::Schema(SchemaError::InvalidColumn { position: 1, ref name, .. })
            if name == "Broken"
    ));
}

#[test]
fn unknown_type_tag_fails_to_parse() {
    let result = SchemaFile::from_toml_str(
        r#"
[[columns]]
name = "X"
type = "hologram"
"#,
    );
    assert!(matches!(result, Err(ConfigError::TomlDecode(_))));
}

#[test]
fn load_picks_format_from_extension() {
    let dir = temp_dir("load");
    let json_path = dir.join("schema.json");
    fs::write(
        &json_path,
        r#"{"rows": 3, "seed": 9, "columns": [{"name": "Price", "type": "price", "min": 1.0, "max": 2.0}]}"#,
    )
    .expect("write json");
    let toml_path = dir.join("schema.toml");
    fs::write(&toml_path, TOML_SCHEMA).expect("write toml");

    let json = SchemaFile::load(&json_path).expect("load json");
    assert_eq!(json.seed, Some(9));
    assert_eq!(json.table.rows, Some(3));
    assert_eq!(json.table.columns.len(), 1);

    let toml = SchemaFile::load(&toml_path).expect("load toml");
    assert_eq!(toml.table.columns.len(), 3);

    fs::remove_dir_all(&dir).ok();
}
