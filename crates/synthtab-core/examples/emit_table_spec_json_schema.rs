use schemars::schema_for;
use synthtab_core::TableSpec;

fn main() {
    let schema = schema_for!(TableSpec);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
