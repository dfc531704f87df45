use synthtab_generate::generators::GeneratorRegistry;

fn main() {
    let registry = GeneratorRegistry::new();
    for column_type in registry.column_types() {
        println!("{}\t{}", column_type.tag(), column_type.format());
    }
}
