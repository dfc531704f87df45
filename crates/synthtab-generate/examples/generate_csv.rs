use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use synthtab_core::{TableSchema, TableSpec};
use synthtab_generate::{GenerateOptions, GenerationEngine, LocaleKey, write_table_csv};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let mut spec_path: Option<PathBuf> = None;
    let mut out_path: Option<PathBuf> = None;
    let mut options = GenerateOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out_path = args.next().map(PathBuf::from),
            "--seed" => {
                let seed = args.next().ok_or("missing --seed value")?;
                options.seed = Some(seed.parse()?);
            }
            "--locale" => {
                let locale = args.next().ok_or("missing --locale value")?;
                options.locale = LocaleKey::parse(&locale).ok_or("unknown locale")?;
            }
            _ => {
                if spec_path.is_none() {
                    spec_path = Some(PathBuf::from(arg));
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let spec_path = spec_path.ok_or("missing table spec path")?;
    let spec: TableSpec = serde_json::from_str(&std::fs::read_to_string(&spec_path)?)?;
    let schema = TableSchema::from_spec(spec)?;

    let engine = GenerationEngine::new(options)?;
    let result = engine.run(&schema)?;

    let bytes = match out_path {
        Some(path) => write_table_csv(BufWriter::new(File::create(path)?), &result.table)?,
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            let bytes = write_table_csv(&mut handle, &result.table)?;
            handle.flush()?;
            bytes
        }
    };

    eprintln!("run_id={} bytes={bytes}", result.report.run_id);
    Ok(())
}
