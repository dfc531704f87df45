use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use synthtab_cli::config::{
    ConfigError, DEFAULT_MAX_ROWS, GenerateOverrides, OutputTarget, SchemaFile, write_json_atomic,
};
use synthtab_cli::logging::{LogFormat, LoggingError, init_logging};
use synthtab_core::{ColumnType, TypeGroup};
use synthtab_generate::{GenerationEngine, GenerationError, LocaleKey, write_table_csv};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "synthtab", version, about = "Synthetic tabular data generator")]
struct Cli {
    /// Log output format (written to stderr).
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported column types.
    Types(TypesArgs),
    /// Validate a schema file and print its columns.
    Inspect(InspectArgs),
    /// Generate a CSV table from a schema file.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct TypesArgs {
    /// Only list types in this group (tag or label).
    #[arg(long, value_parser = parse_group)]
    group: Option<TypeGroup>,
    /// Print JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Schema file (TOML, or JSON with a .json extension).
    file: PathBuf,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Schema file (TOML, or JSON with a .json extension).
    file: PathBuf,
    /// Rows to generate; overrides the file.
    #[arg(long)]
    rows: Option<usize>,
    /// Seed for reproducible output; overrides the file.
    #[arg(long)]
    seed: Option<u64>,
    /// Synthesis locale (en_US or pt_BR); overrides the file.
    #[arg(long, value_parser = parse_locale)]
    locale: Option<LocaleKey>,
    /// Output CSV path or directory; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Refuse to generate more rows than this.
    #[arg(long, default_value_t = DEFAULT_MAX_ROWS)]
    max_rows: usize,
    /// Write the run report as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format, "info")?;

    match cli.command {
        Command::Types(args) => run_types(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Generate(args) => run_generate(args),
    }
}

#[derive(Debug, Serialize)]
struct TypeEntry {
    tag: &'static str,
    label: &'static str,
    format: &'static str,
    groups: Vec<&'static str>,
}

impl TypeEntry {
    fn new(column_type: ColumnType) -> Self {
        Self {
            tag: column_type.tag(),
            label: column_type.label(),
            format: column_type.format().as_str(),
            groups: column_type
                .groups()
                .into_iter()
                .map(TypeGroup::tag)
                .collect(),
        }
    }
}

fn run_types(args: TypesArgs) -> Result<(), CliError> {
    let types = args.group.unwrap_or(TypeGroup::All).types();
    let entries: Vec<TypeEntry> = types.iter().copied().map(TypeEntry::new).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in entries {
        println!(
            "{:<14} {:<14} {:<12} {}",
            entry.tag,
            entry.label,
            entry.format,
            entry.groups.join(",")
        );
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<(), CliError> {
    let file = SchemaFile::load(&args.file)?;
    let resolved = file.resolve(&GenerateOverrides {
        max_rows: usize::MAX,
        ..GenerateOverrides::default()
    })?;
    let schema = &resolved.schema;

    tracing::info!(
        event = "schema_loaded",
        path = %args.file.display(),
        columns = schema.len(),
        rows = schema.num_rows()
    );

    println!("rows: {}", schema.num_rows());
    if let Some(seed) = resolved.options.seed {
        println!("seed: {seed}");
    }
    println!("locale: {}", resolved.options.locale);
    println!("columns: {}", schema.len());
    for (index, column) in schema.list().iter().enumerate() {
        let params = column.params().to_string();
        if params.is_empty() {
            println!("  {}. {column} [{}]", index + 1, column.format());
        } else {
            println!("  {}. {column} [{}] {params}", index + 1, column.format());
        }
    }
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        file,
        rows,
        seed,
        locale,
        out,
        max_rows,
        report,
    } = args;

    if max_rows == 0 {
        return Err(CliError::InvalidConfig(
            "--max-rows must be at least 1".to_string(),
        ));
    }

    let timer = Instant::now();
    let overrides = GenerateOverrides {
        rows,
        seed,
        locale,
        max_rows,
    };
    let resolved = SchemaFile::load(&file)?.resolve(&overrides)?;
    tracing::info!(
        event = "schema_loaded",
        path = %file.display(),
        columns = resolved.schema.len(),
        rows = resolved.schema.num_rows()
    );

    let engine = GenerationEngine::new(resolved.options)?;
    let result = engine.run(&resolved.schema)?;

    let mut buffer = Vec::new();
    let bytes = write_table_csv(&mut buffer, &result.table)?;
    let target = OutputTarget::resolve(out.as_deref());
    target.write(&buffer)?;
    tracing::info!(event = "csv_written", target = %target, bytes);

    if let Some(path) = report.as_deref() {
        write_report(path, &result.report)?;
    }

    tracing::info!(
        event = "run_finished",
        status = "success",
        run_id = %result.report.run_id,
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

fn write_report<T: Serialize>(path: &Path, report: &T) -> Result<(), CliError> {
    write_json_atomic(path, report)?;
    tracing::info!(event = "report_written", path = %path.display());
    Ok(())
}

fn parse_group(value: &str) -> Result<TypeGroup, String> {
    TypeGroup::parse(value).ok_or_else(|| {
        let known: Vec<&str> = TypeGroup::ALL.iter().map(|group| group.tag()).collect();
        format!("unknown group '{value}' (expected one of {})", known.join(", "))
    })
}

fn parse_locale(value: &str) -> Result<LocaleKey, String> {
    LocaleKey::parse(value).ok_or_else(|| {
        let known: Vec<&str> = LocaleKey::ALL.iter().map(|locale| locale.as_str()).collect();
        format!("unknown locale '{value}' (expected one of {})", known.join(", "))
    })
}
