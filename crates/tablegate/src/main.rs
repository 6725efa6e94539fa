//! CLI entry point for the validation stage.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use std::path::{Path, PathBuf};
use tablegate::{
    ColumnValidator, ConfigLoader, DEFAULT_CONFIG_PATH, DEFAULT_SCHEMA_PATH, ProjectScaffold,
    STAGE_NAME, ValidationConfig, ValidationStatus,
};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser, Debug)]
#[command(
    name = "tablegate",
    version,
    about = "Schema-gated validation stage for tabular data pipelines",
    long_about = "Checks a CSV dataset against a declared schema and records the outcome\n\
                  for downstream pipeline stages.\n\n\
                  EXAMPLES:\n  \
                  # Scaffold a new project layout\n  \
                  tablegate init my-project\n\n  \
                  # Validate using config/config.yaml and schema.yaml\n  \
                  tablegate validate\n\n  \
                  # Machine-readable output\n  \
                  tablegate validate --json | jq .validation_status"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Directory for the log file
    #[arg(long, default_value = "logs", global = true)]
    log_dir: PathBuf,

    /// Disable the log file (console logging only)
    #[arg(long, global = true)]
    no_log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the data validation stage
    Validate(ValidateArgs),

    /// Scaffold the standard project layout
    Init(InitArgs),
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Path to the project configuration
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Path to the schema declaration
    #[arg(short, long, default_value = DEFAULT_SCHEMA_PATH)]
    schema: PathBuf,

    /// Output the status record as JSON to stdout
    ///
    /// Disables all logging; stdout carries only the record.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct InitArgs {
    /// Root directory of the new project
    #[arg(default_value = ".")]
    path: PathBuf,
}

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stdout and, unless disabled, to a file under `log_dir`.
/// When `json_output` is true, logging is disabled entirely so stdout
/// carries nothing but the status record.
fn init_logging(
    level: &str,
    quiet: bool,
    json_output: bool,
    log_dir: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    if json_output {
        return Ok(None);
    }

    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let effective_level = if quiet { "warn" } else { level };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let (file_writer, guard) = tracing_appender::non_blocking(
                tracing_appender::rolling::never(dir, "tablegate.log"),
            );
            let file_layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(file_writer);

            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .with(file_layer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables (e.g. RUST_LOG) from a .env file
    dotenv().ok();

    let json_output = matches!(&cli.command, Commands::Validate(args) if args.json);
    let log_dir = if cli.no_log_file {
        None
    } else {
        Some(cli.log_dir.as_path())
    };
    // Guard must outlive the run so buffered log lines reach the file
    let _guard = init_logging(&cli.log_level, cli.quiet, json_output, log_dir)?;

    match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Init(args) => run_init(&args),
    }
}

/// Run the validation stage and report the outcome.
fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!("{}", "=".repeat(80));
    info!("Starting {} stage", STAGE_NAME);
    info!("{}", "=".repeat(80));

    match execute_validate(args) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("{} stage failed: {}", STAGE_NAME, e);
            Err(e)
        }
    }
}

fn execute_validate(args: &ValidateArgs) -> Result<()> {
    let loader = ConfigLoader::from_paths(&args.config, &args.schema)?;
    let config = loader.data_validation_config()?;
    let validator = ColumnValidator::new(config);
    validator.validate_all_columns()?;

    // Read the record back so the output matches the file exactly
    let status = ValidationStatus::read(&validator.config().status_file)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    print_summary(&status, validator.config());
    Ok(())
}

/// Print a human-readable summary of the validation run.
///
/// Uses `println!` intentionally: this is the primary output of the
/// command and should be visible regardless of log level settings.
fn print_summary(status: &ValidationStatus, config: &ValidationConfig) {
    println!();
    println!("{}", "=".repeat(80));
    if status.passed() {
        println!("VALIDATION PASSED");
    } else {
        println!("VALIDATION FAILED");
    }
    println!("{}", "=".repeat(80));
    println!();

    println!("Dataset: {}", config.dataset_path.display());
    println!("Declared columns: {}", config.schema.len());
    if let Some(message) = &status.message {
        println!("Reason: {}", message);
    }
    println!("Status record: {}", config.status_file.display());
    println!();
    println!("Use --json for machine-readable output");
    println!("{}", "=".repeat(80));
}

/// Scaffold the standard project layout.
fn run_init(args: &InitArgs) -> Result<()> {
    let report = ProjectScaffold::new(&args.path).create()?;

    println!("Initialized project layout at '{}'", args.path.display());
    for path in &report.created {
        println!("  created {}", path.display());
    }
    for path in &report.skipped {
        println!("  kept    {}", path.display());
    }
    Ok(())
}
