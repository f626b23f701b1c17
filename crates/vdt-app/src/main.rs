use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use vdt_lang_vietnamese::VietnameseProcessor;
use vdt_workbook::XlsxWorkbook;

pub mod controller;
pub mod io;
pub mod profile;
pub mod status;

#[cfg(test)]
mod tests;

use self::controller::Pipeline;
use self::status::RunSummary;

/// Convert the Việt Danh Tính workbook into JSON lookup tables
#[derive(Parser)]
#[command(name = "vdt", version)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Source workbook, overrides config
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output directory, overrides config
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// extract, then derive-scores (default)
    Run,
    /// Write all five tables from the workbook
    Extract,
    /// Rebuild cuc_scores.json from cuc_meanings.json
    DeriveScores,
}

#[derive(ValueEnum, Clone, Copy)]
enum LogFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config = profile::load_config(cli.config.as_deref(), cli.input, cli.output_dir)?;
    let processor = VietnameseProcessor::new();
    let pipeline = Pipeline::new(&config, &processor);
    let mut summary = RunSummary::new();

    let command = cli.command.unwrap_or(Command::Run);
    if matches!(command, Command::Run | Command::Extract) {
        let mut workbook = XlsxWorkbook::open(&config.paths.input)
            .with_context(|| format!("reading {}", config.paths.input.display()))?;
        pipeline.extract(&mut workbook, &mut summary)?;
    }
    if matches!(command, Command::Run | Command::DeriveScores) {
        pipeline.derive_scores(&mut summary)?;
    }

    summary.log();
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
