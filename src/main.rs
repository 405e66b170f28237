//! jflap2dkar - JFLAP to DKAR converter
//!
//! Reads a deterministic finite automaton from a JFLAP XML file and writes
//! it as a DKAR transition table.

mod config;

use clap::Parser;
use colored::Colorize;
use config::Config;
use dkar_core::{ConversionSummary, Converter, CoreError, NameMapper, OverflowPolicy, WriteMode};
use dkar_jflap::JflapReader;
use dkar_table::DkarFormatter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jflap2dkar")]
#[command(about = "Convert a JFLAP deterministic finite automaton into a DKAR table")]
#[command(version)]
struct Cli {
    /// Input JFLAP file
    input: PathBuf,

    /// Output DKAR file
    output: PathBuf,

    /// YAML configuration file
    #[arg(short, long, env = "DKAR_CONFIG")]
    config: Option<PathBuf>,

    /// Write through a temporary file and rename it into place
    #[arg(long)]
    atomic: bool,

    /// Reject qN state names with N above 25
    #[arg(long)]
    strict_names: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            eprintln!("{}: {}", "Error".red(), e);
            std::process::exit(1);
        }
    };
    if cli.atomic {
        config.output.write_mode = WriteMode::Atomic;
    }
    if cli.strict_names {
        config.naming.overflow = OverflowPolicy::Reject;
    }

    match run(&cli, &config) {
        Ok(summary) => {
            println!(
                "{} {} -> {} ({} states, {} symbols, {} final)",
                "Converted".green(),
                cli.input.display(),
                cli.output.display(),
                summary.states,
                summary.symbols,
                summary.final_states
            );
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), "Conversion failed: {}", e);
            eprintln!("{}: {}", "Error".red(), e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<ConversionSummary, CoreError> {
    let reader = JflapReader::new(NameMapper::new(config.naming.overflow));
    let converter =
        Converter::new(reader, DkarFormatter::new()).with_write_mode(config.output.write_mode);
    converter.convert(&cli.input, &cli.output)
}
