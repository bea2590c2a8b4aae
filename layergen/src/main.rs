//! layergen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{GenerateCommand, TemplatesCommand};
use console::style;
use layergen::GeneratorConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "layergen")]
#[command(version)]
#[command(about = "Scaffold layered Go application files from an entity name and domain", long_about = None)]
struct Cli {
    /// Log generation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./layergen.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a component, or the full stack, for an entity
    Generate(GenerateCommand),
    /// Manage template overrides
    Templates {
        #[command(subcommand)]
        command: TemplatesCommand,
    },
}

fn run(cli: Cli) -> Result<()> {
    layergen::observability::init(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => GeneratorConfig::load_from(path)?,
        None => GeneratorConfig::load()?,
    };
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Generate(command) => command.execute(config),
        Commands::Templates { command } => command.execute(config),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", style("error:").red().bold(), one_line(&err));
            ExitCode::FAILURE
        }
    }
}

/// Error chain joined with `: ` and folded onto a single line
fn one_line(err: &anyhow::Error) -> String {
    format!("{err:#}")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
