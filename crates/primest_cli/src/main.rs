//! primest CLI: query the table-driven energy and area estimator.
//!
//! Provides `primest supports` for accuracy checks, `primest energy` and
//! `primest area` for estimates, and `primest components` for the list of
//! modeled primitives. Queries are read from JSON files in the format the
//! hosting framework uses.

#![warn(missing_docs)]

mod components;
mod context;
mod estimate;
mod supports;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// primest: table-driven energy and area estimation for hardware primitives.
#[derive(Parser, Debug)]
#[command(name = "primest", version, about = "Primitive energy and area estimator")]
pub struct Cli {
    /// Suppress notes and warnings; only results and errors are printed.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control colored diagnostics.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `primest.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory of characterization tables, overriding the configuration.
    #[arg(long, global = true)]
    pub tables: Option<String>,

    /// Output format.
    #[arg(short, long, global = true, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report the accuracy the estimator claims for a query.
    Supports(SupportsArgs),
    /// Estimate the energy of a query's action, in pJ.
    Energy(QueryArgs),
    /// Estimate the area of a queried component, in um^2.
    Area(QueryArgs),
    /// List the modeled components, their attributes and actions.
    Components,
}

/// Arguments for the `primest supports` subcommand.
#[derive(Parser, Debug)]
pub struct SupportsArgs {
    /// Which estimate to check support for.
    #[arg(value_enum)]
    pub kind: EstimateKind,

    /// Query file (JSON), or `-` for stdin.
    pub query: String,
}

/// Arguments for the `primest energy` and `primest area` subcommands.
#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Query file (JSON), or `-` for stdin.
    pub query: String,
}

/// The kind of estimate a query asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EstimateKind {
    /// Energy per action.
    Energy,
    /// Component area.
    Area,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress notes and warnings.
    pub quiet: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a config file.
    pub config: Option<String>,
    /// Optional table directory override.
    pub tables: Option<String>,
    /// Output format.
    pub format: ReportFormat,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::env::var("TERM").is_ok() && std::env::var("NO_COLOR").is_err(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        color,
        config: cli.config,
        tables: cli.tables,
        format: cli.format,
    };

    let result = match cli.command {
        Command::Supports(ref args) => supports::run(args, &global),
        Command::Energy(ref args) => estimate::run(args, EstimateKind::Energy, &global),
        Command::Area(ref args) => estimate::run(args, EstimateKind::Area, &global),
        Command::Components => components::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
