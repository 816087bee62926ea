//! Command-line interface for the vacation planner.
//!
//! `vacation plan [FILE]` loads a TOML planning file, classifies the
//! calendar, generates candidate breaks and prints the best plans.
//! `vacation holidays` lists the public holidays of a locale.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod config;
mod error;
mod holidays;
mod logging;
mod plan;
mod render;

pub use config::{
    Algorithm, AlgorithmSection, CalendarSection, ConfigError, ConstraintsSection,
    DEFAULT_COUNTRY, DEFAULT_SUBDIVISION, IntervalSection, LocationSection, PlanFile,
    PlanSettings,
};
pub use error::CliError;
pub use render::OutputFormat;

use holidays::HolidaysArgs;
use plan::PlanArgs;

/// Run the vacation CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init(cli.verbose)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
        Command::Holidays(args) => holidays::run_holidays(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "vacation",
    about = "Stretch a PTO balance into the longest possible breaks",
    version
)]
struct Cli {
    /// Log debug output to stderr unless `RUST_LOG` says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Suggest vacation plans from a planning file.
    Plan(PlanArgs),
    /// List the public holidays of a locale.
    Holidays(HolidaysArgs),
}

#[cfg(test)]
mod tests;
