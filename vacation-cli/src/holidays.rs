//! Holidays command: list the public holidays the planner would use.

use std::io::Write;

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use vacation_core::Locale;
use vacation_holidays::RuleHolidayProvider;

use crate::config::LocationSection;
use crate::render::{self, OutputFormat};
use crate::CliError;

/// CLI arguments for the `holidays` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the public holidays of a locale")]
#[ortho_config(prefix = "VACATION")]
pub(crate) struct HolidaysArgs {
    /// ISO 3166-1 country code; defaults to BR with the SP subdivision.
    #[arg(long, value_name = "code")]
    #[serde(default)]
    pub(crate) country: Option<String>,
    /// Subdivision code.
    #[arg(long, value_name = "code")]
    #[serde(default)]
    pub(crate) subdivision: Option<String>,
    /// Year to list; defaults to next year.
    #[arg(long, value_name = "year")]
    #[serde(default)]
    pub(crate) year: Option<i32>,
    /// Include weekday substitutes for weekend holidays.
    #[arg(long, value_name = "bool")]
    #[serde(default)]
    pub(crate) observed: Option<bool>,
    /// Output encoding.
    #[arg(long, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

/// Resolved `holidays` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HolidaysConfig {
    pub(crate) locale: Locale,
    pub(crate) year: i32,
    pub(crate) format: OutputFormat,
}

impl HolidaysConfig {
    pub(crate) fn resolve(args: HolidaysArgs, today: NaiveDate) -> Self {
        let location = LocationSection {
            country_code: args.country,
            subdivision_code: args.subdivision,
            include_observed: args.observed,
        };
        Self {
            locale: location.locale(),
            year: args.year.unwrap_or(today.year() + 1),
            format: args.format.unwrap_or_default(),
        }
    }
}

pub(super) fn run_holidays(args: HolidaysArgs) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = HolidaysConfig::resolve(merged, Local::now().date_naive());
    let mut stdout = std::io::stdout().lock();
    run_holidays_with(&config, &RuleHolidayProvider::new(), &mut stdout)
}

pub(super) fn run_holidays_with(
    config: &HolidaysConfig,
    provider: &RuleHolidayProvider,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let holidays = provider.named_holidays(&config.locale, config.year)?;
    log::debug!(
        "{} holidays for {} in {}",
        holidays.len(),
        config.locale,
        config.year
    );
    render::write_holidays(writer, &holidays, config.format)
}
