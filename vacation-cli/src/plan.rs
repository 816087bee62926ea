//! Plan command implementation for the vacation CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::{Local, NaiveDate};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use vacation_core::{Calendar, HolidayProvider, Plan, Selector, generate_candidates};
use vacation_holidays::RuleHolidayProvider;
use vacation_solver::{GreedySelector, OptimalSelector};

use crate::config::{Algorithm, PlanFile, PlanSettings};
use crate::render::{self, OutputFormat};
use crate::CliError;

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Suggest how to spend a PTO balance so that it yields the \
                 most days off. Planning inputs come from a TOML file; the \
                 flags below override the matching file settings.",
    about = "Suggest vacation plans"
)]
#[ortho_config(prefix = "VACATION")]
pub(crate) struct PlanArgs {
    /// Path to the TOML planning configuration.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) file: Option<Utf8PathBuf>,
    /// Selection strategy, overriding `algorithm_type`.
    #[arg(long, value_enum)]
    #[serde(default)]
    pub(crate) algorithm: Option<Algorithm>,
    /// Number of plans to report, overriding `top_n_suggestions`.
    #[arg(long = "top-n", value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Output encoding.
    #[arg(long, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Reference date (`YYYY-MM-DD`); defaults to the local date.
    #[arg(long, value_name = "date")]
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(PlanConfig::from(merged))
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Planning file; engine defaults apply without one.
    pub(crate) file: Option<Utf8PathBuf>,
    pub(crate) algorithm: Option<Algorithm>,
    pub(crate) top_n: Option<usize>,
    pub(crate) format: OutputFormat,
    pub(crate) today: NaiveDate,
}

impl From<PlanArgs> for PlanConfig {
    fn from(args: PlanArgs) -> Self {
        Self {
            file: args.file,
            algorithm: args.algorithm,
            top_n: args.top_n,
            format: args.format.unwrap_or_default(),
            today: args.today.unwrap_or_else(|| Local::now().date_naive()),
        }
    }
}

impl PlanConfig {
    /// Load the planning file and apply the command-line overrides.
    pub(crate) fn settings(&self) -> Result<PlanSettings, CliError> {
        let file = match &self.file {
            Some(path) => PlanFile::load(path)?,
            None => PlanFile::default(),
        };
        let mut settings = file.resolve(self.today)?;
        if let Some(algorithm) = self.algorithm {
            settings.algorithm = algorithm;
        }
        if let Some(top_n) = self.top_n {
            settings.constraints.top_n = top_n;
        }
        Ok(settings)
    }
}

fn selector_for(algorithm: Algorithm) -> Box<dyn Selector> {
    match algorithm {
        Algorithm::Greedy => Box::new(GreedySelector::new()),
        Algorithm::Optimal => Box::new(OptimalSelector::new()),
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_plan_with(&config, &RuleHolidayProvider::new(), &mut stdout)
}

pub(super) fn run_plan_with(
    config: &PlanConfig,
    provider: &dyn HolidayProvider,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let plans = execute_plan(config, provider)?;
    render::write_plans(writer, &plans, config.format)
}

/// Classify the calendar, generate candidates and run the chosen selector.
pub(super) fn execute_plan(
    config: &PlanConfig,
    provider: &dyn HolidayProvider,
) -> Result<Vec<Plan>, CliError> {
    let PlanSettings {
        request,
        constraints,
        algorithm,
    } = config.settings()?;
    let calendar = Calendar::new(request, provider)?;
    let (working, holidays, forbidden) = calendar.summary();
    log::info!(
        "planning {}..={} for {}: {working} working, {holidays} non-working, {forbidden} forced",
        calendar.first_day(),
        calendar.last_day(),
        calendar.locale()
    );

    let candidates = generate_candidates(&calendar, &constraints);
    if candidates.is_empty() {
        log::warn!("no candidate breaks satisfy the per-break limits");
    }
    let plans = selector_for(algorithm).select(&candidates, &constraints)?;
    log::info!(
        "{algorithm:?} selector returned {} plans from {} candidates",
        plans.len(),
        candidates.len()
    );
    Ok(plans)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(PlanConfig::from(merged))
}
