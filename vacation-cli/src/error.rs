//! Error types emitted by the vacation CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use thiserror::Error;
use vacation_core::{CalendarError, LocaleError, SelectError};

use crate::config::ConfigError;

/// Errors emitted by the vacation CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The planning file could not be loaded or resolved.
    #[error(transparent)]
    PlanFile(#[from] ConfigError),
    /// Installing the log subscriber failed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The calendar could not be built.
    #[error("failed to build calendar: {0}")]
    Calendar(#[source] Box<CalendarError>),
    /// Holidays could not be listed for the locale.
    #[error("failed to list holidays: {0}")]
    Holidays(#[from] LocaleError),
    /// The selector rejected the constraints.
    #[error("selection failed: {0}")]
    Select(#[from] SelectError),
    /// Serializing the plans failed.
    #[error("failed to serialize plans: {0}")]
    SerializePlans(#[source] serde_json::Error),
    /// Serializing the holiday list failed.
    #[error("failed to serialize holidays: {0}")]
    SerializeHolidays(#[source] serde_json::Error),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl From<CalendarError> for CliError {
    fn from(source: CalendarError) -> Self {
        Self::Calendar(Box::new(source))
    }
}
