//! TOML planning configuration and its resolution into engine inputs.
//!
//! Section names are accepted in lower or upper case (`[constraints]` and
//! `[CONSTRAINTS]` are equivalent). Every key is optional; missing keys take
//! the engine defaults.

use std::collections::BTreeSet;
use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::Value;
use toml::value::Datetime;
use vacation_core::{
    CalendarError, CalendarRequest, Constraints, ConstraintsError, Locale, SelectionMode,
    WeekendDays,
};

/// Country used when the configuration names none.
pub const DEFAULT_COUNTRY: &str = "BR";
/// Subdivision paired with [`DEFAULT_COUNTRY`] when no country is configured.
pub const DEFAULT_SUBDIVISION: &str = "SP";

/// Plan selection strategy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Retry-augmented greedy search.
    #[default]
    Greedy,
    /// Exhaustive dynamic program.
    Optimal,
}

/// Errors raised while loading or resolving a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened or read.
    #[error("failed to read configuration at {path:?}: {source}")]
    Read {
        /// Requested path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has mistyped keys.
    #[error("failed to parse configuration at {path:?}: {source}")]
    Parse {
        /// Requested path.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: Box<toml::de::Error>,
    },
    /// A date entry is neither a TOML local date nor a `YYYY-MM-DD` string.
    #[error("{field} contains an invalid date: {value}")]
    InvalidDate {
        /// Key holding the value.
        field: &'static str,
        /// The rejected value, as written.
        value: String,
    },
    /// A forced-work interval ends before it starts.
    #[error("forced_work_intervals entry starts on {start} but ends on {end}")]
    InvertedInterval {
        /// Interval start.
        start: NaiveDate,
        /// Interval end.
        end: NaiveDate,
    },
    /// The planning year lies before the current one.
    #[error("calendar.year {year} is in the past (current year is {current})")]
    PastYear {
        /// Configured year.
        year: i32,
        /// Year of the reference date.
        current: i32,
    },
    /// The planning year cannot be represented.
    #[error("calendar.year {year} is out of range")]
    InvalidYear {
        /// Configured year.
        year: i32,
    },
    /// A weekend index is outside `0..=6`.
    #[error("calendar.weekend is invalid: {0}")]
    Weekend(#[from] CalendarError),
    /// A constraint value is unusable.
    #[error("constraints are invalid: {0}")]
    Constraints(#[from] ConstraintsError),
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlanFile {
    /// `[calendar]` section.
    #[serde(default, alias = "CALENDAR")]
    pub calendar: CalendarSection,
    /// `[location]` section.
    #[serde(default, alias = "LOCATION")]
    pub location: LocationSection,
    /// `[constraints]` section.
    #[serde(default, alias = "CONSTRAINTS")]
    pub constraints: ConstraintsSection,
    /// `[algorithm]` section.
    #[serde(default, alias = "ALGORITHM")]
    pub algorithm: AlgorithmSection,
}

/// Planning year and weekend definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CalendarSection {
    /// Year to plan; defaults to the year after the reference date.
    pub year: Option<i32>,
    /// Monday-based weekend indices; defaults to Saturday and Sunday.
    pub weekend: Option<Vec<u8>>,
}

/// Holiday locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocationSection {
    /// ISO 3166-1 country code.
    pub country_code: Option<String>,
    /// Subdivision code; an empty string selects the whole country.
    pub subdivision_code: Option<String>,
    /// Also treat weekday substitutes of weekend holidays as holidays.
    pub include_observed: Option<bool>,
}

/// Plan limits and calendar overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConstraintsSection {
    /// PTO balance.
    pub vacation_days: Option<u32>,
    /// Maximum number of breaks.
    pub max_vac_periods: Option<u32>,
    /// Fewest PTO days per break.
    pub min_vac_days_per_break: Option<u32>,
    /// Most PTO days per break; `0` means the whole balance.
    pub max_vac_days_per_break: Option<u32>,
    /// Fewest days off per break.
    pub min_total_days_off: Option<u32>,
    /// Fewest days between two breaks.
    pub min_gap_days: Option<u32>,
    /// Number of plans to report.
    pub top_n_suggestions: Option<usize>,
    /// Whether weekends and holidays inside a PTO stretch cost PTO.
    pub in_holiday_as_pto: Option<bool>,
    /// Extra non-working dates.
    #[serde(default)]
    pub custom_holidays: Vec<Value>,
    /// Dates that must be worked.
    #[serde(default)]
    pub forced_work_dates: Vec<Value>,
    /// Inclusive ranges that must be worked.
    #[serde(default)]
    pub forced_work_intervals: Vec<IntervalSection>,
}

/// Inclusive date range.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntervalSection {
    /// First day.
    pub start: Value,
    /// Last day.
    pub end: Value,
}

/// Selection strategy and scoring.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AlgorithmSection {
    /// Strategy name.
    #[serde(alias = "algorithm")]
    pub algorithm_type: Option<Algorithm>,
    /// Duration weight in `[0, 10]`.
    pub duration_weight_factor_alpha: Option<f64>,
    /// `exact` or `at_most`.
    pub selection_mode: Option<SelectionMode>,
}

/// Engine inputs resolved from a [`PlanFile`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSettings {
    /// Calendar to classify.
    pub request: CalendarRequest,
    /// Limits for generation and selection.
    pub constraints: Constraints,
    /// Selector to run.
    pub algorithm: Algorithm,
}

impl PlanFile {
    /// Read and parse the configuration at `path`.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        };
        let mut file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(read_error)?;
        let mut text = String::new();
        file.read_to_string(&mut text).map_err(read_error)?;
        let parsed = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        log::debug!("loaded configuration from {path}");
        Ok(parsed)
    }

    /// Parse configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Resolve the file into engine inputs relative to `today`.
    ///
    /// The horizon runs from the later of `today` and 1 January to
    /// 31 December of the planning year.
    pub fn resolve(&self, today: NaiveDate) -> Result<PlanSettings, ConfigError> {
        let year = self.calendar.year.unwrap_or(today.year() + 1);
        if year < today.year() {
            return Err(ConfigError::PastYear {
                year,
                current: today.year(),
            });
        }
        let (jan_first, last_day) = NaiveDate::from_ymd_opt(year, 1, 1)
            .zip(NaiveDate::from_ymd_opt(year, 12, 31))
            .ok_or(ConfigError::InvalidYear { year })?;
        let first_day = jan_first.max(today);

        let weekend = match &self.calendar.weekend {
            Some(indices) => WeekendDays::from_indices(indices.iter().copied())?,
            None => WeekendDays::default(),
        };
        let section = &self.constraints;
        let custom = parse_dates("custom_holidays", &section.custom_holidays)?;
        let mut forbidden = parse_dates("forced_work_dates", &section.forced_work_dates)?;
        for interval in &section.forced_work_intervals {
            forbidden.extend(interval.days_within(first_day, last_day)?);
        }

        let request = CalendarRequest::new(self.location.locale(), first_day, last_day)
            .with_weekend(weekend)
            .with_custom_holidays(custom)
            .with_forbidden(forbidden);
        let constraints = self.constraints();
        constraints.validate()?;
        Ok(PlanSettings {
            request,
            constraints,
            algorithm: self.algorithm.algorithm_type.unwrap_or_default(),
        })
    }

    fn constraints(&self) -> Constraints {
        let defaults = Constraints::default();
        let section = &self.constraints;
        Constraints {
            vacation_days: section.vacation_days.unwrap_or(defaults.vacation_days),
            max_periods: section.max_vac_periods.unwrap_or(defaults.max_periods),
            min_days_per_break: section
                .min_vac_days_per_break
                .unwrap_or(defaults.min_days_per_break),
            max_days_per_break: section
                .max_vac_days_per_break
                .unwrap_or(defaults.max_days_per_break),
            min_total_days_off: section
                .min_total_days_off
                .unwrap_or(defaults.min_total_days_off),
            min_gap_days: section.min_gap_days.unwrap_or(defaults.min_gap_days),
            holiday_as_pto: section.in_holiday_as_pto.unwrap_or(defaults.holiday_as_pto),
            top_n: section.top_n_suggestions.unwrap_or(defaults.top_n),
            alpha: self
                .algorithm
                .duration_weight_factor_alpha
                .unwrap_or(defaults.alpha),
            selection_mode: self
                .algorithm
                .selection_mode
                .unwrap_or(defaults.selection_mode),
        }
    }
}

impl LocationSection {
    /// Locale described by the section.
    ///
    /// Without a country code the default São Paulo calendar applies.
    #[must_use]
    pub fn locale(&self) -> Locale {
        let (country, subdivision) = match &self.country_code {
            Some(country) => (country.as_str(), self.subdivision_code.as_deref()),
            None => (
                DEFAULT_COUNTRY,
                Some(
                    self.subdivision_code
                        .as_deref()
                        .unwrap_or(DEFAULT_SUBDIVISION),
                ),
            ),
        };
        let locale = Locale::new(country).with_observed(self.include_observed.unwrap_or(false));
        match subdivision.map(str::trim).filter(|code| !code.is_empty()) {
            Some(code) => locale.with_subdivision(code),
            None => locale,
        }
    }
}

impl IntervalSection {
    /// Every date of the interval that falls in `first..=last`.
    ///
    /// The interval is validated as written and then clipped, so a range
    /// reaching far outside the planning year costs nothing extra.
    pub fn days_within(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<NaiveDate>, ConfigError> {
        let start = parse_date("forced_work_intervals.start", &self.start)?;
        let end = parse_date("forced_work_intervals.end", &self.end)?;
        if start > end {
            return Err(ConfigError::InvertedInterval { start, end });
        }
        let clipped_end = end.min(last);
        Ok(start
            .max(first)
            .iter_days()
            .take_while(|day| *day <= clipped_end)
            .collect())
    }
}

fn parse_dates(field: &'static str, values: &[Value]) -> Result<BTreeSet<NaiveDate>, ConfigError> {
    values.iter().map(|value| parse_date(field, value)).collect()
}

fn parse_date(field: &'static str, value: &Value) -> Result<NaiveDate, ConfigError> {
    let parsed = match value {
        Value::Datetime(datetime) => local_date(datetime),
        Value::String(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ConfigError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Date of a TOML local date; datetimes with a time or offset are rejected.
fn local_date(datetime: &Datetime) -> Option<NaiveDate> {
    if datetime.time.is_some() || datetime.offset.is_some() {
        return None;
    }
    let date = datetime.date?;
    NaiveDate::from_ymd_opt(
        i32::from(date.year),
        u32::from(date.month),
        u32::from(date.day),
    )
}
