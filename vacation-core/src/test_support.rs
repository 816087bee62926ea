//! Test-only helpers shared by unit and behaviour tests across the
//! workspace.
//!
//! The module is compiled for `cfg(test)` and behind the `test-support`
//! feature so downstream crates can reuse the fixtures.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};

use crate::{Break, HolidayProvider, Locale, LocaleError};

/// Alpha used by [`candidate`] when scoring synthetic breaks.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// In-memory [`HolidayProvider`] serving a fixed set of dates.
///
/// Every locale is accepted unless its country was registered through
/// [`MemoryHolidayProvider::rejecting`].
#[derive(Debug, Clone, Default)]
pub struct MemoryHolidayProvider {
    dates: BTreeSet<NaiveDate>,
    rejected: Vec<String>,
}

impl MemoryHolidayProvider {
    /// Create a provider serving `dates` for every locale.
    pub fn new<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            dates: dates.into_iter().collect(),
            rejected: Vec::new(),
        }
    }

    /// Report [`LocaleError::UnsupportedCountry`] for `country`.
    #[must_use]
    pub fn rejecting(mut self, country: &str) -> Self {
        self.rejected.push(country.to_owned());
        self
    }
}

impl HolidayProvider for MemoryHolidayProvider {
    fn holidays_for(
        &self,
        locale: &Locale,
        years: &BTreeSet<i32>,
    ) -> Result<BTreeSet<NaiveDate>, LocaleError> {
        if self.rejected.iter().any(|country| country == locale.country()) {
            return Err(LocaleError::UnsupportedCountry {
                country: locale.country().to_owned(),
            });
        }
        Ok(self
            .dates
            .iter()
            .filter(|date| years.contains(&date.year()))
            .copied()
            .collect())
    }
}

/// Build a date from literal parts.
///
/// # Panics
///
/// Panics when the parts do not form a valid calendar date.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures are built from literal dates")]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date should be valid")
}

/// Build a synthetic candidate spanning `[begin, end]` whose PTO block
/// starts on `begin` and lasts `days_pto` days.
///
/// # Panics
///
/// Panics when the span cannot hold `days_pto` PTO days.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures are built from literal dates")]
pub fn candidate(begin: NaiveDate, end: NaiveDate, days_pto: u32) -> Break {
    let end_pto = begin
        .checked_add_days(Days::new(u64::from(days_pto.saturating_sub(1))))
        .expect("PTO block should stay inside the supported date range");
    Break::new(begin, end, begin, end_pto, days_pto, DEFAULT_ALPHA)
        .expect("fixture break should satisfy the break invariants")
}
