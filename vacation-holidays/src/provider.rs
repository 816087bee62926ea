//! [`HolidayProvider`] backed by recurring rule tables.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use vacation_core::{HolidayProvider, Locale, LocaleError};

use crate::rule::{Holiday, Observance, SUPPORTED_YEARS, is_weekend};
use crate::tables::BUILTIN;

/// Holiday tables for one country and its subdivisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRules {
    code: &'static str,
    national: &'static [Holiday],
    subdivisions: &'static [(&'static str, &'static [Holiday])],
}

impl CountryRules {
    /// Rules for `code` (ISO 3166-1 alpha-2) with optional regional tables.
    #[must_use]
    pub const fn new(
        code: &'static str,
        national: &'static [Holiday],
        subdivisions: &'static [(&'static str, &'static [Holiday])],
    ) -> Self {
        Self {
            code,
            national,
            subdivisions,
        }
    }

    /// Country code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Supported subdivision codes.
    pub fn subdivisions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.subdivisions.iter().map(|(code, _)| *code)
    }

    fn regional(&self, subdivision: &str) -> Option<&'static [Holiday]> {
        self.subdivisions
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(subdivision))
            .map(|(_, holidays)| *holidays)
    }
}

/// A resolved holiday date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NamedHoliday {
    /// Date the holiday is taken.
    pub date: NaiveDate,
    /// Holiday name.
    pub name: &'static str,
    /// Whether this is a weekday substitute for a weekend holiday.
    pub observed: bool,
}

/// Public holidays computed from built-in or caller-supplied rule tables.
///
/// Country and subdivision codes are matched case-insensitively.
#[derive(Debug, Clone)]
pub struct RuleHolidayProvider {
    countries: Vec<CountryRules>,
}

impl Default for RuleHolidayProvider {
    fn default() -> Self {
        Self {
            countries: BUILTIN.to_vec(),
        }
    }
}

impl RuleHolidayProvider {
    /// Provider with the built-in tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `rules`, replacing any table with the same country code.
    #[must_use]
    pub fn with_country(mut self, rules: CountryRules) -> Self {
        self.countries
            .retain(|existing| !existing.code.eq_ignore_ascii_case(rules.code));
        self.countries.push(rules);
        self
    }

    /// Country tables known to the provider.
    pub fn countries(&self) -> impl Iterator<Item = &CountryRules> {
        self.countries.iter()
    }

    /// Every holiday for `locale` in `year`, ordered by date.
    ///
    /// Weekday substitutes are included when the locale asks for observed
    /// days; they may come from a holiday in the neighbouring year.
    pub fn named_holidays(
        &self,
        locale: &Locale,
        year: i32,
    ) -> Result<Vec<NamedHoliday>, LocaleError> {
        let rules = self.rules_for(locale)?;
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(LocaleError::UnsupportedYear {
                country: locale.country().to_owned(),
                year,
            });
        }

        let mut actual: Vec<(NamedHoliday, Observance)> = (year - 1..=year + 1)
            .flat_map(|y| {
                rules.iter().filter_map(move |holiday| {
                    holiday.date_in(y).map(|date| {
                        let named = NamedHoliday {
                            date,
                            name: holiday.name(),
                            observed: false,
                        };
                        (named, holiday.observance())
                    })
                })
            })
            .collect();
        actual.sort_by_key(|(named, _)| *named);

        let mut resolved: Vec<NamedHoliday> = actual.iter().map(|(named, _)| *named).collect();
        if locale.include_observed() {
            let mut taken: BTreeSet<NaiveDate> = resolved.iter().map(|h| h.date).collect();
            for (holiday, observance) in &actual {
                if let Some(date) = substitute(holiday.date, *observance, &taken) {
                    taken.insert(date);
                    resolved.push(NamedHoliday {
                        date,
                        observed: true,
                        ..*holiday
                    });
                }
            }
        }

        resolved.retain(|holiday| holiday.date.year() == year);
        resolved.sort();
        Ok(resolved)
    }

    fn country(&self, locale: &Locale) -> Result<&CountryRules, LocaleError> {
        self.countries
            .iter()
            .find(|rules| rules.code.eq_ignore_ascii_case(locale.country()))
            .ok_or_else(|| LocaleError::UnsupportedCountry {
                country: locale.country().to_owned(),
            })
    }

    fn rules_for(&self, locale: &Locale) -> Result<Vec<Holiday>, LocaleError> {
        let country = self.country(locale)?;
        let mut rules = country.national.to_vec();
        if let Some(subdivision) = locale.subdivision() {
            let regional =
                country
                    .regional(subdivision)
                    .ok_or_else(|| LocaleError::UnsupportedSubdivision {
                        country: locale.country().to_owned(),
                        subdivision: subdivision.to_owned(),
                    })?;
            rules.extend_from_slice(regional);
        }
        Ok(rules)
    }
}

impl HolidayProvider for RuleHolidayProvider {
    fn holidays_for(
        &self,
        locale: &Locale,
        years: &BTreeSet<i32>,
    ) -> Result<BTreeSet<NaiveDate>, LocaleError> {
        let mut dates = BTreeSet::new();
        for &year in years {
            dates.extend(
                self.named_holidays(locale, year)?
                    .into_iter()
                    .map(|holiday| holiday.date),
            );
        }
        log::debug!(
            "resolved {} holiday dates for {locale} across {} years",
            dates.len(),
            years.len()
        );
        Ok(dates)
    }
}

/// Weekday on which a weekend holiday is taken, if any.
fn substitute(
    date: NaiveDate,
    observance: Observance,
    taken: &BTreeSet<NaiveDate>,
) -> Option<NaiveDate> {
    if !is_weekend(date) {
        return None;
    }
    match observance {
        Observance::None => None,
        Observance::NearestWeekday => match date.weekday() {
            Weekday::Sat => date.pred_opt(),
            _ => date.succ_opt(),
        },
        Observance::FollowingWeekday => {
            let mut candidate = date.checked_add_days(Days::new(1))?;
            while is_weekend(candidate) || taken.contains(&candidate) {
                candidate = candidate.checked_add_days(Days::new(1))?;
            }
            Some(candidate)
        }
    }
}
