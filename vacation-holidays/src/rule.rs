//! Recurring holiday rules.

use std::ops::RangeInclusive;

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Years for which the Gregorian computus is defined.
pub(crate) const SUPPORTED_YEARS: RangeInclusive<i32> = 1583..=4099;

/// How a holiday's date is derived for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// The same month and day every year.
    Fixed {
        /// Month, `1..=12`.
        month: u32,
        /// Day of month.
        day: u32,
    },
    /// A number of days before (negative) or after Western Easter Sunday.
    EasterOffset(i64),
    /// The `n`-th occurrence (`1..=5`) of `weekday` in `month`.
    NthWeekday {
        /// Month, `1..=12`.
        month: u32,
        /// Day of the week.
        weekday: Weekday,
        /// Occurrence, starting at 1.
        n: u8,
    },
    /// The last occurrence of `weekday` in `month`.
    LastWeekday {
        /// Month, `1..=12`.
        month: u32,
        /// Day of the week.
        weekday: Weekday,
    },
}

impl HolidayRule {
    /// The holiday's date in `year`, or `None` when the rule has no date that
    /// year.
    #[must_use]
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            Self::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            Self::EasterOffset(offset) => {
                let easter = easter_sunday(year)?;
                let shift = Days::new(offset.unsigned_abs());
                if offset < 0 {
                    easter.checked_sub_days(shift)
                } else {
                    easter.checked_add_days(shift)
                }
            }
            Self::NthWeekday { month, weekday, n } => {
                NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
            }
            Self::LastWeekday { month, weekday } => {
                let (next_year, next_month) = if month == 12 {
                    (year.checked_add(1)?, 1)
                } else {
                    (year, month.checked_add(1)?)
                };
                let month_end =
                    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
                let back = (7 + month_end.weekday().num_days_from_monday()
                    - weekday.num_days_from_monday())
                    % 7;
                month_end.checked_sub_days(Days::new(u64::from(back)))
            }
        }
    }
}

/// Whether and how a holiday falling on a weekend is observed on a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Observance {
    /// No substitute day.
    #[default]
    None,
    /// Saturday moves to the preceding Friday, Sunday to the following
    /// Monday.
    NearestWeekday,
    /// The first following weekday not already taken by another holiday.
    FollowingWeekday,
}

/// A named holiday in a country or subdivision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    name: &'static str,
    rule: HolidayRule,
    observance: Observance,
    since: Option<i32>,
}

impl Holiday {
    /// A holiday observed every year on the date given by `rule`.
    #[must_use]
    pub const fn new(name: &'static str, rule: HolidayRule) -> Self {
        Self {
            name,
            rule,
            observance: Observance::None,
            since: None,
        }
    }

    /// Set the weekend substitution rule.
    #[must_use]
    pub const fn observed(mut self, observance: Observance) -> Self {
        self.observance = observance;
        self
    }

    /// Only observe the holiday from `year` onwards.
    #[must_use]
    pub const fn since(mut self, year: i32) -> Self {
        self.since = Some(year);
        self
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Date rule.
    #[must_use]
    pub const fn rule(&self) -> HolidayRule {
        self.rule
    }

    /// Weekend substitution rule.
    #[must_use]
    pub const fn observance(&self) -> Observance {
        self.observance
    }

    /// The holiday's actual date in `year`, if it is observed that year.
    #[must_use]
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        if self.since.is_some_and(|first| year < first) {
            return None;
        }
        self.rule.date_in(year)
    }
}

/// Western (Gregorian) Easter Sunday, via the anonymous Gregorian algorithm.
///
/// Returns `None` outside 1583..=4099.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use vacation_holidays::easter_sunday;
///
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20));
/// assert_eq!(easter_sunday(1500), None);
/// ```
#[must_use]
#[expect(
    clippy::integer_division,
    reason = "the computus is defined in terms of integer division"
)]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if !SUPPORTED_YEARS.contains(&year) {
        return None;
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

/// Whether `date` falls on Saturday or Sunday.
pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
