//! Day classification over a planning horizon.
//!
//! A [`Calendar`] owns one [`CalendarDay`] for every date between its first
//! and last day. Days start out as working days, become holidays when they
//! fall on a weekend or a public/custom holiday, and finally become forbidden
//! when the caller blocks them. Forbidden wins over holiday: a blocked
//! Saturday is never counted as free time.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use thiserror::Error;

use crate::holiday::{HolidayProvider, Locale, LocaleError};

/// Classification of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DayKind {
    /// A regular working day; taking it off costs PTO.
    Working,
    /// A weekend day or a public/custom holiday.
    Holiday,
    /// A day that must be worked regardless of weekends or holidays.
    Forbidden,
}

/// One date and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarDay {
    date: NaiveDate,
    kind: DayKind,
}

impl CalendarDay {
    /// The calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The day's classification.
    #[must_use]
    pub const fn kind(&self) -> DayKind {
        self.kind
    }

    /// Whether the day costs PTO to take off.
    #[must_use]
    pub fn is_working(&self) -> bool {
        self.kind == DayKind::Working
    }

    /// Whether the day is already free.
    #[must_use]
    pub fn is_holiday(&self) -> bool {
        self.kind == DayKind::Holiday
    }

    /// Whether the day can never be part of a break.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.kind == DayKind::Forbidden
    }
}

/// Days of the week treated as non-working.
///
/// Indices follow the Monday = 0 convention, so the default weekend is
/// `[5, 6]` (Saturday and Sunday).
///
/// # Examples
/// ```
/// use chrono::Weekday;
/// use vacation_core::WeekendDays;
///
/// let weekend = WeekendDays::from_indices([4, 5])?;
/// assert!(weekend.contains(Weekday::Fri));
/// assert!(!weekend.contains(Weekday::Sun));
/// # Ok::<(), vacation_core::CalendarError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekendDays {
    mask: u8,
}

impl WeekendDays {
    /// A week without weekend days.
    #[must_use]
    pub const fn none() -> Self {
        Self { mask: 0 }
    }

    /// Build a weekend from Monday-based day indices (`0..=6`).
    pub fn from_indices<I>(indices: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = u8>,
    {
        indices.into_iter().try_fold(Self::none(), |weekend, index| {
            if index > 6 {
                Err(CalendarError::InvalidWeekday { index })
            } else {
                Ok(Self {
                    mask: weekend.mask | (1 << index),
                })
            }
        })
    }

    /// Whether `weekday` is a weekend day.
    #[must_use]
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.mask & (1 << weekday.num_days_from_monday()) != 0
    }

    /// Monday-based indices of the weekend days, ascending.
    #[must_use]
    pub fn indices(&self) -> Vec<u8> {
        (0..7).filter(|index| self.mask & (1 << index) != 0).collect()
    }
}

impl Default for WeekendDays {
    fn default() -> Self {
        Self {
            mask: (1 << 5) | (1 << 6),
        }
    }
}

/// Inputs for [`Calendar::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRequest {
    /// Locale whose public holidays apply.
    pub locale: Locale,
    /// First day of the horizon (inclusive).
    pub first_day: NaiveDate,
    /// Last day of the horizon (inclusive).
    pub last_day: NaiveDate,
    /// Weekday set treated as non-working.
    pub weekend: WeekendDays,
    /// Extra non-working dates on top of the public holidays.
    pub custom_holidays: BTreeSet<NaiveDate>,
    /// Dates that must be worked.
    pub forbidden: BTreeSet<NaiveDate>,
}

impl CalendarRequest {
    /// Request a calendar with the default weekend and no overrides.
    #[must_use]
    pub fn new(locale: Locale, first_day: NaiveDate, last_day: NaiveDate) -> Self {
        Self {
            locale,
            first_day,
            last_day,
            weekend: WeekendDays::default(),
            custom_holidays: BTreeSet::new(),
            forbidden: BTreeSet::new(),
        }
    }

    /// Replace the weekend definition.
    #[must_use]
    pub const fn with_weekend(mut self, weekend: WeekendDays) -> Self {
        self.weekend = weekend;
        self
    }

    /// Add custom holidays.
    #[must_use]
    pub fn with_custom_holidays<I>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.custom_holidays.extend(dates);
        self
    }

    /// Add dates that must be worked.
    #[must_use]
    pub fn with_forbidden<I>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.forbidden.extend(dates);
        self
    }
}

/// Errors returned while building a [`Calendar`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The horizon ends before it starts.
    #[error("calendar range is inverted: {first_day} is after {last_day}")]
    InvertedRange {
        /// Requested first day.
        first_day: NaiveDate,
        /// Requested last day.
        last_day: NaiveDate,
    },
    /// A weekend index was outside `0..=6`.
    #[error("weekend day index {index} is outside 0..=6")]
    InvalidWeekday {
        /// The offending index.
        index: u8,
    },
    /// The holiday provider could not resolve the locale.
    #[error("failed to load holidays for {locale}: {source}")]
    Locale {
        /// Locale that failed to resolve.
        locale: Locale,
        /// Error reported by the provider.
        #[source]
        source: LocaleError,
    },
}

/// Classified days for a contiguous date range.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use chrono::NaiveDate;
/// use vacation_core::{Calendar, CalendarRequest, DayKind, HolidayProvider, Locale, LocaleError};
///
/// struct Christmas;
///
/// impl HolidayProvider for Christmas {
///     fn holidays_for(
///         &self,
///         _locale: &Locale,
///         years: &BTreeSet<i32>,
///     ) -> Result<BTreeSet<NaiveDate>, LocaleError> {
///         Ok(years
///             .iter()
///             .filter_map(|year| NaiveDate::from_ymd_opt(*year, 12, 25))
///             .collect())
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let first = NaiveDate::from_ymd_opt(2025, 12, 22).ok_or("date")?;
/// let last = NaiveDate::from_ymd_opt(2025, 12, 31).ok_or("date")?;
/// let calendar = Calendar::new(CalendarRequest::new(Locale::new("XX"), first, last), &Christmas)?;
/// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).ok_or("date")?;
/// assert_eq!(calendar.len(), 10);
/// assert_eq!(calendar.get(christmas).map(|day| day.kind()), Some(DayKind::Holiday));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Calendar {
    locale: Locale,
    weekend: WeekendDays,
    days: Vec<CalendarDay>,
    holidays: BTreeSet<NaiveDate>,
}

impl Calendar {
    /// Classify every day in the requested range.
    ///
    /// Public holidays are fetched once from `provider` for every year the
    /// range touches. Custom holidays and forbidden dates outside the range
    /// are ignored.
    pub fn new<P>(request: CalendarRequest, provider: &P) -> Result<Self, CalendarError>
    where
        P: HolidayProvider + ?Sized,
    {
        let CalendarRequest {
            locale,
            first_day,
            last_day,
            weekend,
            custom_holidays,
            forbidden,
        } = request;
        if last_day < first_day {
            return Err(CalendarError::InvertedRange {
                first_day,
                last_day,
            });
        }

        let years: BTreeSet<i32> = (first_day.year()..=last_day.year()).collect();
        let public = provider
            .holidays_for(&locale, &years)
            .map_err(|source| CalendarError::Locale {
                locale: locale.clone(),
                source,
            })?;
        let in_range = |date: &NaiveDate| (first_day..=last_day).contains(date);
        let holidays: BTreeSet<NaiveDate> = public
            .iter()
            .chain(custom_holidays.iter())
            .copied()
            .filter(in_range)
            .collect();

        let days = first_day
            .iter_days()
            .take_while(|date| *date <= last_day)
            .map(|date| {
                let kind = if forbidden.contains(&date) {
                    DayKind::Forbidden
                } else if weekend.contains(date.weekday()) || holidays.contains(&date) {
                    DayKind::Holiday
                } else {
                    DayKind::Working
                };
                CalendarDay { date, kind }
            })
            .collect::<Vec<_>>();

        let ignored = forbidden.iter().filter(|date| !in_range(*date)).count();
        if ignored > 0 {
            log::debug!("ignoring {ignored} forced work dates outside {first_day}..={last_day}");
        }
        log::debug!(
            "classified {} days for {locale}: {} holidays in range",
            days.len(),
            holidays.len()
        );

        Ok(Self {
            locale,
            weekend,
            days,
            holidays,
        })
    }

    /// Locale the holidays were loaded for.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// First day of the horizon.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.days.first().map_or(NaiveDate::MIN, CalendarDay::date)
    }

    /// Last day of the horizon.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.days.last().map_or(NaiveDate::MIN, CalendarDay::date)
    }

    /// Number of days in the horizon.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the calendar holds no days. Always `false` for a calendar
    /// built through [`Calendar::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Whether `date` lies inside the horizon.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.get(date).is_some()
    }

    /// Look up a day by date.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&CalendarDay> {
        let offset = date.signed_duration_since(self.first_day()).num_days();
        usize::try_from(offset)
            .ok()
            .and_then(|index| self.days.get(index))
    }

    /// Look up a day by its offset from the first day.
    #[must_use]
    pub fn day_at(&self, offset: usize) -> Option<&CalendarDay> {
        self.days.get(offset)
    }

    /// Iterate over every day in date order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter()
    }

    /// Public and custom holidays inside the horizon.
    ///
    /// Weekend days are not listed; they are only reflected in each day's
    /// classification.
    #[must_use]
    pub const fn holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.holidays
    }

    /// Whether `date` falls on a configured weekend day.
    #[must_use]
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(date.weekday())
    }

    /// Count days of each kind, as `(working, holiday, forbidden)`.
    #[must_use]
    pub fn summary(&self) -> (usize, usize, usize) {
        self.days
            .iter()
            .fold((0, 0, 0), |(working, holiday, forbidden), day| match day.kind {
                DayKind::Working => (working + 1, holiday, forbidden),
                DayKind::Holiday => (working, holiday + 1, forbidden),
                DayKind::Forbidden => (working, holiday, forbidden + 1),
            })
    }
}

/// Step one day from `date`, forwards or backwards.
pub(crate) fn step(date: NaiveDate, forward: bool) -> Option<NaiveDate> {
    if forward {
        date.checked_add_days(Days::new(1))
    } else {
        date.checked_sub_days(Days::new(1))
    }
}
