//! Holiday provider trait and the locale it is keyed by.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use super::error::LocaleError;

/// Country and optional subdivision whose public holidays apply.
///
/// # Examples
/// ```
/// use vacation_core::Locale;
///
/// let locale = Locale::new("BR").with_subdivision("SP");
/// assert_eq!(locale.country(), "BR");
/// assert_eq!(locale.subdivision(), Some("SP"));
/// assert_eq!(locale.to_string(), "BR-SP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locale {
    country: String,
    subdivision: Option<String>,
    include_observed: bool,
}

impl Locale {
    /// Construct a locale for a whole country.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            subdivision: None,
            include_observed: false,
        }
    }

    /// Restrict the locale to a subdivision (state, province, region).
    #[must_use]
    pub fn with_subdivision(mut self, subdivision: impl Into<String>) -> Self {
        self.subdivision = Some(subdivision.into());
        self
    }

    /// Request observed dates for holidays that fall on a weekend.
    #[must_use]
    pub const fn with_observed(mut self, include_observed: bool) -> Self {
        self.include_observed = include_observed;
        self
    }

    /// ISO country code.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Subdivision code, when one was supplied.
    #[must_use]
    pub fn subdivision(&self) -> Option<&str> {
        self.subdivision.as_deref()
    }

    /// Whether weekend holidays should also yield their observed weekday.
    #[must_use]
    pub const fn include_observed(&self) -> bool {
        self.include_observed
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subdivision {
            Some(subdivision) => write!(f, "{}-{subdivision}", self.country),
            None => f.write_str(&self.country),
        }
    }
}

/// Resolve public holidays for a locale.
///
/// Implementations return every public holiday of `locale` that falls in one
/// of `years`. Unknown countries or subdivisions must be reported through
/// [`LocaleError`] rather than an empty set, so callers can tell a holiday-free
/// calendar from a typo. Providers are shared across runs and must therefore
/// be `Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use chrono::NaiveDate;
/// use vacation_core::{HolidayProvider, Locale, LocaleError};
///
/// struct NewYearOnly;
///
/// impl HolidayProvider for NewYearOnly {
///     fn holidays_for(
///         &self,
///         _locale: &Locale,
///         years: &BTreeSet<i32>,
///     ) -> Result<BTreeSet<NaiveDate>, LocaleError> {
///         Ok(years
///             .iter()
///             .filter_map(|year| NaiveDate::from_ymd_opt(*year, 1, 1))
///             .collect())
///     }
/// }
///
/// let years = BTreeSet::from([2025, 2026]);
/// let dates = NewYearOnly.holidays_for(&Locale::new("XX"), &years)?;
/// assert_eq!(dates.len(), 2);
/// # Ok::<(), LocaleError>(())
/// ```
pub trait HolidayProvider: Send + Sync {
    /// Return the public holidays of `locale` in `years`.
    fn holidays_for(
        &self,
        locale: &Locale,
        years: &BTreeSet<i32>,
    ) -> Result<BTreeSet<NaiveDate>, LocaleError>;
}
