//! Facade crate for the vacation extender.
//!
//! This crate re-exports the core planning types and exposes the selectors
//! and the rule-based holiday provider behind feature flags.
//!
//! # Examples
//!
//! ```
//! # #[cfg(all(feature = "solver", feature = "holidays"))]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use chrono::NaiveDate;
//! use vacation_extender::{
//!     Calendar, CalendarRequest, Constraints, Locale, OptimalSelector, RuleHolidayProvider,
//!     Selector, generate_candidates,
//! };
//!
//! let first = NaiveDate::from_ymd_opt(2026, 1, 1).ok_or("date")?;
//! let last = NaiveDate::from_ymd_opt(2026, 12, 31).ok_or("date")?;
//! let request = CalendarRequest::new(Locale::new("BR").with_subdivision("SP"), first, last);
//! let calendar = Calendar::new(request, &RuleHolidayProvider::new())?;
//! let constraints = Constraints {
//!     vacation_days: 10,
//!     max_periods: 2,
//!     ..Constraints::default()
//! };
//! let candidates = generate_candidates(&calendar, &constraints);
//! let plans = OptimalSelector::new().select(&candidates, &constraints)?;
//! assert!(plans.iter().all(|plan| plan.days_pto() == 10 && plan.len() == 2));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "solver", feature = "holidays")))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use vacation_core::{
    Break, BreakError, Calendar, CalendarDay, CalendarError, CalendarRequest, Constraints,
    ConstraintsError, DayKind, HolidayProvider, Locale, LocaleError, Plan, SelectError,
    SelectionMode, Selector, WeekendDays, generate_candidates,
};

#[cfg(feature = "solver")]
pub use vacation_solver::{GreedyConfig, GreedySelector, OptimalSelector};

#[cfg(feature = "holidays")]
pub use vacation_holidays::{CountryRules, Holiday, HolidayRule, RuleHolidayProvider};
