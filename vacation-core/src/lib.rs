//! Core domain types for the vacation extender engine.
//!
//! The crate classifies every day of a planning horizon, synthesises
//! candidate breaks around holidays and defines the [`Selector`] seam that
//! turns candidates into ranked [`Plan`]s. Constructors validate their input
//! and return `Result` so misconfiguration surfaces before any search runs.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use vacation_core::{
//!     Calendar, CalendarRequest, Constraints, HolidayProvider, Locale, LocaleError,
//!     generate_candidates,
//! };
//! use std::collections::BTreeSet;
//!
//! struct NoHolidays;
//!
//! impl HolidayProvider for NoHolidays {
//!     fn holidays_for(
//!         &self,
//!         _locale: &Locale,
//!         _years: &BTreeSet<i32>,
//!     ) -> Result<BTreeSet<NaiveDate>, LocaleError> {
//!         Ok(BTreeSet::new())
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let first = NaiveDate::from_ymd_opt(2025, 3, 3).ok_or("date")?;
//! let last = NaiveDate::from_ymd_opt(2025, 3, 9).ok_or("date")?;
//! let tuesday = NaiveDate::from_ymd_opt(2025, 3, 4).ok_or("date")?;
//! let request = CalendarRequest::new(Locale::new("XX"), first, last)
//!     .with_custom_holidays([tuesday]);
//! let calendar = Calendar::new(request, &NoHolidays)?;
//! let candidates = generate_candidates(&calendar, &Constraints::default());
//! assert!(candidates.iter().any(|b| b.days_pto() == 1 && b.total() == 2));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod breaks;
mod calendar;
mod constraints;
mod generator;
pub mod holiday;
mod plan;
mod selector;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use breaks::{Break, BreakError, gap_days, overlaps, rank_order};
pub use calendar::{Calendar, CalendarDay, CalendarError, CalendarRequest, DayKind, WeekendDays};
pub use constraints::{Constraints, ConstraintsError, SelectionMode};
pub use generator::generate_candidates;
pub use holiday::{HolidayProvider, Locale, LocaleError};
pub use plan::Plan;
pub use selector::{SelectError, Selector};
