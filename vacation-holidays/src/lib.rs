//! Rule-based public holiday tables for the vacation extender.
//!
//! [`RuleHolidayProvider`] implements
//! [`HolidayProvider`](vacation_core::HolidayProvider) from recurring
//! [`HolidayRule`]s: fixed dates, offsets from Western Easter, and the n-th or
//! last weekday of a month. Built-in tables cover Brazil (with São Paulo, Rio
//! de Janeiro and Minas Gerais), the United States (with California, New York
//! and Texas), Portugal and England.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeSet;
//! use chrono::NaiveDate;
//! use vacation_core::{HolidayProvider, Locale};
//! use vacation_holidays::RuleHolidayProvider;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = RuleHolidayProvider::new();
//! let locale = Locale::new("BR").with_subdivision("SP");
//! let dates = provider.holidays_for(&locale, &BTreeSet::from([2025]))?;
//! let good_friday = NaiveDate::from_ymd_opt(2025, 4, 18).ok_or("date")?;
//! assert!(dates.contains(&good_friday));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod provider;
mod rule;
mod tables;

pub use provider::{CountryRules, NamedHoliday, RuleHolidayProvider};
pub use rule::{Holiday, HolidayRule, Observance, easter_sunday};
