//! Public holiday lookup for a locale.
//!
//! The engine treats holiday tables as an external collaborator: a
//! [`HolidayProvider`] receives a [`Locale`] and the calendar years a plan
//! spans, and answers with the set of public holiday dates.

mod error;
mod provider;

pub use error::LocaleError;
pub use provider::{HolidayProvider, Locale};
