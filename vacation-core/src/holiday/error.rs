use thiserror::Error;

/// Errors from [`crate::holiday::HolidayProvider::holidays_for`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The provider has no holiday table for the country.
    #[error("no holiday table for country {country:?}")]
    UnsupportedCountry {
        /// ISO country code as supplied by the caller.
        country: String,
    },
    /// The country is known but the subdivision is not.
    #[error("no holiday table for subdivision {subdivision:?} of country {country:?}")]
    UnsupportedSubdivision {
        /// ISO country code as supplied by the caller.
        country: String,
        /// Subdivision code as supplied by the caller.
        subdivision: String,
    },
    /// A requested year lies outside the range the provider can compute.
    #[error("holidays for {country:?} are unavailable in year {year}")]
    UnsupportedYear {
        /// ISO country code as supplied by the caller.
        country: String,
        /// The offending year.
        year: i32,
    },
}
