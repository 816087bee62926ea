//! Selected vacation plans.

use crate::Break;

/// A set of non-overlapping breaks chosen by a [`Selector`](crate::Selector).
///
/// Breaks are kept in chronological order regardless of the order in which
/// the selector accepted them.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use vacation_core::{Break, Plan};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let day = |m, d| NaiveDate::from_ymd_opt(2025, m, d).ok_or("date");
/// let spring = Break::new(day(4, 18)?, day(4, 21)?, day(4, 21)?, day(4, 21)?, 1, 0.5)?;
/// let winter = Break::new(day(12, 24)?, day(12, 28)?, day(12, 26)?, day(12, 26)?, 1, 0.5)?;
/// let plan = Plan::new(vec![winter, spring]);
/// assert_eq!(plan.breaks()[0].begin(), day(4, 18)?);
/// assert_eq!(plan.days_pto(), 2);
/// assert_eq!(plan.total_days_off(), 9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Plan {
    breaks: Vec<Break>,
    days_pto: u32,
    total_days_off: u32,
}

impl Plan {
    /// Build a plan from `breaks`, ordering them by start date.
    #[must_use]
    pub fn new(mut breaks: Vec<Break>) -> Self {
        breaks.sort_by_key(|br| (br.begin(), br.end()));
        let days_pto = breaks.iter().map(Break::days_pto).sum();
        let total_days_off = breaks.iter().map(Break::total).sum();
        Self {
            breaks,
            days_pto,
            total_days_off,
        }
    }

    /// The breaks in chronological order.
    #[must_use]
    pub fn breaks(&self) -> &[Break] {
        &self.breaks
    }

    /// PTO days spent across all breaks.
    #[must_use]
    pub const fn days_pto(&self) -> u32 {
        self.days_pto
    }

    /// Days off gained across all breaks. This is the plan's score.
    #[must_use]
    pub const fn total_days_off(&self) -> u32 {
        self.total_days_off
    }

    /// Number of breaks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    /// Whether the plan holds no breaks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }
}
