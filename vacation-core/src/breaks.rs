//! Vacation breaks: spans of consecutive days off and how they are scored.

use std::cmp::Ordering;

use chrono::NaiveDate;
use thiserror::Error;

/// A contiguous span of days off, part of which is paid for with PTO.
///
/// `[begin, end]` covers the whole time away including surrounding weekends
/// and holidays; `[begin_pto, end_pto]` is the stretch that consumes the PTO
/// balance. Breaks are immutable once built.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use vacation_core::Break;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let friday = NaiveDate::from_ymd_opt(2025, 4, 18).ok_or("date")?;
/// let monday = NaiveDate::from_ymd_opt(2025, 4, 21).ok_or("date")?;
/// let bridge = Break::new(friday, monday, monday, monday, 1, 0.5)?;
/// assert_eq!(bridge.total(), 4);
/// assert_eq!(bridge.roi(), 4.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Break {
    begin: NaiveDate,
    end: NaiveDate,
    begin_pto: NaiveDate,
    end_pto: NaiveDate,
    days_pto: u32,
    total: u32,
    roi: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    w_roi: f64,
}

/// Errors returned by [`Break::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakError {
    /// The break ends before it begins.
    #[error("break ends on {end} before it begins on {begin}")]
    InvertedSpan {
        /// First day off.
        begin: NaiveDate,
        /// Last day off.
        end: NaiveDate,
    },
    /// The PTO stretch is not contained in the break.
    #[error("PTO stretch {begin_pto}..={end_pto} lies outside break {begin}..={end}")]
    PtoOutsideSpan {
        /// First day off.
        begin: NaiveDate,
        /// Last day off.
        end: NaiveDate,
        /// First PTO day.
        begin_pto: NaiveDate,
        /// Last PTO day.
        end_pto: NaiveDate,
    },
    /// A break must spend at least one PTO day.
    #[error("break must consume at least one PTO day")]
    NoPtoDays,
    /// More PTO days were claimed than the PTO stretch holds.
    #[error("{days_pto} PTO days do not fit in a stretch of {stretch} days")]
    PtoExceedsStretch {
        /// PTO days claimed.
        days_pto: u32,
        /// Length of the PTO stretch.
        stretch: u32,
    },
}

impl Break {
    /// Validate and construct a break, deriving `total`, `roi` and `w_roi`.
    ///
    /// `alpha` weighs absolute length against efficiency:
    /// `w_roi = alpha * total + (1 - alpha) * roi`.
    pub fn new(
        begin: NaiveDate,
        end: NaiveDate,
        begin_pto: NaiveDate,
        end_pto: NaiveDate,
        days_pto: u32,
        alpha: f64,
    ) -> Result<Self, BreakError> {
        if end < begin {
            return Err(BreakError::InvertedSpan { begin, end });
        }
        if begin_pto < begin || end_pto > end || end_pto < begin_pto {
            return Err(BreakError::PtoOutsideSpan {
                begin,
                end,
                begin_pto,
                end_pto,
            });
        }
        if days_pto == 0 {
            return Err(BreakError::NoPtoDays);
        }
        let stretch = inclusive_days(begin_pto, end_pto);
        if days_pto > stretch {
            return Err(BreakError::PtoExceedsStretch { days_pto, stretch });
        }
        let total = inclusive_days(begin, end);
        let (roi, w_roi) = score(total, days_pto, alpha);
        Ok(Self {
            begin,
            end,
            begin_pto,
            end_pto,
            days_pto,
            total,
            roi,
            w_roi,
        })
    }

    /// First day off.
    #[must_use]
    pub const fn begin(&self) -> NaiveDate {
        self.begin
    }

    /// Last day off.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// First day paid for with PTO.
    #[must_use]
    pub const fn begin_pto(&self) -> NaiveDate {
        self.begin_pto
    }

    /// Last day paid for with PTO.
    #[must_use]
    pub const fn end_pto(&self) -> NaiveDate {
        self.end_pto
    }

    /// PTO days consumed.
    #[must_use]
    pub const fn days_pto(&self) -> u32 {
        self.days_pto
    }

    /// Days off in `[begin, end]`.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Days off gained per PTO day spent.
    #[must_use]
    pub const fn roi(&self) -> f64 {
        self.roi
    }

    /// Ranking score blending length and efficiency.
    #[must_use]
    pub const fn w_roi(&self) -> f64 {
        self.w_roi
    }

    /// Whether the break covers `date`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.begin..=self.end).contains(&date)
    }
}

/// Whether two breaks share at least one day.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use vacation_core::{Break, overlaps};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).ok_or("date");
/// let a = Break::new(day(1)?, day(5)?, day(2)?, day(3)?, 2, 0.5)?;
/// let b = Break::new(day(5)?, day(9)?, day(6)?, day(7)?, 2, 0.5)?;
/// let c = Break::new(day(6)?, day(9)?, day(6)?, day(7)?, 2, 0.5)?;
/// assert!(overlaps(&a, &b));
/// assert!(!overlaps(&a, &c));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn overlaps(a: &Break, b: &Break) -> bool {
    a.begin <= b.end && b.begin <= a.end
}

/// Days strictly between two breaks.
///
/// The result does not depend on argument order. Adjacent breaks are zero
/// days apart; overlapping breaks yield a negative value.
#[must_use]
pub fn gap_days(a: &Break, b: &Break) -> i64 {
    let (earlier, later) = if (a.begin, a.end) <= (b.begin, b.end) {
        (a, b)
    } else {
        (b, a)
    };
    later.begin.signed_duration_since(earlier.end).num_days() - 1
}

/// Candidate ranking: highest `w_roi` first, then longer `total`, then
/// cheaper `days_pto`.
#[must_use]
pub fn rank_order(a: &Break, b: &Break) -> Ordering {
    b.w_roi
        .total_cmp(&a.w_roi)
        .then_with(|| b.total.cmp(&a.total))
        .then_with(|| a.days_pto.cmp(&b.days_pto))
}

fn inclusive_days(first: NaiveDate, last: NaiveDate) -> u32 {
    let span = last.signed_duration_since(first).num_days().saturating_add(1);
    u32::try_from(span).unwrap_or(u32::MAX)
}

#[expect(
    clippy::float_arithmetic,
    reason = "return on investment is a ratio of day counts"
)]
fn score(total: u32, days_pto: u32, alpha: f64) -> (f64, f64) {
    let total = f64::from(total);
    let roi = total / f64::from(days_pto);
    (roi, alpha.mul_add(total, (1.0 - alpha) * roi))
}
