//! Planning constraints shared by the candidate generator and selectors.

use thiserror::Error;

/// How the final plan must relate to the PTO balance and period limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SelectionMode {
    /// Plans spend the whole balance in exactly `max_periods` breaks.
    #[default]
    Exact,
    /// Plans spend at most the balance in at most `max_periods` breaks.
    AtMost,
}

/// Limits a vacation plan must respect.
///
/// # Examples
/// ```
/// use vacation_core::Constraints;
///
/// let constraints = Constraints {
///     vacation_days: 10,
///     max_periods: 2,
///     ..Constraints::default()
/// };
/// constraints.validate()?;
/// assert_eq!(constraints.max_pto_per_break(), 10);
/// # Ok::<(), vacation_core::ConstraintsError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraints {
    /// PTO balance available for the whole plan.
    pub vacation_days: u32,
    /// Maximum number of separate breaks.
    pub max_periods: u32,
    /// Fewest PTO days a single break may use.
    pub min_days_per_break: u32,
    /// Most PTO days a single break may use; `0` means `vacation_days`.
    pub max_days_per_break: u32,
    /// Fewest total days off a break must yield.
    pub min_total_days_off: u32,
    /// Fewest days that must separate two breaks.
    pub min_gap_days: u32,
    /// Whether weekends and holidays inside the PTO stretch cost PTO.
    pub holiday_as_pto: bool,
    /// Number of alternative plans to return.
    pub top_n: usize,
    /// Weight of break length against efficiency, in `[0, 10]`.
    pub alpha: f64,
    /// Exact or at-most use of balance and periods.
    pub selection_mode: SelectionMode,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            vacation_days: 30,
            max_periods: 3,
            min_days_per_break: 1,
            max_days_per_break: 0,
            min_total_days_off: 1,
            min_gap_days: 0,
            holiday_as_pto: true,
            top_n: 1,
            alpha: 0.5,
            selection_mode: SelectionMode::Exact,
        }
    }
}

/// Errors returned by [`Constraints::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintsError {
    /// A count that must be positive was zero.
    #[error("{field} must be at least 1")]
    Zero {
        /// Name of the offending field.
        field: &'static str,
    },
    /// Alpha was outside `[0, 10]` or not finite.
    #[error("alpha must lie in [0, 10], got {alpha}")]
    AlphaOutOfRange {
        /// The rejected value.
        alpha: f64,
    },
}

impl Constraints {
    /// Largest accepted alpha.
    pub const MAX_ALPHA: f64 = 10.0;

    /// Check that every count is usable and alpha is in range.
    ///
    /// Contradictory but well-formed limits (for example a per-break minimum
    /// above the maximum) are accepted; selectors answer them with empty
    /// plans.
    pub fn validate(&self) -> Result<(), ConstraintsError> {
        let positive = [
            ("vacation_days", self.vacation_days),
            ("max_vac_periods", self.max_periods),
            ("min_vac_days_per_break", self.min_days_per_break),
            ("min_total_days_off", self.min_total_days_off),
        ];
        if let Some((field, _)) = positive.iter().find(|(_, value)| *value == 0) {
            return Err(ConstraintsError::Zero { field: *field });
        }
        if self.top_n == 0 {
            return Err(ConstraintsError::Zero {
                field: "top_n_suggestions",
            });
        }
        if !(0.0..=Self::MAX_ALPHA).contains(&self.alpha) {
            return Err(ConstraintsError::AlphaOutOfRange { alpha: self.alpha });
        }
        Ok(())
    }

    /// Effective per-break PTO ceiling.
    #[must_use]
    pub const fn max_pto_per_break(&self) -> u32 {
        if self.max_days_per_break == 0 {
            self.vacation_days
        } else {
            self.max_days_per_break
        }
    }

    /// Whether any break can satisfy the per-break PTO limits.
    #[must_use]
    pub const fn is_satisfiable(&self) -> bool {
        self.min_days_per_break <= self.max_pto_per_break()
            && self.min_days_per_break <= self.vacation_days
    }

    /// Whether the exact-usage rules apply.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.selection_mode == SelectionMode::Exact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_valid() {
        assert!(Constraints::default().validate().is_ok());
    }

    #[rstest]
    #[case(Constraints { vacation_days: 0, ..Constraints::default() }, "vacation_days")]
    #[case(Constraints { max_periods: 0, ..Constraints::default() }, "max_vac_periods")]
    #[case(Constraints { min_days_per_break: 0, ..Constraints::default() }, "min_vac_days_per_break")]
    #[case(Constraints { min_total_days_off: 0, ..Constraints::default() }, "min_total_days_off")]
    #[case(Constraints { top_n: 0, ..Constraints::default() }, "top_n_suggestions")]
    fn zero_counts_name_the_field(#[case] constraints: Constraints, #[case] expected: &str) {
        match constraints.validate() {
            Err(ConstraintsError::Zero { field }) => assert_eq!(field, expected),
            other => panic!("expected Zero error, found {other:?}"),
        }
    }

    #[rstest]
    #[case(-0.1)]
    #[case(10.5)]
    #[case(f64::NAN)]
    fn alpha_outside_range_is_rejected(#[case] alpha: f64) {
        let constraints = Constraints {
            alpha,
            ..Constraints::default()
        };
        assert!(matches!(
            constraints.validate(),
            Err(ConstraintsError::AlphaOutOfRange { .. })
        ));
    }

    #[rstest]
    #[case(0, 30)]
    #[case(7, 7)]
    fn zero_max_per_break_means_balance(#[case] max: u32, #[case] expected: u32) {
        let constraints = Constraints {
            max_days_per_break: max,
            ..Constraints::default()
        };
        assert_eq!(constraints.max_pto_per_break(), expected);
    }

    #[rstest]
    fn inverted_per_break_limits_are_unsatisfiable_but_valid() {
        let constraints = Constraints {
            min_days_per_break: 8,
            max_days_per_break: 4,
            ..Constraints::default()
        };
        assert!(constraints.validate().is_ok());
        assert!(!constraints.is_satisfiable());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn selection_mode_uses_snake_case_names() {
        let json = serde_json::to_string(&SelectionMode::AtMost).expect("serialisable mode");
        assert_eq!(json, "\"at_most\"");
        let parsed: SelectionMode = serde_json::from_str("\"exact\"").expect("known mode");
        assert_eq!(parsed, SelectionMode::Exact);
    }
}
