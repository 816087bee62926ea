//! The seam between candidate generation and plan selection.

use thiserror::Error;

use crate::{Break, Constraints, ConstraintsError, Plan};

/// Errors returned by [`Selector::select`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    /// The constraints failed [`Constraints::validate`].
    #[error("invalid constraints: {0}")]
    InvalidConstraints(#[from] ConstraintsError),
}

/// Choose non-overlapping breaks from a ranked candidate list.
///
/// Implementations return at most `constraints.top_n` plans, best first.
/// Infeasible but valid constraints yield an empty list rather than an
/// error, and invalid constraints yield [`SelectError::InvalidConstraints`]
/// rather than a panic. Selectors keep no state between calls and must be
/// `Send + Sync` so independent runs can share one instance.
pub trait Selector: Send + Sync {
    /// Select plans from `candidates` under `constraints`.
    fn select(
        &self,
        candidates: &[Break],
        constraints: &Constraints,
    ) -> Result<Vec<Plan>, SelectError>;
}
