//! Plan selectors for the vacation extender.
//!
//! This crate provides the two [`Selector`](vacation_core::Selector)
//! implementations. [`GreedySelector`] walks a priority queue of candidates
//! with bounded backtracking and is fast enough for interactive use.
//! [`OptimalSelector`] runs a dynamic programme over candidates ordered by end
//! date and returns the best `top_n` plans for the requested PTO balance and
//! number of breaks.
//!
//! Both selectors are stateless between calls: every invocation owns its
//! queue, retry counters and tables.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod greedy;
mod optimal;

pub use greedy::{GreedyConfig, GreedySelector};
pub use optimal::OptimalSelector;

use vacation_core::{Break, Constraints};

/// Whether `br` respects the per-break limits in `constraints`.
fn fits_break_limits(br: &Break, constraints: &Constraints) -> bool {
    (constraints.min_days_per_break..=constraints.max_pto_per_break()).contains(&br.days_pto())
        && br.total() >= constraints.min_total_days_off
}
