//! Greedy plan selection with bounded backtracking.
//!
//! Candidates sit in a min-heap keyed by `(tries, -w_roi, -total, days_pto)`.
//! The best candidate is accepted when it fits the remaining balance and keeps
//! its distance from already accepted breaks; otherwise it goes back into the
//! queue with its retry counter bumped. Once the whole queue has been cycled
//! without progress, the most recent acceptance is undone and the current
//! plan is recorded as one alternative.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use vacation_core::{Break, Constraints, Plan, SelectError, Selector, gap_days};

/// Configuration for [`GreedySelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyConfig {
    /// Most times a single candidate may be taken from the queue. A
    /// candidate that would exceed this is dropped instead of requeued.
    pub max_attempts: u32,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self { max_attempts: 5 }
    }
}

/// Fast heuristic selector.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use vacation_core::{Break, Constraints, Selector};
/// use vacation_solver::GreedySelector;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let day = |d| NaiveDate::from_ymd_opt(2025, 6, d).ok_or("date");
/// let week = Break::new(day(7)?, day(15)?, day(9)?, day(13)?, 5, 0.5)?;
/// let constraints = Constraints {
///     vacation_days: 5,
///     max_periods: 1,
///     ..Constraints::default()
/// };
/// let plans = GreedySelector::new().select(&[week.clone()], &constraints)?;
/// assert_eq!(plans.len(), 1);
/// assert_eq!(plans[0].breaks(), &[week]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedySelector {
    config: GreedyConfig,
}

impl GreedySelector {
    /// Construct a selector using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a selector with explicit configuration.
    #[must_use]
    pub const fn with_config(config: GreedyConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &GreedyConfig {
        &self.config
    }
}

impl Selector for GreedySelector {
    fn select(
        &self,
        candidates: &[Break],
        constraints: &Constraints,
    ) -> Result<Vec<Plan>, SelectError> {
        constraints.validate()?;
        if !constraints.is_satisfiable() {
            log::warn!(
                "per-break minimum of {} PTO days exceeds the allowed maximum; no plan possible",
                constraints.min_days_per_break
            );
            return Ok(Vec::new());
        }

        let snapshots = GreedyRun::new(candidates, constraints, self.config).run();
        let plans = finish(snapshots, candidates, constraints);
        log::debug!(
            "greedy selector kept {} plans from {} candidates",
            plans.len(),
            candidates.len()
        );
        Ok(plans)
    }
}

/// Heap key for one candidate. Smaller entries pop first.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    tries: u32,
    w_roi: f64,
    total: u32,
    days_pto: u32,
    index: usize,
}

impl QueueEntry {
    const fn new(br: &Break, index: usize, tries: u32) -> Self {
        Self {
            tries,
            w_roi: br.w_roi(),
            total: br.total(),
            days_pto: br.days_pto(),
            index,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tries
            .cmp(&other.tries)
            .then_with(|| other.w_roi.total_cmp(&self.w_roi))
            .then_with(|| other.total.cmp(&self.total))
            .then_with(|| self.days_pto.cmp(&other.days_pto))
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// State owned by one [`GreedySelector::select`] call.
struct GreedyRun<'a> {
    candidates: &'a [Break],
    constraints: &'a Constraints,
    max_attempts: u32,
    tries: Vec<u32>,
    queue: BinaryHeap<Reverse<QueueEntry>>,
    curr: Vec<usize>,
    days_left: u32,
    ch_tried: bool,
    snapshots: Vec<Vec<usize>>,
}

impl<'a> GreedyRun<'a> {
    fn new(candidates: &'a [Break], constraints: &'a Constraints, config: GreedyConfig) -> Self {
        let queue = candidates
            .iter()
            .enumerate()
            .filter(|(_, br)| crate::fits_break_limits(br, constraints))
            .map(|(index, br)| Reverse(QueueEntry::new(br, index, 1)))
            .collect();
        Self {
            candidates,
            constraints,
            max_attempts: config.max_attempts.max(1),
            tries: vec![1; candidates.len()],
            queue,
            curr: Vec::new(),
            days_left: constraints.vacation_days,
            ch_tried: false,
            snapshots: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Vec<usize>> {
        let candidates = self.candidates;
        while self.days_left > 0 && self.curr.len() < self.period_limit() {
            let Some(Reverse(entry)) = self.queue.pop() else {
                break;
            };
            let Some(br) = candidates.get(entry.index) else {
                continue;
            };

            if let Some(&last) = self.curr.last()
                && self.tries_of(last).saturating_add(1) == entry.tries
            {
                if self.ch_tried {
                    log::trace!("queue cycled twice without progress; stopping");
                    break;
                }
                self.backtrack(last, entry);
                continue;
            }

            if self.constraints.is_exact()
                && self.curr.len() + 1 == self.period_limit()
                && br.days_pto() != self.days_left
            {
                log::trace!(
                    "deferring candidate {}: {} PTO days cannot close the plan with {} left",
                    entry.index,
                    br.days_pto(),
                    self.days_left
                );
                self.ch_tried = false;
                self.requeue(entry.index);
                continue;
            }

            if br.days_pto() > self.days_left || self.conflicts(br) {
                self.ch_tried = false;
                self.requeue(entry.index);
                continue;
            }

            log::trace!(
                "accepting candidate {} ({}..={}, {} PTO days)",
                entry.index,
                br.begin(),
                br.end(),
                br.days_pto()
            );
            self.ch_tried = false;
            self.curr.push(entry.index);
            self.days_left -= br.days_pto();
        }
        self.snapshots.push(self.curr);
        self.snapshots
    }

    fn period_limit(&self) -> usize {
        usize::try_from(self.constraints.max_periods).unwrap_or(usize::MAX)
    }

    fn tries_of(&self, index: usize) -> u32 {
        self.tries.get(index).copied().unwrap_or(u32::MAX)
    }

    /// Undo the last acceptance, keeping the current plan as an alternative.
    ///
    /// The undone break is charged two attempts so it re-enters the queue
    /// behind the candidates of the current cycle.
    fn backtrack(&mut self, last: usize, entry: QueueEntry) {
        log::trace!("backtracking over candidate {last}");
        self.queue.push(Reverse(entry));
        if let Some(tries) = self.tries.get_mut(last) {
            *tries = tries.saturating_add(1);
        }
        self.requeue(last);
        self.snapshots.push(self.curr.clone());
        self.curr.pop();
        if let Some(br) = self.candidates.get(last) {
            self.days_left += br.days_pto();
        }
        self.ch_tried = true;
    }

    /// Bump `index`'s retry counter and push it back, or drop it once it has
    /// used up its attempts.
    fn requeue(&mut self, index: usize) {
        let Some(tries) = self.tries.get_mut(index) else {
            return;
        };
        *tries = tries.saturating_add(1);
        let tries = *tries;
        if tries > self.max_attempts {
            log::trace!("dropping candidate {index} after {} attempts", tries - 1);
            return;
        }
        if let Some(br) = self.candidates.get(index) {
            self.queue.push(Reverse(QueueEntry::new(br, index, tries)));
        }
    }

    /// Whether `br` overlaps an accepted break or sits too close to one.
    fn conflicts(&self, br: &Break) -> bool {
        let min_gap = i64::from(self.constraints.min_gap_days);
        self.curr
            .iter()
            .filter_map(|index| self.candidates.get(*index))
            .any(|accepted| gap_days(accepted, br) < min_gap)
    }
}

/// Turn index snapshots into distinct non-empty plans, best first.
///
/// In exact mode plans that spend the whole balance in exactly
/// `max_periods` breaks rank ahead of partial ones; ties go to the plan with
/// more days off.
fn finish(
    snapshots: Vec<Vec<usize>>,
    candidates: &[Break],
    constraints: &Constraints,
) -> Vec<Plan> {
    let mut seen: Vec<Vec<usize>> = Vec::new();
    let mut plans: Vec<Plan> = Vec::new();
    for mut snapshot in snapshots {
        if snapshot.is_empty() {
            continue;
        }
        snapshot.sort_unstable();
        if seen.contains(&snapshot) {
            continue;
        }
        plans.push(Plan::new(
            snapshot
                .iter()
                .filter_map(|index| candidates.get(*index))
                .cloned()
                .collect(),
        ));
        seen.push(snapshot);
    }
    let partial = |plan: &Plan| constraints.is_exact() && !meets_exact_target(plan, constraints);
    plans.sort_by_key(|plan| (partial(plan), Reverse(plan.total_days_off())));
    plans.truncate(constraints.top_n);
    plans
}

/// Whether `plan` spends the whole balance in exactly `max_periods` breaks.
fn meets_exact_target(plan: &Plan, constraints: &Constraints) -> bool {
    plan.days_pto() == constraints.vacation_days
        && u32::try_from(plan.len()).is_ok_and(|len| len == constraints.max_periods)
}
