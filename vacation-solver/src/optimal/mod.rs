//! Exact plan selection by dynamic programming.
//!
//! Candidates are ordered by end date so that, for each candidate `i`, every
//! break that may precede it in a plan lies in a prefix of the ordering. The
//! table `dp[i][p][k]` keeps the best `top_n` plans built from the first `i`
//! candidates that use exactly `p` PTO days in exactly `k` breaks; each cell
//! merges "skip candidate `i`" with "take candidate `i` after the last
//! compatible prefix".

use std::cmp::Reverse;

use chrono::{Days, NaiveDate};
use vacation_core::{Break, Constraints, Plan, SelectError, Selector};

/// Selector returning the highest-scoring plans.
///
/// A plan's score is its total number of days off. In
/// [`SelectionMode::Exact`](vacation_core::SelectionMode::Exact) only plans
/// spending the whole balance in exactly `max_periods` breaks qualify; in
/// [`SelectionMode::AtMost`](vacation_core::SelectionMode::AtMost) any
/// non-empty plan within both limits does.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use vacation_core::{Break, Constraints, Selector};
/// use vacation_solver::OptimalSelector;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let day = |m, d| NaiveDate::from_ymd_opt(2025, m, d).ok_or("date");
/// let easter = Break::new(day(4, 14)?, day(4, 21)?, day(4, 14)?, day(4, 17)?, 4, 0.5)?;
/// let summer = Break::new(day(7, 5)?, day(7, 13)?, day(7, 7)?, day(7, 11)?, 5, 0.5)?;
/// let constraints = Constraints {
///     vacation_days: 9,
///     max_periods: 2,
///     ..Constraints::default()
/// };
/// let plans = OptimalSelector::new().select(&[summer, easter], &constraints)?;
/// assert_eq!(plans[0].days_pto(), 9);
/// assert_eq!(plans[0].total_days_off(), 17);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalSelector;

impl OptimalSelector {
    /// Construct the selector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Selector for OptimalSelector {
    fn select(
        &self,
        candidates: &[Break],
        constraints: &Constraints,
    ) -> Result<Vec<Plan>, SelectError> {
        constraints.validate()?;
        let mut ordered: Vec<&Break> = candidates
            .iter()
            .filter(|br| crate::fits_break_limits(br, constraints))
            .collect();
        ordered.sort_by_key(|br| (br.end(), br.begin(), br.days_pto()));

        let Some(table) = Table::build(&ordered, constraints) else {
            log::warn!(
                "no combination of {} candidates can spend {} PTO days in {} breaks",
                ordered.len(),
                constraints.vacation_days,
                constraints.max_periods
            );
            return Ok(Vec::new());
        };
        let plans: Vec<Plan> = table
            .best(constraints)
            .into_iter()
            .map(|entry| {
                Plan::new(
                    entry
                        .path
                        .iter()
                        .filter_map(|index| ordered.get(*index))
                        .map(|br| (*br).clone())
                        .collect(),
                )
            })
            .collect();
        log::debug!(
            "optimal selector kept {} plans from {} candidates",
            plans.len(),
            ordered.len()
        );
        Ok(plans)
    }
}

/// A partial plan: its score and the ordered candidate indices it uses.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    score: u32,
    path: Vec<usize>,
}

/// Flattened `dp[row][p][k]` table. Row `i` covers the first `i` candidates.
struct Table {
    rows: usize,
    budget: usize,
    periods: usize,
    cells: Vec<Vec<Entry>>,
}

impl Table {
    /// Fill the table, or return `None` when the exact target is out of reach.
    fn build(ordered: &[&Break], constraints: &Constraints) -> Option<Self> {
        let spendable: u64 = ordered.iter().map(|br| u64::from(br.days_pto())).sum();
        let wanted_days = u64::from(constraints.vacation_days);
        let wanted_periods = usize::try_from(constraints.max_periods).unwrap_or(usize::MAX);
        if constraints.is_exact() && (wanted_days > spendable || wanted_periods > ordered.len()) {
            return None;
        }
        let budget = usize::try_from(wanted_days.min(spendable)).ok()?;
        let periods = wanted_periods.min(ordered.len());
        let top_n = constraints.top_n;

        let rows = ordered.len() + 1;
        let mut table = Self {
            rows,
            budget,
            periods,
            cells: vec![Vec::new(); rows * (budget + 1) * (periods + 1)],
        };
        if let Some(origin) = table.cell_mut(0, 0, 0) {
            origin.push(Entry {
                score: 0,
                path: Vec::new(),
            });
        }

        let ends: Vec<_> = ordered.iter().map(|br| br.end()).collect();
        for (offset, br) in ordered.iter().enumerate() {
            let row = offset + 1;
            let compat = compatible_prefix(&ends, br, constraints.min_gap_days);
            let cost = usize::try_from(br.days_pto()).unwrap_or(usize::MAX);
            for p in 0..=budget {
                for k in 0..=periods {
                    let mut merged = table.cell(row - 1, p, k).to_vec();
                    if k > 0 && p >= cost {
                        merged.extend(table.cell(compat, p - cost, k - 1).iter().map(|prev| {
                            let mut path = prev.path.clone();
                            path.push(offset);
                            Entry {
                                score: prev.score + br.total(),
                                path,
                            }
                        }));
                    }
                    merged.sort_by_key(|entry| Reverse(entry.score));
                    merged.truncate(top_n);
                    if let Some(cell) = table.cell_mut(row, p, k) {
                        *cell = merged;
                    }
                }
            }
        }
        Some(table)
    }

    /// Read the final row according to the selection mode.
    fn best(&self, constraints: &Constraints) -> Vec<Entry> {
        let last = self.rows - 1;
        if constraints.is_exact() {
            return self.cell(last, self.budget, self.periods).to_vec();
        }
        let mut found: Vec<Entry> = (0..=self.budget)
            .flat_map(|p| (1..=self.periods).map(move |k| (p, k)))
            .flat_map(|(p, k)| self.cell(last, p, k).iter().cloned())
            .collect();
        found.sort_by_key(|entry| Reverse(entry.score));
        found.truncate(constraints.top_n);
        found
    }

    const fn index(&self, row: usize, p: usize, k: usize) -> usize {
        (row * (self.budget + 1) + p) * (self.periods + 1) + k
    }

    fn cell(&self, row: usize, p: usize, k: usize) -> &[Entry] {
        self.cells
            .get(self.index(row, p, k))
            .map_or(&[][..], Vec::as_slice)
    }

    fn cell_mut(&mut self, row: usize, p: usize, k: usize) -> Option<&mut Vec<Entry>> {
        let index = self.index(row, p, k);
        self.cells.get_mut(index)
    }
}

/// Number of leading candidates that end more than `min_gap` days before
/// `br` begins, i.e. the table row holding every admissible predecessor.
fn compatible_prefix(ends: &[NaiveDate], br: &Break, min_gap: u32) -> usize {
    br.begin()
        .checked_sub_days(Days::new(u64::from(min_gap)))
        .map_or(0, |threshold| ends.partition_point(|end| *end < threshold))
}
