//! Property-based tests for both selectors.
//!
//! # Invariants tested
//!
//! - **Budget compliance:** no plan spends more than `vacation_days`.
//! - **Period limit:** no plan holds more than `max_periods` breaks.
//! - **Separation:** breaks in a plan never overlap and keep `min_gap_days`.
//! - **Optimality:** under exact usage, the optimal best plan is at least as
//!   long as every exact greedy plan.
//! - **Idempotence:** repeated runs on the same input agree.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use vacation_core::test_support::{MemoryHolidayProvider, date};
use vacation_core::{
    Break, Calendar, CalendarRequest, Constraints, Locale, Plan, SelectionMode, Selector, gap_days,
    generate_candidates,
};
use vacation_solver::{GreedySelector, OptimalSelector};

const HORIZON_DAYS: u64 = 90;

fn offset(days: u64) -> NaiveDate {
    date(2025, 1, 6)
        .checked_add_days(Days::new(days))
        .expect("offset inside the supported range")
}

fn scenario_strategy() -> impl Strategy<Value = (Vec<Break>, Constraints)> {
    (
        prop::collection::btree_set(0..HORIZON_DAYS, 0..10),
        prop::collection::btree_set(0..HORIZON_DAYS, 0..5),
        2_u32..12,
        1_u32..4,
        0_u32..6,
        0_u32..15,
        any::<bool>(),
        1_usize..4,
        prop_oneof![Just(SelectionMode::Exact), Just(SelectionMode::AtMost)],
    )
        .prop_map(
            |(
                holidays,
                forbidden,
                vacation_days,
                max_periods,
                max_days_per_break,
                min_gap_days,
                holiday_as_pto,
                top_n,
                selection_mode,
            )| {
                let provider = MemoryHolidayProvider::new(holidays.into_iter().map(offset));
                let request =
                    CalendarRequest::new(Locale::new("XX"), offset(0), offset(HORIZON_DAYS - 1))
                        .with_forbidden(forbidden.into_iter().map(offset));
                let calendar = Calendar::new(request, &provider).expect("calendar");
                let constraints = Constraints {
                    vacation_days,
                    max_periods,
                    max_days_per_break,
                    min_gap_days,
                    holiday_as_pto,
                    top_n,
                    selection_mode,
                    ..Constraints::default()
                };
                (generate_candidates(&calendar, &constraints), constraints)
            },
        )
}

fn check_feasible(plan: &Plan, constraints: &Constraints) -> Result<(), TestCaseError> {
    prop_assert!(plan.days_pto() <= constraints.vacation_days);
    prop_assert!(plan.len() <= usize::try_from(constraints.max_periods).expect("small"));
    prop_assert!(!plan.is_empty());
    let breaks = plan.breaks();
    for (i, earlier) in breaks.iter().enumerate() {
        for later in breaks.iter().skip(i + 1) {
            prop_assert!(gap_days(earlier, later) >= i64::from(constraints.min_gap_days));
        }
    }
    Ok(())
}

fn is_exact(plan: &Plan, constraints: &Constraints) -> bool {
    plan.days_pto() == constraints.vacation_days
        && u32::try_from(plan.len()).ok() == Some(constraints.max_periods)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn plans_respect_every_constraint((candidates, constraints) in scenario_strategy()) {
        let selectors: [&dyn Selector; 2] = [&GreedySelector::new(), &OptimalSelector::new()];
        for selector in selectors {
            let plans = selector.select(&candidates, &constraints).expect("valid constraints");
            prop_assert!(plans.len() <= constraints.top_n);
            let mut distinct = BTreeSet::new();
            for plan in &plans {
                check_feasible(plan, &constraints)?;
                let spans: Vec<_> = plan.breaks().iter().map(|br| (br.begin(), br.end())).collect();
                prop_assert!(distinct.insert(spans));
            }
        }
    }

    #[test]
    fn optimal_dominates_exact_greedy_plans((candidates, constraints) in scenario_strategy()) {
        let constraints = Constraints { selection_mode: SelectionMode::Exact, ..constraints };
        let greedy = GreedySelector::new().select(&candidates, &constraints).expect("valid");
        let optimal = OptimalSelector::new().select(&candidates, &constraints).expect("valid");
        for plan in greedy.iter().filter(|plan| is_exact(plan, &constraints)) {
            let best = optimal.first();
            prop_assert!(best.is_some(), "greedy found an exact plan the optimal selector missed");
            prop_assert!(best.map_or(0, Plan::total_days_off) >= plan.total_days_off());
        }
        for plan in &optimal {
            prop_assert!(is_exact(plan, &constraints));
        }
    }

    #[test]
    fn selection_is_idempotent((candidates, constraints) in scenario_strategy()) {
        let greedy = GreedySelector::new();
        prop_assert_eq!(
            greedy.select(&candidates, &constraints).expect("valid"),
            greedy.select(&candidates, &constraints).expect("valid")
        );
        let optimal = OptimalSelector::new();
        prop_assert_eq!(
            optimal.select(&candidates, &constraints).expect("valid"),
            optimal.select(&candidates, &constraints).expect("valid")
        );
    }
}
