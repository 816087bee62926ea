//! Criterion benchmarks for the plan selectors.
//!
//! Measures both selectors on a full-year calendar for increasing PTO
//! balances, which drive the size of the optimal selector's table.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package vacation-solver
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use vacation_core::test_support::{MemoryHolidayProvider, date};
use vacation_core::{Calendar, CalendarRequest, Constraints, Locale, Selector, generate_candidates};
use vacation_solver::{GreedySelector, OptimalSelector};

/// PTO balances to benchmark.
const BALANCES: &[u32] = &[10, 20, 30];

/// Brazilian national holidays for 2025 plus São Paulo's state holiday.
fn calendar() -> Calendar {
    let provider = MemoryHolidayProvider::new([
        date(2025, 1, 1),
        date(2025, 3, 3),
        date(2025, 3, 4),
        date(2025, 4, 18),
        date(2025, 4, 21),
        date(2025, 5, 1),
        date(2025, 6, 19),
        date(2025, 7, 9),
        date(2025, 9, 7),
        date(2025, 10, 12),
        date(2025, 11, 2),
        date(2025, 11, 15),
        date(2025, 11, 20),
        date(2025, 12, 25),
    ]);
    let request = CalendarRequest::new(Locale::new("BR"), date(2025, 1, 1), date(2025, 12, 31));
    Calendar::new(request, &provider).expect("benchmark calendar")
}

fn selector_benchmarks(c: &mut Criterion) {
    let calendar = calendar();
    let mut group = c.benchmark_group("selectors");
    for &vacation_days in BALANCES {
        let constraints = Constraints {
            vacation_days,
            max_periods: 3,
            top_n: 3,
            ..Constraints::default()
        };
        let candidates = generate_candidates(&calendar, &constraints);
        let selectors: [(&str, &dyn Selector); 2] = [
            ("greedy", &GreedySelector::new()),
            ("optimal", &OptimalSelector::new()),
        ];
        for (name, selector) in selectors {
            group.bench_with_input(
                BenchmarkId::new(name, vacation_days),
                &candidates,
                |b, candidates| {
                    b.iter(|| selector.select(candidates, &constraints));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, selector_benchmarks);
criterion_main!(benches);
