//! Candidate generation on realistic calendars: horizon bounds and ranking.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rstest::rstest;
use vacation_core::{
    Break, Calendar, CalendarRequest, Constraints, HolidayProvider, Locale, LocaleError,
    generate_candidates,
};

struct NoPublicHolidays;

impl HolidayProvider for NoPublicHolidays {
    fn holidays_for(
        &self,
        _locale: &Locale,
        _years: &BTreeSet<i32>,
    ) -> Result<BTreeSet<NaiveDate>, LocaleError> {
        Ok(BTreeSet::new())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn candidates_for(
    first: NaiveDate,
    last: NaiveDate,
    holidays: &[NaiveDate],
    constraints: &Constraints,
) -> Vec<Break> {
    let request = CalendarRequest::new(Locale::new("XX"), first, last)
        .with_custom_holidays(holidays.iter().copied());
    let calendar = Calendar::new(request, &NoPublicHolidays).expect("calendar");
    generate_candidates(&calendar, constraints)
}

fn limits() -> Constraints {
    Constraints {
        vacation_days: 10,
        min_days_per_break: 1,
        max_days_per_break: 4,
        min_total_days_off: 1,
        holiday_as_pto: false,
        ..Constraints::default()
    }
}

#[rstest]
fn candidates_stay_inside_the_horizon() {
    let first = date(2025, 3, 3);
    let last = date(2025, 3, 5);
    let candidates = candidates_for(first, last, &[date(2025, 3, 4)], &limits());
    assert!(
        candidates
            .iter()
            .all(|br| br.begin() >= first && br.end() <= last)
    );
}

#[rstest]
#[case(1.0)]
#[case(0.0)]
fn alpha_controls_the_front_runner(#[case] alpha: f64) {
    let constraints = Constraints { alpha, ..limits() };
    let candidates = candidates_for(
        date(2025, 4, 14),
        date(2025, 4, 27),
        &[date(2025, 4, 18)],
        &constraints,
    );
    let best = candidates.first().expect("at least one candidate");
    if alpha > 0.5 {
        // Pure length: the longest affordable span wins.
        let longest = candidates.iter().map(Break::total).max();
        assert_eq!(Some(best.total()), longest);
    } else {
        // Pure efficiency: the best days-off per PTO ratio wins.
        assert!(candidates.iter().all(|br| br.roi() <= best.roi()));
    }
}
