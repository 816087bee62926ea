#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for candidate generation using rstest-bdd.
//!
//! Each scenario builds a short calendar around one public holiday and checks
//! the bridges the generator offers.

use std::cell::RefCell;
use std::collections::BTreeSet;

use chrono::NaiveDate;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use vacation_core::{
    Break, Calendar, CalendarRequest, Constraints, HolidayProvider, Locale, LocaleError,
    generate_candidates,
};

/// Serves whatever dates the scenario registered.
struct ScenarioHolidays(BTreeSet<NaiveDate>);

impl HolidayProvider for ScenarioHolidays {
    fn holidays_for(
        &self,
        _locale: &Locale,
        _years: &BTreeSet<i32>,
    ) -> Result<BTreeSet<NaiveDate>, LocaleError> {
        Ok(self.0.clone())
    }
}

/// World state for candidate generation scenarios.
#[derive(Debug, Default)]
struct GenerationWorld {
    horizon: RefCell<Option<(NaiveDate, NaiveDate)>>,
    holidays: RefCell<BTreeSet<NaiveDate>>,
    candidates: RefCell<Vec<Break>>,
}

impl GenerationWorld {
    fn assert_span(&self, begin: NaiveDate, end: NaiveDate, days_pto: u32, total: u32) {
        let candidates = self.candidates.borrow();
        let found = candidates
            .iter()
            .find(|br| br.begin() == begin && br.end() == end)
            .unwrap_or_else(|| panic!("no candidate spans {begin}..={end}"));
        assert_eq!((found.days_pto(), found.total()), (days_pto, total));
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

#[fixture]
fn world() -> GenerationWorld {
    GenerationWorld::default()
}

#[given("a horizon from Monday 3 March to Wednesday 5 March 2025")]
fn given_carnival_week(world: &GenerationWorld) {
    world
        .horizon
        .replace(Some((date(2025, 3, 3), date(2025, 3, 5))));
}

#[given("Carnival Tuesday 4 March 2025 is a holiday")]
fn given_carnival(world: &GenerationWorld) {
    world.holidays.borrow_mut().insert(date(2025, 3, 4));
}

#[given("a horizon from Monday 14 April to Friday 25 April 2025")]
fn given_easter_fortnight(world: &GenerationWorld) {
    world
        .horizon
        .replace(Some((date(2025, 4, 14), date(2025, 4, 25))));
}

#[given("Good Friday 18 April 2025 is a holiday")]
fn given_good_friday(world: &GenerationWorld) {
    world.holidays.borrow_mut().insert(date(2025, 4, 18));
}

#[when("candidates are generated with one to four PTO days per break")]
fn when_generated(world: &GenerationWorld) {
    let (first, last) = world.horizon.borrow().expect("horizon should be set");
    let provider = ScenarioHolidays(world.holidays.borrow().clone());
    let request = CalendarRequest::new(Locale::new("XX"), first, last);
    let calendar = Calendar::new(request, &provider).expect("calendar");
    let constraints = Constraints {
        vacation_days: 10,
        min_days_per_break: 1,
        max_days_per_break: 4,
        min_total_days_off: 1,
        holiday_as_pto: false,
        ..Constraints::default()
    };
    world
        .candidates
        .replace(generate_candidates(&calendar, &constraints));
}

#[then("Monday to Tuesday costs one PTO day for two days off")]
fn then_monday_bridge(world: &GenerationWorld) {
    world.assert_span(date(2025, 3, 3), date(2025, 3, 4), 1, 2);
}

#[then("Tuesday to Wednesday costs one PTO day for two days off")]
fn then_wednesday_bridge(world: &GenerationWorld) {
    world.assert_span(date(2025, 3, 4), date(2025, 3, 5), 1, 2);
}

#[then("every candidate spends at least one PTO day")]
fn then_no_free_candidate(world: &GenerationWorld) {
    let candidates = world.candidates.borrow();
    assert!(!candidates.is_empty());
    assert!(candidates.iter().all(|br| br.days_pto() >= 1));
}

#[then("Good Friday to Easter Sunday is not a candidate")]
fn then_no_weekend_only_span(world: &GenerationWorld) {
    let candidates = world.candidates.borrow();
    assert!(
        !candidates
            .iter()
            .any(|br| br.begin() == date(2025, 4, 18) && br.end() == date(2025, 4, 20))
    );
}

#[then("Good Friday to Easter Monday costs one PTO day for four days off")]
fn then_easter_monday_bridge(world: &GenerationWorld) {
    world.assert_span(date(2025, 4, 18), date(2025, 4, 21), 1, 4);
}

#[scenario(path = "tests/features/candidate_generation.feature", index = 0)]
fn tuesday_holiday_bridges(world: GenerationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/candidate_generation.feature", index = 1)]
fn friday_holiday_bridges_to_monday(world: GenerationWorld) {
    let _ = world;
}
