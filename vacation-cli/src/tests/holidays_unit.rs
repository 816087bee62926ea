//! Focused unit tests covering the holidays command.

use chrono::NaiveDate;
use rstest::rstest;
use serde_json::json;
use vacation_holidays::RuleHolidayProvider;

use crate::CliError;
use crate::holidays::{HolidaysArgs, HolidaysConfig, run_holidays_with};
use crate::render::OutputFormat;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid fixture date")
}

fn run(args: HolidaysArgs) -> Result<String, CliError> {
    let config = HolidaysConfig::resolve(args, today());
    let mut out = Vec::new();
    run_holidays_with(&config, &RuleHolidayProvider::new(), &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[rstest]
fn defaults_list_next_year_in_sao_paulo() {
    let config = HolidaysConfig::resolve(HolidaysArgs::default(), today());
    assert_eq!(config.locale.to_string(), "BR-SP");
    assert_eq!(config.year, 2026);

    let table = run(HolidaysArgs::default()).expect("listing");
    assert!(table.contains("2026-07-09  Thu  Revolução Constitucionalista de 1932\n"));
    assert!(table.starts_with("2026-01-01  Thu  "));
}

#[rstest]
fn json_listing_marks_observed_days() {
    let args = HolidaysArgs {
        country: Some("GB".to_owned()),
        year: Some(2027),
        observed: Some(true),
        format: Some(OutputFormat::Json),
        ..HolidaysArgs::default()
    };
    let payload = run(args).expect("listing");
    let rows: serde_json::Value = serde_json::from_str(&payload).expect("valid JSON");
    let rows = rows.as_array().expect("array of holidays");
    assert!(rows.contains(&json!({
        "date": "2027-12-27",
        "name": "Christmas Day",
        "observed": true
    })));
    assert!(rows.contains(&json!({
        "date": "2027-12-25",
        "name": "Christmas Day",
        "observed": false
    })));
}

#[rstest]
fn unknown_countries_are_reported() {
    let args = HolidaysArgs {
        country: Some("ZZ".to_owned()),
        ..HolidaysArgs::default()
    };
    let err = run(args).expect_err("unsupported country");
    assert!(matches!(err, CliError::Holidays(_)));
}
