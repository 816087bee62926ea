//! Focused unit tests covering the plan command pipeline and its layering.

use chrono::NaiveDate;
use ortho_config::MergeComposer;
use rstest::{fixture, rstest};
use serde_json::json;
use vacation_core::test_support::MemoryHolidayProvider;

use super::helpers::PlanWorkspace;
use crate::CliError;
use crate::config::Algorithm;
use crate::plan::{PlanConfig, config_from_layers_for_test, execute_plan, run_plan_with};
use crate::render::OutputFormat;

const ONE_WEEK: &str = r#"
[calendar]
year = 2026

[location]
country_code = "XX"

[constraints]
vacation_days = 5
max_vac_periods = 1
"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid fixture date")
}

#[fixture]
fn one_week() -> PlanWorkspace {
    PlanWorkspace::with_contents(ONE_WEEK)
}

fn config_for(workspace: &PlanWorkspace, algorithm: Option<Algorithm>) -> PlanConfig {
    PlanConfig {
        file: Some(workspace.path().clone()),
        algorithm,
        top_n: None,
        format: OutputFormat::Table,
        today: today(),
    }
}

#[rstest]
fn optimal_plan_spends_the_whole_balance(one_week: PlanWorkspace) {
    let config = config_for(&one_week, Some(Algorithm::Optimal));
    let plans = execute_plan(&config, &MemoryHolidayProvider::default()).expect("plans");
    assert_eq!(plans.len(), 1);
    let plan = plans.first().expect("a plan");
    assert_eq!((plan.len(), plan.days_pto()), (1, 5));
    assert!(plan.total_days_off() >= 7);
}

#[rstest]
fn greedy_plan_respects_the_limits(one_week: PlanWorkspace) {
    let config = config_for(&one_week, None);
    let plans = execute_plan(&config, &MemoryHolidayProvider::default()).expect("plans");
    assert!(plans.len() <= 1);
    assert!(plans.iter().all(|plan| plan.days_pto() <= 5 && plan.len() <= 1));
}

#[rstest]
fn json_output_lists_plans(one_week: PlanWorkspace) {
    let config = PlanConfig {
        format: OutputFormat::Json,
        ..config_for(&one_week, Some(Algorithm::Optimal))
    };
    let mut out = Vec::new();
    run_plan_with(&config, &MemoryHolidayProvider::default(), &mut out).expect("run");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
    let plans = value.as_array().expect("array of plans");
    assert_eq!(plans.len(), 1);
    assert_eq!(value[0]["days_pto"], json!(5));
    assert_eq!(value[0]["breaks"][0]["days_pto"], json!(5));
}

#[rstest]
fn unsatisfiable_limits_print_a_notice() {
    let workspace = PlanWorkspace::with_contents(
        "[location]\ncountry_code = \"XX\"\n[constraints]\nvacation_days = 5\nmin_vac_days_per_break = 10\n",
    );
    let config = config_for(&workspace, None);
    let mut out = Vec::new();
    run_plan_with(&config, &MemoryHolidayProvider::default(), &mut out).expect("run");
    assert_eq!(
        String::from_utf8(out).expect("utf-8 output"),
        "No plan satisfies the constraints.\n"
    );
}

#[rstest]
fn command_line_overrides_replace_file_values(one_week: PlanWorkspace) {
    let config = PlanConfig {
        top_n: Some(4),
        ..config_for(&one_week, Some(Algorithm::Optimal))
    };
    let settings = config.settings().expect("settings");
    assert_eq!(settings.algorithm, Algorithm::Optimal);
    assert_eq!(settings.constraints.top_n, 4);
    assert_eq!(settings.constraints.vacation_days, 5);
}

#[rstest]
fn zero_top_n_override_is_rejected_by_the_selector(one_week: PlanWorkspace) {
    let config = PlanConfig {
        top_n: Some(0),
        ..config_for(&one_week, None)
    };
    let err = execute_plan(&config, &MemoryHolidayProvider::default()).expect_err("top_n 0");
    assert!(matches!(err, CliError::Select(_)));
}

#[rstest]
fn unknown_locales_surface_as_calendar_errors(one_week: PlanWorkspace) {
    let provider = MemoryHolidayProvider::default().rejecting("XX");
    let err = execute_plan(&config_for(&one_week, None), &provider).expect_err("rejected");
    assert!(matches!(err, CliError::Calendar(_)));
}

#[rstest]
fn missing_plan_file_is_reported() {
    let config = PlanConfig {
        file: Some("does/not/exist.toml".into()),
        algorithm: None,
        top_n: None,
        format: OutputFormat::Table,
        today: today(),
    };
    let err = execute_plan(&config, &MemoryHolidayProvider::default()).expect_err("missing");
    assert!(matches!(err, CliError::PlanFile(_)));
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "format": "json", "algorithm": "greedy" }), None);
    composer.push_environment(json!({ "top_n": 2, "algorithm": "optimal" }));
    composer.push_cli(json!({ "today": "2025-06-15" }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(
        config,
        PlanConfig {
            file: None,
            algorithm: Some(Algorithm::Optimal),
            top_n: Some(2),
            format: OutputFormat::Json,
            today: today(),
        }
    );
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "top_n": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid layer should map to CliError::Configuration");
    assert!(matches!(err, CliError::Configuration(_)));
}
