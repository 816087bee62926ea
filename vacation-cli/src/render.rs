//! Text and JSON rendering of plans and holiday lists.

use std::io::Write;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use vacation_core::Plan;
use vacation_holidays::NamedHoliday;

use crate::CliError;

/// Output encoding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, human-readable table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Serialize)]
struct HolidayRow<'a> {
    date: NaiveDate,
    name: &'a str,
    observed: bool,
}

pub(crate) fn write_plans(
    writer: &mut dyn Write,
    plans: &[Plan],
    format: OutputFormat,
) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Table => plans_table(plans),
        OutputFormat::Json => {
            serde_json::to_string_pretty(plans).map_err(CliError::SerializePlans)? + "\n"
        }
    };
    write_payload(writer, &payload)
}

pub(crate) fn write_holidays(
    writer: &mut dyn Write,
    holidays: &[NamedHoliday],
    format: OutputFormat,
) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Table => holidays_table(holidays),
        OutputFormat::Json => {
            let rows: Vec<_> = holidays
                .iter()
                .map(|holiday| HolidayRow {
                    date: holiday.date,
                    name: holiday.name,
                    observed: holiday.observed,
                })
                .collect();
            serde_json::to_string_pretty(&rows).map_err(CliError::SerializeHolidays)? + "\n"
        }
    };
    write_payload(writer, &payload)
}

fn write_payload(writer: &mut dyn Write, payload: &str) -> Result<(), CliError> {
    writer
        .write_all(payload.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(CliError::WriteOutput)
}

pub(crate) fn plans_table(plans: &[Plan]) -> String {
    if plans.is_empty() {
        return "No plan satisfies the constraints.\n".to_owned();
    }
    let mut lines = Vec::new();
    for (rank, plan) in plans.iter().enumerate() {
        if rank > 0 {
            lines.push(String::new());
        }
        lines.push(format!(
            "Plan {}: {} PTO days, {} days off in {} breaks",
            rank + 1,
            plan.days_pto(),
            plan.total_days_off(),
            plan.len()
        ));
        lines.push(format!(
            "  {:<10}  {:<10}  {:<10}  {:<10}  {:>4}  {:>4}  {:>5}",
            "begin", "end", "pto from", "pto to", "pto", "off", "roi"
        ));
        lines.extend(plan.breaks().iter().map(|br| {
            format!(
                "  {:<10}  {:<10}  {:<10}  {:<10}  {:>4}  {:>4}  {:>5.2}",
                br.begin().to_string(),
                br.end().to_string(),
                br.begin_pto().to_string(),
                br.end_pto().to_string(),
                br.days_pto(),
                br.total(),
                br.roi()
            )
        }));
    }
    lines.join("\n") + "\n"
}

pub(crate) fn holidays_table(holidays: &[NamedHoliday]) -> String {
    holidays
        .iter()
        .map(|holiday| {
            let suffix = if holiday.observed { " (observed)" } else { "" };
            format!(
                "{}  {}  {}{suffix}\n",
                holiday.date,
                holiday.date.format("%a"),
                holiday.name
            )
        })
        .collect()
}
