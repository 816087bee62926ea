//! Shared test harness modules for the vacation CLI.

use super::*;

mod helpers;
mod holidays_unit;
mod plan_unit;
