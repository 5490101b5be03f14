//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod profile;
pub mod report;
pub mod task;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use profile::{handle_profile_command, ProfileCommands};
pub use report::{handle_report_command, ReportCommands};
pub use task::{handle_task_command, TaskCommands};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};

/// Parse a calendar date in YYYY-MM-DD form
pub(crate) fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}
