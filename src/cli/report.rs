//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::summary::format_summary_report;
use crate::error::TrackerResult;
use crate::reports::ExpenseSummary;
use crate::services::{ExpenseFilter, ExpenseService, ProfileService};
use crate::storage::Store;

use super::parse_date;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Total, average and per-category spend
    Summary {
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    store: &Store,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let user = ProfileService::new(store).current()?;
    let service = ExpenseService::new(store);

    match cmd {
        ReportCommands::Summary { from, to } => {
            let mut filter = ExpenseFilter::new();
            if let Some(s) = from {
                filter.start_date = Some(parse_date(&s)?);
            }
            if let Some(s) = to {
                filter.end_date = Some(parse_date(&s)?);
            }

            let expenses = service.list(user.id, &filter)?;
            let summary = ExpenseSummary::from_expenses(&expenses);
            print!(
                "{}",
                format_summary_report(&summary, &settings.currency_prefix)
            );
        }
    }

    Ok(())
}
