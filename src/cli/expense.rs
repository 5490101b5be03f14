//! Expense CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{parse_category_filter, Category};
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService, ProfileService};
use crate::storage::Store;

use super::parse_date;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. "150.50")
        amount: f64,
        /// Category (Food, Transport, Bills, ...)
        category: Category,
        /// Description of the expense
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses, most recent first
    List {
        /// Case-insensitive search in descriptions
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by category ("all" for no filter)
        #[arg(short, long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
    },
    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },
    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<f64>,
        /// New category
        #[arg(short, long)]
        category: Option<Category>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &Store,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let user = ProfileService::new(store).current()?;
    let service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };

            let expense = service.create(
                user.id,
                CreateExpenseInput {
                    amount,
                    category,
                    date,
                    description,
                },
            )?;

            println!("Recorded expense {}:", expense.id);
            print!(
                "{}",
                format_expense_details(&expense, &settings.currency_prefix, &settings.date_format)
            );
        }
        ExpenseCommands::List {
            search,
            category,
            from,
            to,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(term) = search {
                filter.search_term = Some(term);
            }
            if let Some(cat) = category {
                filter.category = parse_category_filter(&cat)
                    .map_err(|e| TrackerError::Validation(e.to_string()))?;
            }
            if let Some(s) = from {
                filter.start_date = Some(parse_date(&s)?);
            }
            if let Some(s) = to {
                filter.end_date = Some(parse_date(&s)?);
            }

            let expenses = service.list(user.id, &filter)?;
            print!(
                "{}",
                format_expense_list(&expenses, &settings.currency_prefix, &settings.date_format)
            );
        }
        ExpenseCommands::Show { id } => {
            let expense = service.resolve(user.id, &id)?;
            print!(
                "{}",
                format_expense_details(&expense, &settings.currency_prefix, &settings.date_format)
            );
        }
        ExpenseCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let mut expense = service.resolve(user.id, &id)?;

            if let Some(amount) = amount {
                expense.amount = amount;
            }
            if let Some(category) = category {
                expense.category = category;
            }
            if let Some(s) = date {
                expense.date = parse_date(&s)?;
            }
            if let Some(description) = description {
                expense.description = description;
            }

            let expense = service.update(expense)?;
            println!("Updated expense {}:", expense.id);
            print!(
                "{}",
                format_expense_details(&expense, &settings.currency_prefix, &settings.date_format)
            );
        }
        ExpenseCommands::Delete { id } => {
            let expense = service.resolve(user.id, &id)?;
            service.delete(user.id, expense.id)?;
            println!("Deleted expense {}", expense.id);
        }
    }

    Ok(())
}
