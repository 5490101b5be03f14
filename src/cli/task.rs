//! Budget task CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::todo::format_todo_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{parse_category_filter, Category, TodoPriority, TodoStatus};
use crate::services::{CreateTodoInput, ProfileService, TodoFilter, TodoService};
use crate::storage::Store;

use super::parse_date;

/// Task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new budget task
    Add {
        /// Short title
        title: String,
        /// Longer description
        description: String,
        /// Priority (low, medium, high)
        #[arg(short, long, default_value = "medium")]
        priority: TodoPriority,
        /// Due date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        due: Option<String>,
        /// Budget amount attached to the task
        #[arg(short, long)]
        budget: Option<f64>,
        /// Related category
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// List tasks
    List {
        /// Filter by status (pending, in_progress, completed)
        #[arg(short, long)]
        status: Option<TodoStatus>,
        /// Filter by priority (low, medium, high)
        #[arg(short, long)]
        priority: Option<TodoPriority>,
        /// Filter by category ("all" for no filter)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Change a task's status
    Status {
        /// Task ID
        id: String,
        /// New status (pending, in_progress, completed)
        status: TodoStatus,
    },
    /// Mark a task as completed
    Done {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

/// Handle a task command
pub fn handle_task_command(
    store: &Store,
    settings: &Settings,
    cmd: TaskCommands,
) -> TrackerResult<()> {
    let user = ProfileService::new(store).current()?;
    let service = TodoService::new(store);

    match cmd {
        TaskCommands::Add {
            title,
            description,
            priority,
            due,
            budget,
            category,
        } => {
            let due_date = match due {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };

            let todo = service.create(
                user.id,
                CreateTodoInput {
                    title,
                    description,
                    priority,
                    due_date,
                    budget,
                    category,
                },
            )?;

            println!("Added task {} '{}' due {}", todo.id, todo.title, todo.due_date);
        }
        TaskCommands::List {
            status,
            priority,
            category,
        } => {
            let mut filter = TodoFilter::new();
            filter.status = status;
            filter.priority = priority;
            if let Some(cat) = category {
                filter.category = parse_category_filter(&cat)
                    .map_err(|e| TrackerError::Validation(e.to_string()))?;
            }

            let todos = service.list(user.id, &filter)?;
            print!("{}", format_todo_list(&todos, &settings.currency_prefix, &settings.date_format));
        }
        TaskCommands::Status { id, status } => {
            let todo = service.resolve(user.id, &id)?;
            let todo = service.set_status(user.id, todo.id, status)?;
            println!("Task {} is now {}", todo.id, todo.status);
        }
        TaskCommands::Done { id } => {
            let todo = service.resolve(user.id, &id)?;
            let todo = service.set_status(user.id, todo.id, TodoStatus::Completed)?;
            println!("Task {} is now {}", todo.id, todo.status);
        }
        TaskCommands::Delete { id } => {
            let todo = service.resolve(user.id, &id)?;
            service.delete(user.id, todo.id)?;
            println!("Deleted task {}", todo.id);
        }
    }

    Ok(())
}
