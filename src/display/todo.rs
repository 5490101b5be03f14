//! Task display formatting

use crate::models::{Todo, TodoPriority, TodoStatus};

use super::{format_currency, separator, truncate};

/// Format a single task for display (list row)
pub fn format_todo_row(todo: &Todo, currency_prefix: &str, date_format: &str) -> String {
    let status_icon = match todo.status {
        TodoStatus::Pending => " ",
        TodoStatus::InProgress => "…",
        TodoStatus::Completed => "✓",
    };

    let priority_marker = match todo.priority {
        TodoPriority::Low => "·",
        TodoPriority::Medium => "•",
        TodoPriority::High => "!",
    };

    let budget_display = match todo.budget {
        Some(budget) => format_currency(budget, currency_prefix),
        None => "-".to_string(),
    };

    let category_display = todo
        .category
        .map(|c| c.name())
        .unwrap_or("-");

    format!(
        "{} {} {} {:10} {:24} {:13} {:>14}",
        status_icon,
        priority_marker,
        todo.id,
        todo.due_date.format(date_format),
        truncate(&todo.title, 24),
        category_display,
        budget_display
    )
}

/// Format a list of tasks
pub fn format_todo_list(todos: &[Todo], currency_prefix: &str, date_format: &str) -> String {
    if todos.is_empty() {
        return "No tasks found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "S P {:13} {:10} {:24} {:13} {:>14}\n",
        "Id", "Due", "Title", "Category", "Budget"
    ));
    output.push_str(&separator(86));
    output.push('\n');

    for todo in todos {
        output.push_str(&format_todo_row(todo, currency_prefix, date_format));
        output.push('\n');
    }

    let open = todos
        .iter()
        .filter(|t| t.status != TodoStatus::Completed)
        .count();
    output.push_str(&separator(86));
    output.push('\n');
    output.push_str(&format!("{} task(s), {} open\n", todos.len(), open));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, UserId};
    use chrono::NaiveDate;

    fn sample() -> Todo {
        Todo::new(
            UserId::new(),
            "Review subscriptions",
            "Cancel unused streaming services",
            TodoPriority::High,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        )
        .with_budget(50.0)
        .with_category(Category::Entertainment)
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_todo_list(&[], "LKR", "%Y-%m-%d"), "No tasks found.\n");
    }

    #[test]
    fn test_list_contains_rows() {
        let output = format_todo_list(&[sample()], "LKR", "%Y-%m-%d");
        assert!(output.contains("Review subscriptions"));
        assert!(output.contains("2024-04-01"));
        assert!(output.contains("Entertainment"));
        assert!(output.contains("LKR 50.00"));
        assert!(output.contains("1 task(s), 1 open"));
    }

    #[test]
    fn test_completed_marker() {
        let mut todo = sample();
        todo.set_status(TodoStatus::Completed);

        let row = format_todo_row(&todo, "LKR", "%Y-%m-%d");
        assert!(row.starts_with('✓'));
    }

    #[test]
    fn test_configured_date_format_is_applied() {
        let row = format_todo_row(&sample(), "LKR", "%d/%m/%Y");
        assert!(row.contains("01/04/2024"));
    }
}
