//! Terminal display formatting
//!
//! Plain-text formatting helpers for expenses, tasks and summary reports.

pub mod expense;
pub mod summary;
pub mod todo;

pub use expense::{format_expense_details, format_expense_list};
pub use summary::format_summary_report;
pub use todo::format_todo_list;

/// Format an amount with the currency prefix, two fraction digits and
/// thousands grouping, e.g. `LKR 1,234.56`
pub fn format_currency(amount: f64, prefix: &str) -> String {
    let negative = amount < 0.0;
    let rounded = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rounded
        .split_once('.')
        .unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{} {}{}.{}", prefix, sign, grouped, frac_part)
}

/// Truncate a string to a maximum display width, appending an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
