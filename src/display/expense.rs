//! Expense display formatting

use crate::models::Expense;

use super::{format_currency, separator, truncate};

/// Format a single expense for display (list row)
pub fn format_expense_row(expense: &Expense, currency_prefix: &str, date_format: &str) -> String {
    format!(
        "{} {:10} {:14} {:24} {:>16}",
        expense.id,
        expense.date.format(date_format),
        truncate(expense.category.name(), 14),
        truncate(&expense.description, 24),
        format_currency(expense.amount, currency_prefix)
    )
}

/// Format a list of expenses as a register, most recent first
pub fn format_expense_list(expenses: &[Expense], currency_prefix: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:14} {:24} {:>16}\n",
        "Id", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&separator(80));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency_prefix, date_format));
        output.push('\n');
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&separator(80));
    output.push('\n');
    output.push_str(&format!(
        "{} expense(s), total {}\n",
        expenses.len(),
        format_currency(total, currency_prefix)
    ));

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, currency_prefix: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format(date_format)));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_currency(expense.amount, currency_prefix)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Description: {}\n", expense.description));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, UserId};
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense::new(
            UserId::new(),
            150.50,
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            "Grocery shopping",
        )
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_expense_list(&[], "LKR", "%Y-%m-%d"),
            "No expenses found.\n"
        );
    }

    #[test]
    fn test_list_contains_rows_and_total() {
        let output = format_expense_list(&[sample()], "LKR", "%Y-%m-%d");
        assert!(output.contains("Grocery shopping"));
        assert!(output.contains("2024-03-15"));
        assert!(output.contains("LKR 150.50"));
        assert!(output.contains("1 expense(s)"));
    }

    #[test]
    fn test_details() {
        let output = format_expense_details(&sample(), "LKR", "%Y-%m-%d");
        assert!(output.contains("Category:    Food"));
        assert!(output.contains("Amount:      LKR 150.50"));
    }

    #[test]
    fn test_configured_date_format_is_applied() {
        let row = format_expense_row(&sample(), "LKR", "%d/%m/%Y");
        assert!(row.contains("15/03/2024"));

        let details = format_expense_details(&sample(), "LKR", "%d %b %Y");
        assert!(details.contains("15 Mar 2024"));
    }
}
