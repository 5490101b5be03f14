//! Expense summary report
//!
//! Derived aggregate over an expense list: total spend, average spend, and
//! per-category subtotals. Recomputed from the current list on demand and
//! never stored.
//!
//! Amounts accumulate as f64, matching the stored representation; for the
//! magnitudes involved the rounding error is accepted.

use std::collections::HashMap;

use crate::models::{Category, Expense};

/// Aggregate totals computed from an expense list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseSummary {
    /// Sum of all amounts
    pub total: f64,

    /// Mean amount, or 0 when the list is empty
    pub average_expense: f64,

    /// Subtotal per category; categories with no expenses have no entry.
    /// Iteration order is unspecified.
    pub category_sums: HashMap<Category, f64>,
}

impl ExpenseSummary {
    /// Compute the summary for a list of expenses
    ///
    /// The empty list yields zeros and an empty map.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let total: f64 = expenses.iter().map(|e| e.amount).sum();

        let average_expense = if expenses.is_empty() {
            0.0
        } else {
            total / expenses.len() as f64
        };

        let mut category_sums: HashMap<Category, f64> = HashMap::new();
        for expense in expenses {
            *category_sums.entry(expense.category).or_insert(0.0) += expense.amount;
        }

        Self {
            total,
            average_expense,
            category_sums,
        }
    }

    /// Category subtotals sorted by amount descending, name ascending on ties
    ///
    /// The map itself has no order; use this for display.
    pub fn sorted_category_sums(&self) -> Vec<(Category, f64)> {
        let mut sums: Vec<_> = self.category_sums.iter().map(|(c, s)| (*c, *s)).collect();
        sums.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.name().cmp(b.0.name()))
        });
        sums
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;
    use chrono::NaiveDate;

    fn expense(amount: f64, category: Category) -> Expense {
        Expense::new(
            UserId::new(),
            amount,
            category,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            "Test expense",
        )
    }

    #[test]
    fn test_empty_summary() {
        let summary = ExpenseSummary::from_expenses(&[]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.average_expense, 0.0);
        assert!(summary.category_sums.is_empty());
    }

    #[test]
    fn test_worked_example() {
        let expenses = vec![
            expense(100.0, Category::Food),
            expense(50.0, Category::Food),
            expense(25.0, Category::Transport),
        ];

        let summary = ExpenseSummary::from_expenses(&expenses);
        assert_eq!(summary.total, 175.0);
        assert!((summary.average_expense - 175.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.category_sums.len(), 2);
        assert_eq!(summary.category_sums[&Category::Food], 150.0);
        assert_eq!(summary.category_sums[&Category::Transport], 25.0);
    }

    #[test]
    fn test_absent_categories_have_no_entry() {
        let summary = ExpenseSummary::from_expenses(&[expense(10.0, Category::Bills)]);
        assert_eq!(summary.category_sums.len(), 1);
        assert!(!summary.category_sums.contains_key(&Category::Food));
    }

    #[test]
    fn test_category_sums_add_up_to_total() {
        let expenses = vec![
            expense(33.33, Category::Food),
            expense(12.01, Category::Shopping),
            expense(0.99, Category::Food),
            expense(1250.75, Category::Savings),
            expense(89.10, Category::Healthcare),
        ];

        let summary = ExpenseSummary::from_expenses(&expenses);
        let sum_of_sums: f64 = summary.category_sums.values().sum();
        assert!((sum_of_sums - summary.total).abs() < 1e-6);
    }

    #[test]
    fn test_single_expense_average() {
        let summary = ExpenseSummary::from_expenses(&[expense(42.0, Category::Education)]);
        assert_eq!(summary.average_expense, 42.0);
        assert_eq!(summary.total, 42.0);
    }

    #[test]
    fn test_sorted_category_sums() {
        let expenses = vec![
            expense(25.0, Category::Transport),
            expense(150.0, Category::Food),
            expense(60.0, Category::Bills),
        ];

        let summary = ExpenseSummary::from_expenses(&expenses);
        let sorted = summary.sorted_category_sums();
        assert_eq!(sorted[0], (Category::Food, 150.0));
        assert_eq!(sorted[1], (Category::Bills, 60.0));
        assert_eq!(sorted[2], (Category::Transport, 25.0));
    }
}
