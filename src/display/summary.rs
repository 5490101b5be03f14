//! Summary report formatting
//!
//! Renders the derived expense summary as a per-category breakdown with a
//! proportional bar chart.

use crate::reports::ExpenseSummary;

use super::{format_bar, format_currency, separator};

/// Width of the category bar chart
const BAR_WIDTH: usize = 20;

/// Format the summary report for terminal display
pub fn format_summary_report(summary: &ExpenseSummary, currency_prefix: &str) -> String {
    let mut output = String::new();

    output.push_str("Expense Summary\n");
    output.push_str(&separator(70));
    output.push('\n');
    output.push_str(&format!(
        "Total spend:   {}\n",
        format_currency(summary.total, currency_prefix)
    ));
    output.push_str(&format!(
        "Average spend: {}\n",
        format_currency(summary.average_expense, currency_prefix)
    ));

    let sums = summary.sorted_category_sums();
    if sums.is_empty() {
        output.push('\n');
        output.push_str("No expenses recorded.\n");
        return output;
    }

    let max_sum = sums[0].1;

    output.push('\n');
    output.push_str("By category:\n");
    for (category, sum) in &sums {
        let share = if summary.total > 0.0 {
            sum / summary.total * 100.0
        } else {
            0.0
        };
        output.push_str(&format!(
            "  {:14} {} {:>16} ({:.1}%)\n",
            category.name(),
            format_bar(*sum, max_sum, BAR_WIDTH),
            format_currency(*sum, currency_prefix),
            share
        ));
    }

    output
}
