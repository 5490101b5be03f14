//! Expense service
//!
//! Business logic for expense management: validated create/edit/delete plus
//! filtered listing. Filtering itself is pure; the service applies it to a
//! snapshot loaded from the repository.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, ExpenseId, UserId};
use crate::storage::Store;

/// Criteria for filtering expenses
///
/// All set criteria apply conjunctively. An empty filter keeps everything.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Case-insensitive substring match on the description
    pub search_term: Option<String>,
    /// Exact category match; `None` means all categories
    pub category: Option<Category>,
    /// Keep expenses dated on or after this date
    pub start_date: Option<NaiveDate>,
    /// Keep expenses dated on or before this date
    pub end_date: Option<NaiveDate>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by description substring
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by inclusive date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Whether a single expense passes every active criterion
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(term) = &self.search_term {
            if !term.is_empty()
                && !expense
                    .description
                    .to_lowercase()
                    .contains(&term.to_lowercase())
            {
                return false;
            }
        }

        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }

        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }

        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }

        true
    }

    /// Apply the filter to a list of expenses
    ///
    /// Returns the matching subset sorted by date descending; ties keep the
    /// input order. The input is not modified.
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        let mut filtered: Vec<Expense> = expenses
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();
        // Stable sort, so equal dates preserve input order
        filtered.sort_by(|a, b| b.date.cmp(&a.date));
        filtered
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    pub description: String,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a Store,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Record a new expense for a profile
    pub fn create(&self, user_id: UserId, input: CreateExpenseInput) -> TrackerResult<Expense> {
        let expense = Expense::new(
            user_id,
            input.amount,
            input.category,
            input.date,
            input.description.trim(),
        );
        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.store.expenses.add(&expense)?;
        Ok(expense)
    }

    /// Replace an expense's fields wholesale (matched by id)
    pub fn update(&self, expense: Expense) -> TrackerResult<Expense> {
        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.store.expenses.update(&expense)?;
        Ok(expense)
    }

    /// Delete an expense from a profile's list
    pub fn delete(&self, user_id: UserId, id: ExpenseId) -> TrackerResult<()> {
        self.store.expenses.remove(user_id, id)
    }

    /// Get a single expense
    pub fn get(&self, user_id: UserId, id: ExpenseId) -> TrackerResult<Expense> {
        self.store
            .expenses
            .get(user_id, id)?
            .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))
    }

    /// Resolve an expense from a full UUID or the short `exp-xxxxxxxx`
    /// form shown in listings
    ///
    /// A short fragment must match exactly one expense; an ambiguous
    /// fragment is a validation error.
    pub fn resolve(&self, user_id: UserId, identifier: &str) -> TrackerResult<Expense> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return self.get(user_id, id);
        }

        let fragment = identifier
            .strip_prefix("exp-")
            .unwrap_or(identifier)
            .to_lowercase();
        if fragment.is_empty() {
            return Err(TrackerError::expense_not_found(identifier));
        }

        let expenses = self.store.expenses.list(user_id)?;
        let mut matches = expenses
            .into_iter()
            .filter(|e| e.id.as_uuid().to_string().starts_with(&fragment));

        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (Some(_), Some(_)) => Err(TrackerError::Validation(format!(
                "Expense id '{}' is ambiguous, use more characters",
                identifier
            ))),
            _ => Err(TrackerError::expense_not_found(identifier)),
        }
    }

    /// List a profile's expenses matching a filter, most recent first
    pub fn list(&self, user_id: UserId, filter: &ExpenseFilter) -> TrackerResult<Vec<Expense>> {
        let expenses = self.store.expenses.list(user_id)?;
        Ok(filter.apply(&expenses))
    }
}
