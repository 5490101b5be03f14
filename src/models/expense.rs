//! Expense model
//!
//! An expense is a single recorded monetary outflow owned by one profile.
//! Amounts are plain f64 values in the configured currency; aggregation
//! accepts the usual floating-point accumulation error.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{ExpenseId, UserId};

/// Largest accepted expense amount
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// Shortest accepted description, in characters
pub const MIN_DESCRIPTION_LEN: usize = 3;

/// Longest accepted description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// A single recorded monetary outflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent, always positive
    pub amount: f64,

    /// Classification tag
    pub category: Category,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Free-form description
    pub description: String,

    /// The profile that owns this expense
    pub user_id: UserId,
}

impl Expense {
    /// Create a new expense with a generated id
    pub fn new(
        user_id: UserId,
        amount: f64,
        category: Category,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category,
            date,
            description: description.into(),
            user_id,
        }
    }

    /// Validate the expense against the input rules
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        if self.amount > MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        let desc_len = self.description.chars().count();
        if desc_len < MIN_DESCRIPTION_LEN {
            return Err(ExpenseValidationError::DescriptionTooShort(desc_len));
        }
        if desc_len > MAX_DESCRIPTION_LEN {
            return Err(ExpenseValidationError::DescriptionTooLong(desc_len));
        }

        if self.date > Local::now().date_naive() {
            return Err(ExpenseValidationError::FutureDate(self.date));
        }

        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    AmountTooLarge(f64),
    DescriptionTooShort(usize),
    DescriptionTooLong(usize),
    FutureDate(NaiveDate),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount must be less than 1,000,000 (got {})", amount)
            }
            Self::DescriptionTooShort(len) => write!(
                f,
                "Description must be at least {} characters long ({} given)",
                MIN_DESCRIPTION_LEN, len
            ),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description must be less than {} characters ({} given)",
                MAX_DESCRIPTION_LEN, len
            ),
            Self::FutureDate(date) => write!(f, "Date cannot be in the future ({})", date),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
