//! Expense repository
//!
//! Persists each profile's expense list as a single JSON array under the
//! `expenses_<userId>` key.

use std::sync::Arc;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseId, UserId};

use super::port::{read_entry, write_entry, StoragePort};

/// Repository for expense persistence
pub struct ExpenseRepository {
    port: Arc<dyn StoragePort>,
}

impl ExpenseRepository {
    /// Create a new expense repository over a storage port
    pub fn new(port: Arc<dyn StoragePort>) -> Self {
        Self { port }
    }

    /// Storage key for a profile's expense list
    pub fn key_for(user_id: UserId) -> String {
        format!("expenses_{}", user_id.as_uuid())
    }

    /// Load all expenses for a profile, in stored order
    pub fn list(&self, user_id: UserId) -> TrackerResult<Vec<Expense>> {
        Ok(read_entry(self.port.as_ref(), &Self::key_for(user_id))?.unwrap_or_default())
    }

    /// Get a single expense by id
    pub fn get(&self, user_id: UserId, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        Ok(self.list(user_id)?.into_iter().find(|e| e.id == id))
    }

    /// Append a new expense to the owning profile's list
    pub fn add(&self, expense: &Expense) -> TrackerResult<()> {
        let mut expenses = self.list(expense.user_id)?;
        expenses.push(expense.clone());
        self.save_list(expense.user_id, &expenses)
    }

    /// Replace an existing expense wholesale (matched by id)
    pub fn update(&self, expense: &Expense) -> TrackerResult<()> {
        let mut expenses = self.list(expense.user_id)?;

        let slot = expenses
            .iter_mut()
            .find(|e| e.id == expense.id)
            .ok_or_else(|| TrackerError::expense_not_found(expense.id.to_string()))?;
        *slot = expense.clone();

        self.save_list(expense.user_id, &expenses)
    }

    /// Remove an expense from the owning profile's list
    pub fn remove(&self, user_id: UserId, id: ExpenseId) -> TrackerResult<()> {
        let mut expenses = self.list(user_id)?;

        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return Err(TrackerError::expense_not_found(id.to_string()));
        }

        self.save_list(user_id, &expenses)
    }

    /// Overwrite a profile's entire expense list
    pub fn save_list(&self, user_id: UserId, expenses: &[Expense]) -> TrackerResult<()> {
        write_entry(self.port.as_ref(), &Self::key_for(user_id), &expenses)
    }
}
