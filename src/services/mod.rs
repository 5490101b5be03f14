//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, generated ids and timestamps, and filtering.

pub mod expense;
pub mod profile;
pub mod todo;

pub use expense::{CreateExpenseInput, ExpenseFilter, ExpenseService};
pub use profile::ProfileService;
pub use todo::{CreateTodoInput, TodoFilter, TodoService};
