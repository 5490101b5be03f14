//! Core data models for fintrack
//!
//! This module contains all the data structures that represent the tracking
//! domain: expenses, categories, budget tasks, and user profiles.

pub mod category;
pub mod expense;
pub mod ids;
pub mod todo;
pub mod user;

pub use category::{parse_category_filter, Category, CategoryParseError};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{ExpenseId, TodoId, UserId};
pub use todo::{Todo, TodoPriority, TodoStatus, TodoValidationError};
pub use user::{User, UserValidationError};
