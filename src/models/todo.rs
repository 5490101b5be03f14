//! Budget task model
//!
//! Tasks are user-defined financial action items (e.g. "review phone plan",
//! "set aside holiday fund") tracked through a three-state lifecycle with
//! an optional budget amount and category.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::{TodoId, UserId};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TodoPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for TodoPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for TodoPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!(
                "Unknown priority '{}'. Valid priorities: low, medium, high",
                other
            )),
        }
    }
}

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(format!(
                "Unknown status '{}'. Valid statuses: pending, in_progress, completed",
                other
            )),
        }
    }
}

/// A budget-related action item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,

    /// Short title
    pub title: String,

    /// Longer description of the task
    pub description: String,

    /// Priority level
    pub priority: TodoPriority,

    /// Lifecycle status
    pub status: TodoStatus,

    /// Calendar date the task is due
    pub due_date: NaiveDate,

    /// Optional budget amount attached to the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Optional category the task relates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// The profile that owns this task
    pub user_id: UserId,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last modified
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new pending task with generated id and timestamps
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TodoPriority,
        due_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TodoId::new(),
            title: title.into(),
            description: description.into(),
            priority,
            status: TodoStatus::Pending,
            due_date,
            budget: None,
            category: None,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a budget amount
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Attach a category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Change the status, touching `updated_at`
    pub fn set_status(&mut self, status: TodoStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Validate the task against the input rules
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }

        if self.description.trim().is_empty() {
            return Err(TodoValidationError::EmptyDescription);
        }

        if let Some(budget) = self.budget {
            if !budget.is_finite() || budget <= 0.0 {
                return Err(TodoValidationError::NonPositiveBudget);
            }
        }

        Ok(())
    }
}

/// Validation errors for tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    EmptyTitle,
    EmptyDescription,
    NonPositiveBudget,
}

impl fmt::Display for TodoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Task title cannot be empty"),
            Self::EmptyDescription => write!(f, "Task description cannot be empty"),
            Self::NonPositiveBudget => write!(f, "Task budget must be greater than 0"),
        }
    }
}

impl std::error::Error for TodoValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> Todo {
        Todo::new(
            UserId::new(),
            "Review subscriptions",
            "Cancel unused streaming services",
            TodoPriority::High,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        )
    }

    #[test]
    fn test_new_todo_defaults() {
        let todo = sample_todo();
        assert_eq!(todo.status, TodoStatus::Pending);
        assert!(todo.budget.is_none());
        assert!(todo.category.is_none());
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn test_builders() {
        let todo = sample_todo()
            .with_budget(50.0)
            .with_category(Category::Entertainment);
        assert_eq!(todo.budget, Some(50.0));
        assert_eq!(todo.category, Some(Category::Entertainment));
    }

    #[test]
    fn test_set_status_touches_updated_at() {
        let mut todo = sample_todo();
        let before = todo.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(5));
        todo.set_status(TodoStatus::InProgress);

        assert_eq!(todo.status, TodoStatus::InProgress);
        assert!(todo.updated_at > before);
        assert_eq!(todo.created_at, before);
    }

    #[test]
    fn test_validation() {
        let mut todo = sample_todo();
        assert!(todo.validate().is_ok());

        todo.title = "  ".to_string();
        assert_eq!(todo.validate(), Err(TodoValidationError::EmptyTitle));

        todo.title = "Review subscriptions".to_string();
        todo.budget = Some(-1.0);
        assert_eq!(todo.validate(), Err(TodoValidationError::NonPositiveBudget));
    }

    #[test]
    fn test_status_serialization_snake_case() {
        let json = serde_json::to_string(&TodoStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let parsed: TodoStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, TodoStatus::Completed);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<TodoPriority>().unwrap(), TodoPriority::High);
        assert!("urgent".parse::<TodoPriority>().is_err());
    }

    #[test]
    fn test_status_parse_accepts_dash() {
        assert_eq!(
            "in-progress".parse::<TodoStatus>().unwrap(),
            TodoStatus::InProgress
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let todo = sample_todo().with_budget(120.0);
        let json = serde_json::to_string(&todo).unwrap();
        let deserialized: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(todo, deserialized);
    }
}
