//! Task service
//!
//! Business logic for budget task management: validated create, status
//! changes that touch the modification timestamp, delete, and filtered
//! listing.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Todo, TodoId, TodoPriority, TodoStatus, UserId};
use crate::storage::Store;

/// Criteria for filtering tasks
///
/// All set criteria apply conjunctively; each is an exact match. No sorting
/// is applied, the input order is preserved.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    /// Exact status match
    pub status: Option<TodoStatus>,
    /// Exact priority match
    pub priority: Option<TodoPriority>,
    /// Exact category match
    pub category: Option<Category>,
}

impl TodoFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by status
    pub fn status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter by priority
    pub fn priority(mut self, priority: TodoPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Whether a single task passes every active criterion
    pub fn matches(&self, todo: &Todo) -> bool {
        if let Some(status) = self.status {
            if todo.status != status {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if todo.priority != priority {
                return false;
            }
        }

        if let Some(category) = self.category {
            if todo.category != Some(category) {
                return false;
            }
        }

        true
    }

    /// Apply the filter to a list of tasks, preserving input order
    pub fn apply(&self, todos: &[Todo]) -> Vec<Todo> {
        todos.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Input for creating a new task
#[derive(Debug, Clone)]
pub struct CreateTodoInput {
    pub title: String,
    pub description: String,
    pub priority: TodoPriority,
    pub due_date: NaiveDate,
    pub budget: Option<f64>,
    pub category: Option<Category>,
}

/// Service for task management
pub struct TodoService<'a> {
    store: &'a Store,
}

impl<'a> TodoService<'a> {
    /// Create a new task service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new pending task for a profile
    pub fn create(&self, user_id: UserId, input: CreateTodoInput) -> TrackerResult<Todo> {
        let mut todo = Todo::new(
            user_id,
            input.title.trim(),
            input.description.trim(),
            input.priority,
            input.due_date,
        );
        todo.budget = input.budget;
        todo.category = input.category;

        todo.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.store.todos.add(&todo)?;
        Ok(todo)
    }

    /// Change a task's status, touching its modification timestamp
    pub fn set_status(
        &self,
        user_id: UserId,
        id: TodoId,
        status: TodoStatus,
    ) -> TrackerResult<Todo> {
        let mut todo = self
            .store
            .todos
            .get(user_id, id)?
            .ok_or_else(|| TrackerError::task_not_found(id.to_string()))?;

        todo.set_status(status);
        self.store.todos.update(&todo)?;
        Ok(todo)
    }

    /// Delete a task from a profile's list
    pub fn delete(&self, user_id: UserId, id: TodoId) -> TrackerResult<()> {
        self.store.todos.remove(user_id, id)
    }

    /// Resolve a task from a full UUID or the short `task-xxxxxxxx` form
    /// shown in listings
    ///
    /// A short fragment must match exactly one task; an ambiguous fragment
    /// is a validation error.
    pub fn resolve(&self, user_id: UserId, identifier: &str) -> TrackerResult<Todo> {
        if let Ok(id) = identifier.parse::<TodoId>() {
            if let Some(todo) = self.store.todos.get(user_id, id)? {
                return Ok(todo);
            }
            return Err(TrackerError::task_not_found(identifier));
        }

        let fragment = identifier
            .strip_prefix("task-")
            .unwrap_or(identifier)
            .to_lowercase();
        if fragment.is_empty() {
            return Err(TrackerError::task_not_found(identifier));
        }

        let todos = self.store.todos.list(user_id)?;
        let mut matches = todos
            .into_iter()
            .filter(|t| t.id.as_uuid().to_string().starts_with(&fragment));

        match (matches.next(), matches.next()) {
            (Some(todo), None) => Ok(todo),
            (Some(_), Some(_)) => Err(TrackerError::Validation(format!(
                "Task id '{}' is ambiguous, use more characters",
                identifier
            ))),
            _ => Err(TrackerError::task_not_found(identifier)),
        }
    }

    /// List a profile's tasks matching a filter
    pub fn list(&self, user_id: UserId, filter: &TodoFilter) -> TrackerResult<Vec<Todo>> {
        let todos = self.store.todos.list(user_id)?;
        Ok(filter.apply(&todos))
    }
}
