//! Task repository
//!
//! Persists each profile's task list under the `todos_<userId>` key, mirroring
//! the expense key convention.

use std::sync::Arc;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Todo, TodoId, UserId};

use super::port::{read_entry, write_entry, StoragePort};

/// Repository for task persistence
pub struct TodoRepository {
    port: Arc<dyn StoragePort>,
}

impl TodoRepository {
    /// Create a new task repository over a storage port
    pub fn new(port: Arc<dyn StoragePort>) -> Self {
        Self { port }
    }

    /// Storage key for a profile's task list
    pub fn key_for(user_id: UserId) -> String {
        format!("todos_{}", user_id.as_uuid())
    }

    /// Load all tasks for a profile, in stored order
    pub fn list(&self, user_id: UserId) -> TrackerResult<Vec<Todo>> {
        Ok(read_entry(self.port.as_ref(), &Self::key_for(user_id))?.unwrap_or_default())
    }

    /// Get a single task by id
    pub fn get(&self, user_id: UserId, id: TodoId) -> TrackerResult<Option<Todo>> {
        Ok(self.list(user_id)?.into_iter().find(|t| t.id == id))
    }

    /// Append a new task to the owning profile's list
    pub fn add(&self, todo: &Todo) -> TrackerResult<()> {
        let mut todos = self.list(todo.user_id)?;
        todos.push(todo.clone());
        self.save_list(todo.user_id, &todos)
    }

    /// Replace an existing task wholesale (matched by id)
    pub fn update(&self, todo: &Todo) -> TrackerResult<()> {
        let mut todos = self.list(todo.user_id)?;

        let slot = todos
            .iter_mut()
            .find(|t| t.id == todo.id)
            .ok_or_else(|| TrackerError::task_not_found(todo.id.to_string()))?;
        *slot = todo.clone();

        self.save_list(todo.user_id, &todos)
    }

    /// Remove a task from the owning profile's list
    pub fn remove(&self, user_id: UserId, id: TodoId) -> TrackerResult<()> {
        let mut todos = self.list(user_id)?;

        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Err(TrackerError::task_not_found(id.to_string()));
        }

        self.save_list(user_id, &todos)
    }

    /// Overwrite a profile's entire task list
    pub fn save_list(&self, user_id: UserId, todos: &[Todo]) -> TrackerResult<()> {
        write_entry(self.port.as_ref(), &Self::key_for(user_id), &todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TodoPriority, TodoStatus};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn repo() -> TodoRepository {
        TodoRepository::new(Arc::new(MemoryStore::new()))
    }

    fn todo(user_id: UserId, title: &str) -> Todo {
        Todo::new(
            user_id,
            title,
            "Check statements against budget",
            TodoPriority::Medium,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        )
    }

    #[test]
    fn test_add_and_list() {
        let repo = repo();
        let user_id = UserId::new();

        repo.add(&todo(user_id, "Review budget")).unwrap();
        repo.add(&todo(user_id, "Pay rent")).unwrap();

        let listed = repo.list(user_id).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "Review budget");
    }

    #[test]
    fn test_update_status_persists() {
        let repo = repo();
        let user_id = UserId::new();
        let mut task = todo(user_id, "Review budget");
        repo.add(&task).unwrap();

        task.set_status(TodoStatus::Completed);
        repo.update(&task).unwrap();

        let loaded = repo.get(user_id, task.id).unwrap().unwrap();
        assert_eq!(loaded.status, TodoStatus::Completed);
        assert!(loaded.updated_at >= loaded.created_at);
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let repo = repo();
        let user_id = UserId::new();

        let err = repo.remove(user_id, TodoId::new()).unwrap_err();
        assert!(err.is_not_found());
    }
}
