//! End-to-end tests over a file-backed store
//!
//! Exercises the service layer against real files in a temp directory,
//! reopening the store between steps to verify persistence.

use tempfile::TempDir;

use fintrack::config::paths::TrackerPaths;
use fintrack::models::{Category, TodoPriority, TodoStatus};
use fintrack::reports::ExpenseSummary;
use fintrack::services::{
    CreateExpenseInput, CreateTodoInput, ExpenseFilter, ExpenseService, ProfileService, TodoFilter,
    TodoService,
};
use fintrack::storage::Store;

fn paths(temp_dir: &TempDir) -> TrackerPaths {
    TrackerPaths::with_base_dir(temp_dir.path().to_path_buf())
}

#[test]
fn expenses_survive_store_reopen() {
    let temp_dir = TempDir::new().unwrap();

    let user = {
        let store = Store::open(&paths(&temp_dir)).unwrap();
        let user = ProfileService::new(&store)
            .create("ada@example.com", "Ada Lovelace")
            .unwrap();

        let service = ExpenseService::new(&store);
        service
            .create(
                user.id,
                CreateExpenseInput {
                    amount: 150.50,
                    category: Category::Food,
                    date: "2024-03-15".parse().unwrap(),
                    description: "Grocery shopping".to_string(),
                },
            )
            .unwrap();
        service
            .create(
                user.id,
                CreateExpenseInput {
                    amount: 45.00,
                    category: Category::Transport,
                    date: "2024-03-14".parse().unwrap(),
                    description: "Gas station refill".to_string(),
                },
            )
            .unwrap();
        user
    };

    // Fresh store over the same directory
    let store = Store::open(&paths(&temp_dir)).unwrap();
    assert_eq!(
        ProfileService::new(&store).current().unwrap().id,
        user.id
    );

    let expenses = ExpenseService::new(&store)
        .list(user.id, &ExpenseFilter::new())
        .unwrap();
    assert_eq!(expenses.len(), 2);
    // Most recent first
    assert_eq!(expenses[0].description, "Grocery shopping");

    let summary = ExpenseSummary::from_expenses(&expenses);
    assert!((summary.total - 195.50).abs() < 1e-9);
    assert_eq!(summary.category_sums.len(), 2);
}

#[test]
fn tasks_survive_store_reopen_with_status_change() {
    let temp_dir = TempDir::new().unwrap();

    let (user, task_id) = {
        let store = Store::open(&paths(&temp_dir)).unwrap();
        let user = ProfileService::new(&store)
            .create("grace@example.com", "Grace Hopper")
            .unwrap();

        let task = TodoService::new(&store)
            .create(
                user.id,
                CreateTodoInput {
                    title: "Review subscriptions".to_string(),
                    description: "Cancel unused streaming services".to_string(),
                    priority: TodoPriority::High,
                    due_date: "2024-04-01".parse().unwrap(),
                    budget: Some(50.0),
                    category: Some(Category::Entertainment),
                },
            )
            .unwrap();
        (user, task.id)
    };

    {
        let store = Store::open(&paths(&temp_dir)).unwrap();
        TodoService::new(&store)
            .set_status(user.id, task_id, TodoStatus::Completed)
            .unwrap();
    }

    let store = Store::open(&paths(&temp_dir)).unwrap();
    let completed = TodoService::new(&store)
        .list(user.id, &TodoFilter::new().status(TodoStatus::Completed))
        .unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, task_id);
    assert!(completed[0].updated_at > completed[0].created_at);
}

#[test]
fn profiles_have_isolated_data() {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::open(&paths(&temp_dir)).unwrap();
    let profiles = ProfileService::new(&store);

    let ada = profiles.create("ada@example.com", "Ada Lovelace").unwrap();
    let grace = profiles.create("grace@example.com", "Grace Hopper").unwrap();

    let service = ExpenseService::new(&store);
    service
        .create(
            ada.id,
            CreateExpenseInput {
                amount: 100.0,
                category: Category::Bills,
                date: "2024-03-13".parse().unwrap(),
                description: "Monthly electricity bill".to_string(),
            },
        )
        .unwrap();

    assert_eq!(service.list(ada.id, &ExpenseFilter::new()).unwrap().len(), 1);
    assert!(service.list(grace.id, &ExpenseFilter::new()).unwrap().is_empty());
}

#[test]
fn corrupt_expense_document_surfaces_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let tracker_paths = paths(&temp_dir);
    let store = Store::open(&tracker_paths).unwrap();

    let user = ProfileService::new(&store)
        .create("ada@example.com", "Ada Lovelace")
        .unwrap();

    let key = fintrack::storage::ExpenseRepository::key_for(user.id);
    std::fs::write(
        tracker_paths.data_dir().join(format!("{}.json", key)),
        "{this is not json",
    )
    .unwrap();

    let err = ExpenseService::new(&store)
        .list(user.id, &ExpenseFilter::new())
        .unwrap_err();
    assert!(matches!(err, fintrack::TrackerError::Storage(_)));
}
