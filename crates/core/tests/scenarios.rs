//! End-to-end scenarios over a file-backed store

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;
use todo_core::category::{Category, CategoryAction};
use todo_core::storage::{FileKvStore, KeyValueStore, PersistenceAdapter, StorageKeys};
use todo_core::task::{Task, TaskAction};
use todo_core::{Error, TodoController};

async fn open_controller(root: &Path) -> TodoController {
    let store = Arc::new(FileKvStore::new(root));
    let adapter = PersistenceAdapter::new(store, StorageKeys::default());
    let mut controller = TodoController::new(adapter);
    controller.start().await.unwrap();
    controller
}

async fn seed(root: &Path, categories: &[Category], tasks: &[Task]) {
    let store = FileKvStore::new(root);
    store
        .set("categories", serde_json::to_string(categories).unwrap())
        .await
        .unwrap();
    store
        .set("tasks", serde_json::to_string(tasks).unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn referenced_category_cannot_be_removed() {
    let temp = TempDir::new().unwrap();
    let categories = vec![Category::new(1, "Work")];
    let tasks = vec![Task::new(10, "Report", "Work")];
    seed(temp.path(), &categories, &tasks).await;

    let mut controller = open_controller(temp.path()).await;
    let result = controller.remove_category(1).await;

    assert!(matches!(result, Err(Error::CategoryInUse { .. })));
    assert_eq!(controller.categories(), &categories[..]);
    assert_eq!(controller.tasks(), &tasks[..]);

    let reloaded = open_controller(temp.path()).await;
    assert_eq!(reloaded.categories(), &categories[..]);
}

#[tokio::test]
async fn unreferenced_category_is_removed() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), &[Category::new(1, "Work")], &[]).await;

    let mut controller = open_controller(temp.path()).await;
    assert!(controller.remove_category(1).await.unwrap());
    assert!(controller.categories().is_empty());

    let reloaded = open_controller(temp.path()).await;
    assert!(reloaded.categories().is_empty());
}

#[tokio::test]
async fn entities_survive_reload() {
    let temp = TempDir::new().unwrap();
    let home = Category::new(1, "Home");
    let milk = Task::new(2, "Buy milk", "Home").with_description("oat");

    {
        let mut controller = open_controller(temp.path()).await;
        controller
            .dispatch_categories(CategoryAction::Add(home.clone()))
            .await
            .unwrap();
        controller
            .dispatch_tasks(TaskAction::Add(milk.clone()))
            .await
            .unwrap();
    }

    let reloaded = open_controller(temp.path()).await;
    assert_eq!(reloaded.categories(), &[home]);
    assert_eq!(reloaded.tasks(), &[milk]);
}

#[tokio::test]
async fn corrupt_files_start_empty() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("tasks.json"), "not json at all").unwrap();

    let controller = open_controller(temp.path()).await;
    assert!(controller.tasks().is_empty());
    assert_eq!(
        std::fs::read_to_string(temp.path().join("tasks.json")).unwrap(),
        "not json at all"
    );
}

#[tokio::test]
async fn one_bad_record_does_not_cost_the_rest() {
    let temp = TempDir::new().unwrap();
    let raw = r#"[
  {"id": 10, "name": "Report", "description": "", "category": "Work"},
  {"id": 11, "name": "Dishes", "description": null, "category": "Work"}
]"#;
    seed(temp.path(), &[Category::new(1, "Work")], &[]).await;
    std::fs::write(temp.path().join("tasks.json"), raw).unwrap();

    let mut controller = open_controller(temp.path()).await;
    assert_eq!(controller.tasks(), &[Task::new(10, "Report", "Work")]);
    assert_eq!(
        std::fs::read_to_string(temp.path().join("tasks.json")).unwrap(),
        raw
    );

    // The readable task still guards its category
    assert!(matches!(
        controller.remove_category(1).await,
        Err(Error::CategoryInUse { .. })
    ));
}

#[tokio::test]
async fn snapshot_order_is_insertion_order() {
    let temp = TempDir::new().unwrap();
    let mut controller = open_controller(temp.path()).await;

    for (id, name) in [(30, "c"), (10, "a"), (20, "b")] {
        controller
            .dispatch_tasks(TaskAction::Add(Task::new(id, name, "Misc")))
            .await
            .unwrap();
    }

    let reloaded = open_controller(temp.path()).await;
    let ids: Vec<i64> = reloaded.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}
