//! Controller construction

use std::sync::Arc;

use todo_core::storage::{FileKvStore, PersistenceAdapter};
use todo_core::TodoController;

use crate::config::AppConfig;

/// Open the file-backed store described by `config` and load its snapshots
pub async fn open_controller(config: &AppConfig) -> todo_core::Result<TodoController> {
    let store = Arc::new(FileKvStore::new(config.data_dir.clone()));
    let adapter = PersistenceAdapter::new(store, config.keys.clone());

    let mut controller =
        TodoController::new(adapter).with_cascade_renames(config.cascade_category_renames);
    controller.start().await?;
    Ok(controller)
}
