//! Loads and saves full collection snapshots

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::kv::KeyValueStore;
use crate::category::Category;
use crate::task::Task;
use crate::Result;

pub const DEFAULT_TASKS_KEY: &str = "tasks";
pub const DEFAULT_CATEGORIES_KEY: &str = "categories";

/// Keys under which each collection is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageKeys {
    pub tasks_key: String,
    pub categories_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks_key: DEFAULT_TASKS_KEY.to_string(),
            categories_key: DEFAULT_CATEGORIES_KEY.to_string(),
        }
    }
}

/// A collection read back from the medium
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    pub records: Vec<T>,
    /// Records (or the whole document) that could not be read and were
    /// left out. A snapshot with losses must not be written back as-is.
    pub discarded: usize,
}

impl<T> Snapshot<T> {
    fn complete(records: Vec<T>) -> Self {
        Self {
            records,
            discarded: 0,
        }
    }

    /// Whether every stored record made it into `records`
    pub fn is_complete(&self) -> bool {
        self.discarded == 0
    }
}

/// Snapshot persistence for the task and category collections
///
/// Loading is fail-open: a missing key, a `null` value, or content that
/// does not parse all yield an empty collection, and individual records
/// that do not match the schema are skipped. Errors from the medium
/// itself are propagated.
#[derive(Clone)]
pub struct PersistenceAdapter {
    store: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl PersistenceAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub async fn load_tasks(&self) -> Result<Snapshot<Task>> {
        self.load_snapshot(&self.keys.tasks_key).await
    }

    pub async fn load_categories(&self) -> Result<Snapshot<Category>> {
        self.load_snapshot(&self.keys.categories_key).await
    }

    pub async fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        self.save_snapshot(&self.keys.tasks_key, tasks).await
    }

    pub async fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.save_snapshot(&self.keys.categories_key, categories)
            .await
    }

    async fn load_snapshot<T: DeserializeOwned>(&self, key: &str) -> Result<Snapshot<T>> {
        let Some(content) = self.store.get(key).await? else {
            tracing::debug!(key, "No snapshot stored, starting empty");
            return Ok(Snapshot::complete(Vec::new()));
        };

        let values = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&content) {
            Ok(values) => values.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(key, error = %err, "Ignoring unparsable snapshot");
                return Ok(Snapshot {
                    records: Vec::new(),
                    discarded: 1,
                });
            }
        };

        let mut snapshot = Snapshot::complete(Vec::with_capacity(values.len()));
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<T>(value) {
                Ok(record) => snapshot.records.push(record),
                Err(err) => {
                    tracing::warn!(key, index, error = %err, "Skipping unreadable record");
                    snapshot.discarded += 1;
                }
            }
        }
        Ok(snapshot)
    }

    async fn save_snapshot<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let content = serde_json::to_string(records)?;
        self.store.set(key, content).await?;
        tracing::debug!(key, count = records.len(), "Snapshot written");
        Ok(())
    }
}
