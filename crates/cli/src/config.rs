//! Runtime configuration from the environment

use std::path::PathBuf;

use todo_core::storage::StorageKeys;

const DEFAULT_DATA_DIR: &str = ".todo-data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory for the `<key>.json` snapshot files
    pub data_dir: PathBuf,
    pub keys: StorageKeys,
    /// Rename a category on its tasks when the category is renamed
    pub cascade_category_renames: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            keys: StorageKeys::default(),
            cascade_category_renames: true,
        }
    }
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source (`TODO_DATA_DIR`, `TODO_TASKS_KEY`,
    /// `TODO_CATEGORIES_KEY`, `TODO_CASCADE_RENAMES`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_dir = non_empty(lookup("TODO_DATA_DIR"))
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let keys = StorageKeys {
            tasks_key: non_empty(lookup("TODO_TASKS_KEY")).unwrap_or(defaults.keys.tasks_key),
            categories_key: non_empty(lookup("TODO_CATEGORIES_KEY"))
                .unwrap_or(defaults.keys.categories_key),
        };
        let cascade_category_renames = parse_flag(
            lookup("TODO_CASCADE_RENAMES"),
            defaults.cascade_category_renames,
        );

        Self {
            data_dir,
            keys,
            cascade_category_renames,
        }
    }
}
