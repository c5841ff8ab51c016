//! Command-line definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(about = "Manage tasks and the categories they are filed under")]
#[command(version)]
pub struct Cli {
    /// Directory holding the tasks/categories snapshots (overrides TODO_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show all categories and tasks
    List,

    /// Task management
    #[command(subcommand)]
    Task(TaskCommand),

    /// Category management
    #[command(subcommand)]
    Category(CategoryCommand),
}

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Add a new task
    Add {
        /// Task name
        name: String,
        /// Name of the category to file the task under
        #[arg(short, long)]
        category: String,
        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Edit a task; unspecified fields keep their current value
    Edit {
        /// Task ID
        id: i64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Remove a task
    Remove {
        /// Task ID
        id: i64,
    },

    /// List tasks
    List {
        /// Only tasks in this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// Add a new category
    Add {
        /// Category name
        name: String,
    },

    /// Rename a category
    Rename {
        /// Category ID
        id: i64,
        /// New name
        name: String,
    },

    /// Remove a category no task uses
    Remove {
        /// Category ID
        id: i64,
    },

    /// List categories
    List,
}
