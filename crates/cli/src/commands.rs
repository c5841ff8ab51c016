//! Command execution and output rendering

use std::fmt::Write as _;

use serde::Serialize;
use todo_core::category::Category;
use todo_core::task::{Task, TaskDraft};
use todo_core::{Result, Submission, TodoController};

use crate::cli::{CategoryCommand, Command, TaskCommand};

/// What a command produced, ready to print
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Snapshot {
        categories: Vec<Category>,
        tasks: Vec<Task>,
    },
    Tasks {
        tasks: Vec<Task>,
    },
    Categories {
        categories: Vec<Category>,
    },
    Task {
        task: Task,
    },
    Category {
        category: Category,
    },
    Removed {
        entity: &'static str,
        id: i64,
    },
    NotFound {
        entity: &'static str,
        id: i64,
    },
}

pub async fn execute(controller: &mut TodoController, command: Command) -> Result<Report> {
    match command {
        Command::List => Ok(Report::Snapshot {
            categories: controller.categories().to_vec(),
            tasks: controller.tasks().to_vec(),
        }),
        Command::Task(command) => execute_task(controller, command).await,
        Command::Category(command) => execute_category(controller, command).await,
    }
}

async fn execute_task(controller: &mut TodoController, command: TaskCommand) -> Result<Report> {
    match command {
        TaskCommand::Add {
            name,
            category,
            description,
        } => {
            let draft = TaskDraft::new(name, category).with_description(description);
            let submission = controller.submit_task(draft).await?;
            Ok(task_report(submission))
        }
        TaskCommand::Edit {
            id,
            name,
            description,
            category,
        } => {
            let Some(current) = controller.task(id).cloned() else {
                return Ok(Report::NotFound { entity: "task", id });
            };
            controller.begin_task_edit(id);

            let mut draft = TaskDraft::from_task(&current);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(category) = category {
                draft.category = category;
            }

            let submission = controller.submit_task(draft).await?;
            Ok(task_report(submission))
        }
        TaskCommand::Remove { id } => {
            if controller.remove_task(id).await? {
                Ok(Report::Removed { entity: "task", id })
            } else {
                Ok(Report::NotFound { entity: "task", id })
            }
        }
        TaskCommand::List { category } => {
            let tasks = match &category {
                Some(name) => controller.tasks_in_category(name).cloned().collect(),
                None => controller.tasks().to_vec(),
            };
            Ok(Report::Tasks { tasks })
        }
    }
}

async fn execute_category(
    controller: &mut TodoController,
    command: CategoryCommand,
) -> Result<Report> {
    match command {
        CategoryCommand::Add { name } => {
            let submission = controller.submit_category(name).await?;
            Ok(category_report(submission))
        }
        CategoryCommand::Rename { id, name } => {
            if controller.category(id).is_none() {
                return Ok(Report::NotFound {
                    entity: "category",
                    id,
                });
            }
            controller.begin_category_edit(id);

            let submission = controller.submit_category(name).await?;
            Ok(category_report(submission))
        }
        CategoryCommand::Remove { id } => {
            if controller.remove_category(id).await? {
                Ok(Report::Removed {
                    entity: "category",
                    id,
                })
            } else {
                Ok(Report::NotFound {
                    entity: "category",
                    id,
                })
            }
        }
        CategoryCommand::List => Ok(Report::Categories {
            categories: controller.categories().to_vec(),
        }),
    }
}

fn task_report(submission: Submission<Task>) -> Report {
    match submission {
        Submission::Added(task) | Submission::Updated(task) => Report::Task { task },
        Submission::Vanished(id) => Report::NotFound { entity: "task", id },
    }
}

fn category_report(submission: Submission<Category>) -> Report {
    match submission {
        Submission::Added(category) | Submission::Updated(category) => {
            Report::Category { category }
        }
        Submission::Vanished(id) => Report::NotFound {
            entity: "category",
            id,
        },
    }
}

fn render_task(out: &mut String, task: &Task) {
    let _ = writeln!(out, "{}  {} [{}]", task.id, task.name, task.category);
    if !task.description.is_empty() {
        let _ = writeln!(out, "    {}", task.description);
    }
}

fn render_category(out: &mut String, category: &Category) {
    let _ = writeln!(out, "{}  {}", category.id, category.name);
}

fn render_tasks(out: &mut String, tasks: &[Task]) {
    if tasks.is_empty() {
        out.push_str("(no tasks)\n");
    }
    for task in tasks {
        render_task(out, task);
    }
}

fn render_categories(out: &mut String, categories: &[Category]) {
    if categories.is_empty() {
        out.push_str("(no categories)\n");
    }
    for category in categories {
        render_category(out, category);
    }
}

impl Report {
    /// Human-readable rendering
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match self {
            Report::Snapshot { categories, tasks } => {
                out.push_str("Categories:\n");
                render_categories(&mut out, categories);
                out.push_str("\nTasks:\n");
                render_tasks(&mut out, tasks);
            }
            Report::Tasks { tasks } => render_tasks(&mut out, tasks),
            Report::Categories { categories } => render_categories(&mut out, categories),
            Report::Task { task } => render_task(&mut out, task),
            Report::Category { category } => render_category(&mut out, category),
            Report::Removed { entity, id } => {
                let _ = writeln!(out, "Removed {} {}", entity, id);
            }
            Report::NotFound { entity, id } => {
                let _ = writeln!(out, "No {} with id {}; nothing changed", entity, id);
            }
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
