use crate::input::{TodoItem, TodoStatus};

const UNKNOWN_TASK: &str = "Unknown task";

/// Todos that still block completion, in input order
#[derive(Debug, Default, PartialEq)]
pub struct IncompleteTodos<'a> {
    pub in_progress: Vec<&'a TodoItem>,
    pub pending: Vec<&'a TodoItem>,
}

impl IncompleteTodos<'_> {
    pub fn count(&self) -> usize {
        self.in_progress.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Split todos into in-progress and pending. Completed or unrecognized statuses are dropped.
pub fn partition(todos: &[TodoItem]) -> IncompleteTodos<'_> {
    let mut incomplete = IncompleteTodos::default();
    for todo in todos {
        match todo.status {
            TodoStatus::Pending => incomplete.pending.push(todo),
            TodoStatus::InProgress => incomplete.in_progress.push(todo),
            TodoStatus::Completed | TodoStatus::Other(_) => {}
        }
    }
    incomplete
}

/// Numbered list under a label; empty string when there is nothing to show
pub fn format_todo_list(todos: &[&TodoItem], label: &str) -> String {
    if todos.is_empty() {
        return String::new();
    }

    let mut lines = vec![format!("\n{}:", label)];
    for (i, todo) in todos.iter().enumerate() {
        let content = todo.content.as_deref().unwrap_or(UNKNOWN_TASK);
        lines.push(format!("  {}. {}", i + 1, content));
    }
    lines.join("\n")
}
