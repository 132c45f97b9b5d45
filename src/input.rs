use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{self, Read};

/// Outcome of reading the raw hook payload
#[derive(Debug)]
pub enum Payload {
    /// Nothing (or only whitespace) arrived on stdin
    Empty,
    /// Not valid JSON, or valid JSON that isn't an object
    Invalid,
    Parsed(HookInput),
}

/// Input JSON from Claude Code hook system.
///
/// Every field has a default; absent or wrongly-typed values are never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct HookInput {
    pub cwd: String,
    pub subagent_name: String,
    /// Only used to tag log lines
    pub session_id: String,
    /// Only present for the todo check
    pub todos: Vec<TodoItem>,
}

impl Default for HookInput {
    fn default() -> Self {
        Self {
            cwd: ".".to_string(),
            subagent_name: String::new(),
            session_id: String::new(),
            todos: Vec::new(),
        }
    }
}

/// Lifecycle status of a todo item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoStatus {
    Pending,
    InProgress,
    Completed,
    /// Anything else, including a missing status. Never blocks.
    Other(String),
}

impl TodoStatus {
    fn parse(raw: &str) -> Self {
        match raw {
            "pending" => TodoStatus::Pending,
            "in_progress" => TodoStatus::InProgress,
            "completed" => TodoStatus::Completed,
            other => TodoStatus::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub content: Option<String>,
    pub status: TodoStatus,
    /// Display-only
    pub active_form: Option<String>,
}

impl TodoItem {
    fn from_value(value: &Value) -> Self {
        TodoItem {
            content: str_field(value, "content").map(String::from),
            status: TodoStatus::parse(str_field(value, "status").unwrap_or("")),
            active_form: str_field(value, "activeForm").map(String::from),
        }
    }
}

impl HookInput {
    /// Build from a JSON object, defaulting every field that is missing or of the wrong shape
    pub fn from_value(value: &Value) -> Self {
        let defaults = HookInput::default();
        let todos = value
            .get("todos")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(TodoItem::from_value).collect())
            .unwrap_or_default();

        HookInput {
            cwd: str_field(value, "cwd").map_or(defaults.cwd, String::from),
            subagent_name: str_field(value, "subagent_name")
                .map_or(defaults.subagent_name, String::from),
            session_id: str_field(value, "session_id").map_or(defaults.session_id, String::from),
            todos,
        }
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Read the whole of stdin. Invalid UTF-8 is replaced rather than rejected.
pub fn read_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read hook input from stdin")?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Parse raw stdin text into a payload
pub fn parse_payload(raw: &str) -> Payload {
    if raw.trim().is_empty() {
        return Payload::Empty;
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(value) if value.is_object() => Payload::Parsed(HookInput::from_value(&value)),
        Ok(_) => {
            tracing::debug!("hook payload is not a JSON object");
            Payload::Invalid
        }
        Err(err) => {
            tracing::debug!(%err, "hook payload is not valid JSON");
            Payload::Invalid
        }
    }
}
