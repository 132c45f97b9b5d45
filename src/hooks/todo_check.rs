//! Gate for any agent: block while its TodoWrite list has unfinished items.

use crate::checks::todos::{format_todo_list, partition, IncompleteTodos};
use crate::input::{parse_payload, HookInput, Payload};
use crate::verdict::HookDecision;

const ACTION_STEPS: &[&str] = &[
    "1. Mark the current in_progress task as 'completed' when done",
    "2. Set the next pending task to 'in_progress'",
    "3. Complete the work for that task",
    "4. Repeat until ALL tasks are 'completed'",
];

fn blocked_message(incomplete: &IncompleteTodos) -> String {
    let mut parts = vec![
        format!(
            "❌ INCOMPLETE TASKS DETECTED: {} task(s) remain unfinished.",
            incomplete.count()
        ),
        String::new(),
        "You MUST continue iterating over the TodoWrite tasks until ALL are completed."
            .to_string(),
        "Do NOT stop until every task shows status='completed'.".to_string(),
    ];

    if !incomplete.in_progress.is_empty() {
        parts.push(format_todo_list(
            &incomplete.in_progress,
            "🔄 IN PROGRESS (finish these first)",
        ));
    }
    if !incomplete.pending.is_empty() {
        parts.push(format_todo_list(
            &incomplete.pending,
            "⏳ PENDING (work on these next)",
        ));
    }

    parts.push(String::new());
    parts.push("ACTION REQUIRED:".to_string());
    parts.extend(ACTION_STEPS.iter().map(|s| s.to_string()));

    parts.join("\n")
}

/// Decide for an already-parsed payload. `None` means there was nothing to check.
pub fn decide(input: &HookInput) -> Option<HookDecision> {
    if input.todos.is_empty() {
        tracing::debug!(session = %input.session_id, "no todos in payload");
        return None;
    }

    let incomplete = partition(&input.todos);
    tracing::info!(
        session = %input.session_id,
        total = input.todos.len(),
        in_progress = incomplete.in_progress.len(),
        pending = incomplete.pending.len(),
        "todo scan"
    );

    if incomplete.is_empty() {
        Some(HookDecision::proceed("✅ All TodoWrite tasks completed."))
    } else {
        Some(HookDecision::blocked(blocked_message(&incomplete)))
    }
}

/// Evaluate raw stdin. Anything unreadable is a silent pass.
pub fn evaluate(raw: &str) -> Option<HookDecision> {
    match parse_payload(raw) {
        Payload::Empty | Payload::Invalid => None,
        Payload::Parsed(input) => decide(&input),
    }
}
