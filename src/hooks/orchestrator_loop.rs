//! Gate for the `coder-orchestrator` subagent: block while the feature list or
//! architect's digest still records open work.

use crate::checks::common::Findings;
use crate::checks::{digest, features};
use crate::config::{resolve_config, ScanConfig};
use crate::input::{parse_payload, HookInput, Payload};
use crate::verdict::HookDecision;
use anyhow::Result;
use std::path::Path;

pub const ORCHESTRATOR_ROLE: &str = "coder-orchestrator";

/// Open work found for the orchestrator
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RemainingWork {
    pub features: Findings,
    pub pending: Findings,
}

impl RemainingWork {
    pub fn total(&self) -> usize {
        self.features.count + self.pending.count
    }
}

/// Read both task sources under `cwd`
pub fn scan_remaining(cwd: &Path, config: &ScanConfig) -> Result<RemainingWork> {
    let features = features::check(&config.feature_list_path(cwd), config.display_limit)?;
    let pending = digest::check(&config.architects_digest_path(cwd), config.display_limit)?;
    Ok(RemainingWork { features, pending })
}

fn blocked_message(work: &RemainingWork) -> String {
    let mut lines = vec![
        format!(
            "INCOMPLETE TASKS DETECTED: {} task(s) remain.",
            work.total()
        ),
        String::new(),
        format!(
            "Re-invoke {} to continue processing tasks.",
            ORCHESTRATOR_ROLE
        ),
    ];
    work.features
        .render_section("Incomplete features", &mut lines);
    work.pending.render_section("Pending tasks", &mut lines);
    lines.join("\n")
}

/// Decide for an already-parsed payload
pub fn decide(input: &HookInput) -> HookDecision {
    if input.subagent_name != ORCHESTRATOR_ROLE {
        tracing::debug!(subagent = %input.subagent_name, "not the orchestrator, skipping");
        return HookDecision::proceed(format!(
            "Skipping: Not {} (got {})",
            ORCHESTRATOR_ROLE, input.subagent_name
        ));
    }

    let cwd = Path::new(&input.cwd);
    let config = resolve_config(cwd);

    let work = match scan_remaining(cwd, &config) {
        Ok(work) => work,
        Err(err) => {
            tracing::warn!(session = %input.session_id, "{:#}", err);
            return HookDecision::proceed(format!(
                "Unable to scan task files ({:#}). Proceeding.",
                err
            ));
        }
    };

    tracing::info!(
        session = %input.session_id,
        features = work.features.count,
        pending = work.pending.count,
        "orchestrator scan"
    );

    if work.total() > 0 {
        HookDecision::blocked(blocked_message(&work))
    } else {
        HookDecision::proceed(format!(
            "All coding tasks complete. {} will be invoked next.",
            config.next_phase
        ))
    }
}

/// Evaluate raw stdin. Never blocks on input it cannot understand.
pub fn evaluate(raw: &str) -> HookDecision {
    match parse_payload(raw) {
        Payload::Empty => HookDecision::proceed("No hook input received. Proceeding."),
        Payload::Invalid => HookDecision::proceed("Invalid hook input. Proceeding."),
        Payload::Parsed(input) => decide(&input),
    }
}
