use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

/// What a hook tells the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookDecision {
    /// Let the agent stop (exit 0)
    Proceed { system_message: String },
    /// Work remains; the agent must be re-invoked (exit 1)
    Blocked { error_message: String },
}

/// Wire shape of a decision on stdout
#[derive(Serialize)]
#[serde(untagged)]
enum WireDecision<'a> {
    Proceed {
        #[serde(rename = "continue")]
        proceed: bool,
        #[serde(rename = "systemMessage")]
        system_message: &'a str,
    },
    Blocked {
        error: &'a str,
    },
}

impl HookDecision {
    pub fn proceed(message: impl Into<String>) -> Self {
        HookDecision::Proceed {
            system_message: message.into(),
        }
    }

    pub fn blocked(message: impl Into<String>) -> Self {
        HookDecision::Blocked {
            error_message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            HookDecision::Proceed { .. } => 0,
            HookDecision::Blocked { .. } => 1,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let wire = match self {
            HookDecision::Proceed { system_message } => WireDecision::Proceed {
                proceed: true,
                system_message,
            },
            HookDecision::Blocked { error_message } => WireDecision::Blocked {
                error: error_message,
            },
        };
        serde_json::to_string(&wire).context("Failed to serialize hook decision")
    }

    /// Write the decision as a single JSON line
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let json = self.to_json()?;
        writeln!(out, "{}", json).context("Failed to write hook decision")?;
        out.flush().context("Failed to flush hook decision")
    }
}

/// Emit the decision (if any) on stdout and map it to the process exit code.
/// `None` is a silent success.
pub fn finish(decision: Option<HookDecision>) -> ExitCode {
    let Some(decision) = decision else {
        return ExitCode::SUCCESS;
    };

    if let Err(err) = decision.write_to(&mut io::stdout().lock()) {
        tracing::warn!("{:#}", err);
    }

    ExitCode::from(decision.exit_code())
}
