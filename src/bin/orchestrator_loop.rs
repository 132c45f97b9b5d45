//! taskgate-orchestrator-loop: re-invoke `coder-orchestrator` while
//! `feature_list.md` or `architects_digest.md` still list open work.

use std::process::ExitCode;

use taskgate::hooks::orchestrator_loop;
use taskgate::{input, logging, verdict};

fn main() -> ExitCode {
    logging::init();

    let raw = input::read_stdin().unwrap_or_else(|err| {
        tracing::warn!("{:#}", err);
        String::new()
    });

    verdict::finish(Some(orchestrator_loop::evaluate(&raw)))
}
