//! taskgate-todo-check: keep an agent working while any TodoWrite item is
//! pending or in progress. Silent when there is nothing to check.

use std::process::ExitCode;

use taskgate::hooks::todo_check;
use taskgate::{input, logging, verdict};

fn main() -> ExitCode {
    logging::init();

    let raw = match input::read_stdin() {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("{:#}", err);
            return ExitCode::SUCCESS;
        }
    };

    verdict::finish(todo_check::evaluate(&raw))
}
