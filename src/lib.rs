//! SubagentStop hooks that keep an agent iterating until its tracked work is done.
//!
//! Each binary reads one JSON payload on stdin, prints at most one JSON decision
//! on stdout, and exits 0 to let the agent stop or 1 to force another iteration.

pub mod checks;
pub mod config;
pub mod hooks;
pub mod input;
pub mod logging;
pub mod verdict;
