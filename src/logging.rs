use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (EnvFilter syntax)
pub const LOG_ENV: &str = "TASKGATE_LOG";

/// Install the stderr subscriber. Stdout is reserved for the hook decision.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
