//! Logging setup
//!
//! Logs go to stderr; stdout only carries the result line.

use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "info";

/// Filter directives for the given level, scoped to this workspace's crates
pub fn default_directives(level: Option<&str>) -> String {
    let level = level.unwrap_or(DEFAULT_LEVEL);
    format!("zebra_sender={level},zebra_spool={level}")
}

/// Initialize the logger. `RUST_LOG` takes precedence over `level`.
pub fn init_logger(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(level).into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
