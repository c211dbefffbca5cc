use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Picks the filter directive.
///
/// Priority: `RUST_LOG` > `--debug` > settings `log_level` > "info".
pub fn filter_directive(env: Option<&str>, debug_flag: bool, config_level: Option<&str>) -> String {
    match (env, debug_flag, config_level) {
        (Some(env), _, _) if !env.is_empty() => env.to_string(),
        (_, true, _) => "debug".to_string(),
        (_, _, Some(level)) => level.to_string(),
        _ => DEFAULT_LOG_LEVEL.to_string(),
    }
}

/// Initialise tracing, appending to `log_file`.
///
/// The terminal belongs to the TUI while it runs, so nothing is written to
/// stderr.
pub fn init(log_file: &Path, debug_flag: bool, config_level: Option<&str>) -> Result<()> {
    let env = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(env.as_deref(), debug_flag, config_level);
    let filter = EnvFilter::try_new(&directive)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL))
        .context("Failed to build log filter")?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        filter = %directive,
        "Logging initialised"
    );
    Ok(())
}
