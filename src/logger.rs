//! File logging setup
//!
//! Log records go to a file rather than stdout, which belongs to the
//! alternate screen while the TUI is running.

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Initialize the global logger from configuration. A no-op when logging
/// is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(
            fern::log_file(&config.file)
                .with_context(|| format!("Failed to open log file: {}", config.file))?,
        )
        .apply()
        .context("Failed to initialize logger")?;

    Ok(())
}
