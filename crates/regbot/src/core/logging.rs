//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + optional file)
//! - A panic hook that routes panics into the log
//! - A startup summary of the effective configuration

use anyhow::Result;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config as LogConfig, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use std::fs::OpenOptions;

use crate::core::config::Config;

/// Initialize logger for console and, when a path is given, file output
///
/// # Arguments
/// * `level` - Maximum level to record
/// * `log_file_path` - Optional path to a log file (appended to)
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to open the log file or a logger was already set
pub fn init_logger(level: LevelFilter, log_file_path: Option<&str>) -> Result<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file_path {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", path, e))?;
        loggers.push(WriteLogger::new(level, LogConfig::default(), log_file));
    }

    CombinedLogger::init(loggers).map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Installs a panic hook that logs the panic location and message
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
        if let Some(msg) = panic_info.payload().downcast_ref::<&str>() {
            log::error!("Panic message: {}", msg);
        }
    }));
}

/// Logs the effective configuration at startup. The token is never printed.
pub fn log_configuration(config: &Config) {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("📋 Registration bot configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("Destination group: {}", config.group_chat_id);
    match &config.bot_api_url {
        Some(url) => log::info!("Bot API URL: {}", url),
        None => log::info!("Bot API URL: default"),
    }
    log::info!("Completion keywords: {}", config.completion_keywords);
    log::info!(
        "New submission notice: {}",
        if config.announce_submissions { "enabled" } else { "disabled" }
    );
    if let Some(path) = &config.log_file_path {
        log::info!("Log file: {}", path);
    }
}
