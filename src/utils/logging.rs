//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the university schedule service.

use tracing::{info, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::utils::errors::{UniversityError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer when dropped, so the caller
/// must keep it alive for as long as the process runs.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| UniversityError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stdout))
            .with(fmt::layer().json().with_ansi(false).with_writer(non_blocking))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stdout))
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .try_init()
    };
    installed.map_err(|e| UniversityError::Config(format!("Failed to install tracing subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a completed write against one of the entity tables
pub fn log_entity_action(entity: &str, action: &str, id: Option<i32>) {
    info!(
        entity = entity,
        action = action,
        id = id,
        "Entity action performed"
    );
}

/// Log a bulk operation and how many rows it touched
pub fn log_bulk_action(entity: &str, action: &str, affected: u64) {
    debug!(
        entity = entity,
        action = action,
        affected = affected,
        "Bulk action performed"
    );
}
