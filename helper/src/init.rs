use anyhow::{Context, Result};
use std::env::var;
use tracing::subscriber::set_global_default;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_forest::ForestLayer;
use tracing_log::LogTracer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Compose the `tracing` layers and register them as the global default.
///
/// Logs go both to the console (as a forest of spans) and to a file; the
/// returned guard flushes the file writer when dropped, so keep it alive
/// until the process exits. It should only be called once!
pub fn init_subscriber(
    default_log_filename: &str,
    env_filter: &str,
) -> Result<WorkerGuard> {
    // Env variable LOG_CONFIG_PATH points at the path where
    // LOG_CONFIG_FILENAME is located
    let log_config_path =
        var("LOG_CONFIG_PATH").unwrap_or_else(|_| "./".to_string());
    // Env variable LOG_CONFIG_FILENAME names the log file
    let log_config_filename = var("LOG_CONFIG_FILENAME")
        .unwrap_or_else(|_| default_log_filename.to_string());

    let file_appender =
        tracing_appender::rolling::never(log_config_path, log_config_filename);
    let (non_blocking_file, guard) =
        tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));

    let subscriber = Registry::default()
        .with(env_filter)
        .with(
            fmt::Layer::default()
                .with_ansi(false)
                .with_writer(non_blocking_file),
        )
        .with(ForestLayer::default());

    LogTracer::init().context("Failed to set logger")?;
    set_global_default(subscriber).context("Failed to set subscriber")?;

    Ok(guard)
}
