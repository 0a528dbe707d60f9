use crate::error::ConfigError;
use crate::settings::LoggingSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the `EnvFilter`: `RUST_LOG` wins, otherwise the configured level.
pub fn env_filter(logging: &LoggingSettings) -> Result<EnvFilter, ConfigError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&logging.level)
            .map_err(|e| ConfigError::Logging(format!("invalid level '{}': {e}", logging.level))),
    }
}

/// Installs the global subscriber.
///
/// Logs always go to stderr so stdout stays clean for tables and JSON. When
/// `logging.directory` is set a daily-rolling file layer is added as well; the
/// returned guard must be held until exit or buffered lines are lost.
pub fn init_tracing(logging: &LoggingSettings) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = env_filter(logging)?;
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match &logging.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|e| {
                ConfigError::Logging(format!("cannot create {}: {e}", dir.display()))
            })?;
            let appender = tracing_appender::rolling::daily(dir, &logging.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    Ok(guard)
}
