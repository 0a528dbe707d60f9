use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from file: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    #[error("Missing [{0}] section in configuration")]
    MissingSection(&'static str),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
