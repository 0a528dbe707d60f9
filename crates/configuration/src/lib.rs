use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

// Re-export the core types to provide a clean public API.
pub use settings::{AnalyticsSettings, LoggingSettings, PricingSettings, Settings};
pub use telemetry::init_tracing;

/// Prefix for environment overrides, e.g. `INSIGHTS__ANALYTICS__TOP_N=10`.
pub const ENV_PREFIX: &str = "INSIGHTS";

/// Loads the application configuration from `config.toml` in the working directory.
///
/// The file is optional. Environment variables override it, and the result is
/// validated before being returned.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from("config.toml")
}

/// Same as [`load_config`] but reads the given file instead.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(settings)
}

impl Settings {
    /// Parses settings from an in-memory TOML document, without environment overrides.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;
        settings.validate()?;
        Ok(settings)
    }
}
