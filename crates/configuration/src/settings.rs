use crate::error::ConfigError;
use core_types::{Event, Metric, Property};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional; omitted sections fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// The rental unit to price. Only pricing commands require it.
    #[serde(default)]
    pub property: Option<Property>,
    #[serde(default)]
    pub pricing: PricingSettings,
    #[serde(default)]
    pub analytics: AnalyticsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Contains the event catalog the pricing engine is built with.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingSettings {
    /// Start from the bundled Rome 2025 calendar.
    #[serde(default = "default_true")]
    pub use_default_catalog: bool,
    /// Extra events appended to (or, without the default, replacing) the catalog.
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Defaults for the content performance report.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsSettings {
    /// How many items the top and worst lists hold.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// The metric those lists are ranked by.
    #[serde(default)]
    pub rank_metric: Metric,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "pricing=debug").
    #[serde(default = "default_level")]
    pub level: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

fn default_true() -> bool {
    true
}

fn default_top_n() -> usize {
    5
}

fn default_level() -> String {
    "info".to_string()
}

fn default_file_prefix() -> String {
    "insights.log".to_string()
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            use_default_catalog: true,
            events: Vec::new(),
        }
    }
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            rank_metric: Metric::default(),
        }
    }
}

impl AnalyticsSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "analytics.top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Applies command-line overrides, held to the same rules as the file.
    pub fn with_overrides(
        &self,
        top_n: Option<usize>,
        rank_metric: Option<Metric>,
    ) -> Result<Self, ConfigError> {
        let merged = Self {
            top_n: top_n.unwrap_or(self.top_n),
            rank_metric: rank_metric.unwrap_or(self.rank_metric),
        };
        merged.validate()?;
        Ok(merged)
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: None,
            file_prefix: default_file_prefix(),
        }
    }
}

impl Settings {
    /// Checks the values serde cannot: positive base price, non-zero `top_n`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(property) = &self.property {
            if property.base_price <= Decimal::ZERO {
                return Err(ConfigError::ValidationError(format!(
                    "property.base_price must be greater than 0 (got {})",
                    property.base_price
                )));
            }
        }
        self.analytics.validate()
    }

    /// The configured property, or an error naming the missing section.
    pub fn property(&self) -> Result<&Property, ConfigError> {
        self.property
            .as_ref()
            .ok_or(ConfigError::MissingSection("property"))
    }
}
