//! Settings structures

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::tracing::{TracingConfig, TracingLevel, TracingOutput};

/// Default opening delimiter for placeholders in template content
pub const DEFAULT_OPEN_DELIMITER: &str = "{{";

/// Default closing delimiter for placeholders in template content
pub const DEFAULT_CLOSE_DELIMITER: &str = "}}";

/// Default separator between names rendered into one placeholder
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Export formatting
    pub export: ExportSettings,
    /// Placeholder syntax and rendering
    pub placeholders: PlaceholderSettings,
    /// Logging
    pub logging: LoggingSettings,
}

/// Export formatting settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Indent exported JSON instead of writing it on one line
    pub pretty: bool,
}

/// Placeholder syntax settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderSettings {
    /// Opening delimiter, `{{` by default
    pub open: String,
    /// Closing delimiter, `}}` by default
    pub close: String,
    /// Text placed between names when several fill one placeholder
    pub separator: String,
}

impl Default for PlaceholderSettings {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN_DELIMITER.to_string(),
            close: DEFAULT_CLOSE_DELIMITER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Minimum level for `namefill_core` events
    pub level: TracingLevel,
    /// Full `EnvFilter` directive, overrides `level` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Log file, truncated on startup; stderr when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LoggingSettings {
    /// Builds the tracing configuration these settings describe
    #[must_use]
    pub fn to_tracing_config(&self) -> TracingConfig {
        TracingConfig {
            level: self.level,
            output: self
                .file
                .clone()
                .map_or(TracingOutput::Stderr, |path| TracingOutput::File { path }),
            include_target: true,
            filter: self.filter.clone(),
        }
    }
}

impl Settings {
    /// Parses and validates settings from TOML text
    ///
    /// Missing sections and fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, does not match the
    /// schema, or holds an invalid value.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serializes the settings to TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Checks that every value is usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.placeholders.open.trim().is_empty() {
            return Err(invalid("placeholders.open", "must not be empty"));
        }
        if self.placeholders.close.trim().is_empty() {
            return Err(invalid("placeholders.close", "must not be empty"));
        }
        if let Err(e) = self.logging.to_tracing_config().env_filter() {
            return Err(invalid("logging.filter", &e.to_string()));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
