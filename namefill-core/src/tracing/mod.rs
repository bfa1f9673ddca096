//! Structured logging setup
//!
//! The managers log through the `tracing` macros and never install a
//! subscriber themselves. A host calls [`init_tracing`] once, usually with the
//! configuration built by [`LoggingSettings::to_tracing_config`], to route
//! those events to a terminal stream or a log file.
//!
//! [`LoggingSettings::to_tracing_config`]: crate::config::LoggingSettings::to_tracing_config

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Target selected by a level-only directive
const CRATE_TARGET: &str = "namefill_core";

/// Configuration of the subscriber installed by [`init_tracing`]
static INSTALLED: OnceLock<TracingConfig> = OnceLock::new();

/// Errors raised while setting up logging
#[derive(Debug, Error)]
pub enum TracingError {
    /// A level name is not one of `error`, `warn`, `info`, `debug`, `trace`
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    /// The filter directive could not be parsed
    #[error("Invalid log filter `{directive}`: {reason}")]
    InvalidFilter {
        /// Directive as configured
        directive: String,
        /// Parser message
        reason: String,
    },

    /// The log file could not be created
    #[error("Failed to create log file {path}: {source}")]
    LogFile {
        /// Path of the log file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The global subscriber could not be installed
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// [`init_tracing`] already succeeded once
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,
}

/// Result type for logging setup
pub type TracingResult<T> = Result<T, TracingError>;

/// Minimum level of `namefill_core` events that get written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingLevel {
    /// Rejected imports and other failures
    Error,
    /// Ignored requests such as selecting an unknown template
    Warn,
    /// Imports and template switches
    #[default]
    Info,
    /// Every registry and placeholder mutation
    Debug,
    /// Everything
    Trace,
}

impl TracingLevel {
    /// Returns the lowercase name used in settings files and filters
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = TracingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(TracingError::UnknownLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Standard output
    Stdout,
    /// Standard error
    #[default]
    Stderr,
    /// A file, truncated when logging starts
    File {
        /// Path to the log file
        path: PathBuf,
    },
}

/// Subscriber configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Minimum level when no custom filter is set
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
    /// Whether to print the event target (module path)
    pub include_target: bool,
    /// Full `EnvFilter` directive, overrides `level` when set
    pub filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: TracingLevel::Info,
            output: TracingOutput::Stderr,
            include_target: true,
            filter: None,
        }
    }
}

impl TracingConfig {
    /// Returns the filter directive this configuration installs
    #[must_use]
    pub fn filter_directive(&self) -> String {
        match &self.filter {
            Some(directive) => directive.clone(),
            None => format!("{CRATE_TARGET}={}", self.level),
        }
    }

    /// Parses the filter directive
    ///
    /// # Errors
    ///
    /// Returns `TracingError::InvalidFilter` if the directive does not parse.
    pub fn env_filter(&self) -> TracingResult<EnvFilter> {
        let directive = self.filter_directive();
        EnvFilter::try_new(&directive).map_err(|e| TracingError::InvalidFilter {
            reason: e.to_string(),
            directive,
        })
    }
}

/// Installs the global subscriber described by `config`
///
/// A failed call installs nothing and records nothing, so it can be retried
/// with a corrected configuration.
///
/// # Errors
///
/// Returns an error if a previous call already succeeded, the filter does not
/// parse, the log file cannot be created, or another subscriber is already
/// installed.
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if INSTALLED.get().is_some() {
        return Err(TracingError::AlreadyInitialized);
    }

    let filter = config.env_filter()?;
    let layer = tracing_subscriber::fmt::layer()
        .with_target(config.include_target)
        .with_level(true);
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match &config.output {
        TracingOutput::Stdout => registry
            .with(layer.with_writer(std::io::stdout))
            .try_init(),
        TracingOutput::Stderr => registry
            .with(layer.with_writer(std::io::stderr))
            .try_init(),
        TracingOutput::File { path } => {
            let file = std::fs::File::create(path).map_err(|source| TracingError::LogFile {
                path: path.display().to_string(),
                source,
            })?;
            registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init()
        }
    };
    installed.map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    // Only a subscriber that is actually in place gets recorded
    let _ = INSTALLED.set(config.clone());
    tracing::info!(directive = %config.filter_directive(), "Tracing initialized");
    Ok(())
}

/// Returns `true` once [`init_tracing`] has succeeded
#[must_use]
pub fn is_tracing_initialized() -> bool {
    INSTALLED.get().is_some()
}

/// Returns the configuration of the installed subscriber
#[must_use]
pub fn get_tracing_config() -> Option<&'static TracingConfig> {
    INSTALLED.get()
}

/// Opens an info-level span for a store operation
///
/// ```ignore
/// let _span = trace_operation!(span_names::IMPORT_EXECUTE, collection = "names").entered();
/// ```
#[macro_export]
macro_rules! trace_operation {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Opens a debug-level span for frequent operations
#[macro_export]
macro_rules! trace_operation_debug {
    ($name:expr) => {
        tracing::debug_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::debug_span!($name, $($field)*)
    };
}

/// Span names used by the managers and the store
pub mod span_names {
    /// Collection import
    pub const IMPORT_EXECUTE: &str = "import.execute";
    /// Collection export
    pub const EXPORT_EXECUTE: &str = "export.execute";
    /// Active template switch
    pub const TEMPLATE_SELECT: &str = "template.select";
    /// Placeholder re-initialization
    pub const PLACEHOLDER_INITIALIZE: &str = "placeholder.initialize";
    /// Rendering the active template
    pub const TEMPLATE_RENDER: &str = "template.render";
}
