//! Error types for `NameFill`
//!
//! Each concern gets its own error enum with a matching result alias. None of
//! these errors are raised for silent no-ops (unknown ids, out-of-range moves);
//! they only describe rejected exchange payloads and invalid configuration.

use thiserror::Error;

/// Errors that can occur while importing a collection from its exchange text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The text is not valid JSON
    #[error("Failed to parse JSON: {0}")]
    Parse(String),

    /// The text is valid JSON but the top-level value has the wrong shape
    #[error("Expected {expected}, found {found}")]
    Shape {
        /// Shape the collection requires
        expected: &'static str,
        /// Shape that was decoded
        found: &'static str,
    },

    /// An element does not match the record schema
    #[error("Invalid record: {0}")]
    Record(String),

    /// Two records in the payload share an id
    #[error("Duplicate id in payload: {0}")]
    DuplicateId(String),

    /// A name is assigned more than once across the placeholder mapping
    #[error("Name assigned more than once: {0}")]
    DuplicateAssignment(String),
}

/// Result type for import operations
pub type ImportResult<T> = std::result::Result<T, ImportError>;

/// Errors that can occur while exporting a collection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// Serialization failed
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Result type for export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings text is not valid TOML or does not match the schema
    #[error("Failed to parse settings: {0}")]
    Parse(String),

    /// The settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    /// Reading the settings file failed
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A field holds an unusable value
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted field path
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
