//! `NameFill` Core Library
//!
//! This crate provides the in-memory state behind the `NameFill` feature: a
//! list of names, a list of templates, and the record of which names have been
//! placed into which placeholder of the active template.
//!
//! # Crate Structure
//!
//! - [`models`] - Core data structures (`NameItem`, `Template`, `PlaceholderState`)
//! - [`names`] - Name registry
//! - [`template`] - Template registry
//! - [`placeholder`] - Placeholder fill-state and placeholder syntax
//! - [`store`] - Shared store coordinating the three managers
//! - [`exchange`] - JSON export/import format
//! - [`reorder`] - List reordering model
//! - [`config`] - Settings
//! - [`tracing`] - Structured logging setup

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod exchange;
pub mod models;
pub mod names;
pub mod placeholder;
pub mod reorder;
pub mod store;
pub mod template;
pub mod tracing;

pub use config::{ExportSettings, LoggingSettings, PlaceholderSettings, Settings};
pub use error::{
    ConfigError, ConfigResult, ExportError, ExportResult, ImportError, ImportResult,
};
pub use models::{NameItem, PlaceholderState, Template};
pub use names::NameManager;
pub use placeholder::{PlaceholderManager, PlaceholderSyntax, extract_placeholders, render};
pub use store::{NameFillStore, SharedStore, create_shared_store};
pub use template::TemplateManager;
pub use self::tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, get_tracing_config,
    init_tracing, is_tracing_initialized, span_names,
};
