//! Configuration for `NameFill`
//!
//! Settings are plain serde structures read from TOML. Only the behaviour of
//! the managers is configured here; the collections themselves are never
//! written to disk.

mod settings;

pub use settings::{ExportSettings, LoggingSettings, PlaceholderSettings, Settings};
