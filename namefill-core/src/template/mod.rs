//! Template management module
//!
//! This module provides the `TemplateManager` for CRUD operations on templates,
//! with support for reordering, search, placeholder discovery and
//! import/export.

mod manager;

pub use manager::TemplateManager;
