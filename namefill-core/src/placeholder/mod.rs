//! Placeholder fill-state and placeholder syntax
//!
//! This module provides the `PlaceholderManager`, which records the names
//! assigned to each placeholder of the active template, and the
//! `PlaceholderSyntax` used to find placeholders in template content and to
//! render a filled template.

mod manager;
mod syntax;

pub use manager::PlaceholderManager;
pub use syntax::{PlaceholderSyntax, extract_placeholders, render};
