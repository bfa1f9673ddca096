//! Name registry
//!
//! This module provides the `NameManager`, the ordered list of names the user
//! can drop into placeholders.

mod manager;

pub use manager::NameManager;
