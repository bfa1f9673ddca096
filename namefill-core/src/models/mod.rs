//! Core data structures for `NameFill`
//!
//! The records here are exactly what the managers store and what the exchange
//! format carries; field names serialize in camelCase.

mod name;
mod template;

use std::collections::BTreeMap;

pub use name::NameItem;
pub use template::Template;

/// Placeholder fill-state: placeholder key to the names assigned to it, in order
///
/// Holds raw name strings rather than `NameItem` ids. Keys iterate in
/// lexicographic order.
pub type PlaceholderState = BTreeMap<String, Vec<String>>;
