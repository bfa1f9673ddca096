//! Name record

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A name that can be placed into template placeholders
///
/// The id is an opaque string, generated once as a UUID and never changed.
/// Imported items keep whatever id they carry. Two items may carry the same
/// name; only ids are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameItem {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
}

impl NameItem {
    /// Creates a new name item with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }
}
