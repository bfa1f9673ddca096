//! Template record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A text template whose content contains placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Unique identifier
    pub id: String,
    /// Template name shown in the template list
    pub name: String,
    /// Template body with placeholder markers
    pub content: String,
    /// When the template was created, unset for records imported without it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the template was last modified, unset until the first update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Template {
    /// Creates a new template stamped with the current time
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            content: content.into(),
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    /// Updates the `updated_at` timestamp to now
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    /// Returns `true` once the template has been modified after creation
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.updated_at.is_some()
    }
}
