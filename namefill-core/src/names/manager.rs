//! Name manager for list operations
//!
//! This module provides the `NameManager` which handles adding, removing,
//! reordering, exporting and importing the name list.

use crate::config::ExportSettings;
use crate::error::{ExportResult, ImportResult};
use crate::exchange;
use crate::models::NameItem;
use crate::reorder;
use crate::tracing::span_names;

/// Manager for the ordered name list
#[derive(Debug, Default, Clone)]
pub struct NameManager {
    /// Names in display order
    names: Vec<NameItem>,
    /// Export formatting
    export: ExportSettings,
}

impl NameManager {
    /// Creates a new empty `NameManager`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager with the given export formatting
    #[must_use]
    pub fn with_export_settings(export: ExportSettings) -> Self {
        Self {
            names: Vec::new(),
            export,
        }
    }

    // ========== List Operations ==========

    /// Appends a new name with a fresh id and returns it
    pub fn add_name(&mut self, name: impl Into<String>) -> NameItem {
        let item = NameItem::new(name);
        tracing::debug!(id = %item.id, "Name added");
        self.names.push(item.clone());
        item
    }

    /// Removes the name with the given id
    ///
    /// Returns `true` if a name was removed
    pub fn remove_name(&mut self, id: &str) -> bool {
        let len_before = self.names.len();
        self.names.retain(|n| n.id != id);
        let removed = self.names.len() < len_before;
        if removed {
            tracing::debug!(id, "Name removed");
        }
        removed
    }

    /// Moves the name at `from` to index `to`
    ///
    /// Out-of-range indices leave the list unchanged.
    ///
    /// Returns `true` if the order changed
    pub fn move_name(&mut self, from: usize, to: usize) -> bool {
        reorder::move_item(&mut self.names, from, to)
    }

    /// Removes every name
    pub fn clear(&mut self) {
        self.names.clear();
    }

    // ========== Queries ==========

    /// Gets a name by id
    #[must_use]
    pub fn get_name(&self, id: &str) -> Option<&NameItem> {
        self.names.iter().find(|n| n.id == id)
    }

    /// Returns the index of the name with the given id
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.names.iter().position(|n| n.id == id)
    }

    /// Finds the first entry whose name equals `name`
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&NameItem> {
        self.names.iter().find(|n| n.name == name)
    }

    /// Returns `true` if any entry carries `name`
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Lists all names in order
    #[must_use]
    pub fn list_names(&self) -> &[NameItem] {
        &self.names
    }

    /// Returns the number of names
    #[must_use]
    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ========== Export / Import ==========

    /// Serializes the whole list
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_names(&self) -> ExportResult<String> {
        let _span =
            crate::trace_operation_debug!(span_names::EXPORT_EXECUTE, collection = "names")
                .entered();
        exchange::encode(&self.names, self.export.pretty)
    }

    /// Replaces the whole list with the one decoded from `text`
    ///
    /// On failure the current list is left untouched and the reason is logged
    /// and returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not an array of name records or two
    /// records share an id.
    pub fn import_names(&mut self, text: &str) -> ImportResult<usize> {
        let _span =
            crate::trace_operation!(span_names::IMPORT_EXECUTE, collection = "names").entered();

        let decoded = exchange::decode_array::<NameItem>(text)
            .and_then(|names| exchange::ensure_unique_ids(&names, |n| n.id.as_str()).map(|()| names));

        match decoded {
            Ok(names) => {
                let count = names.len();
                self.names = names;
                tracing::info!(count, "Name list imported");
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Name list import failed");
                Err(e)
            }
        }
    }
}
