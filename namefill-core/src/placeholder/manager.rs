//! Placeholder fill-state manager
//!
//! This module provides the `PlaceholderManager` which tracks which names have
//! been placed into which placeholder of the current template, and enforces
//! that a name sits in at most one placeholder at a time.

use std::collections::HashMap;

use crate::config::ExportSettings;
use crate::error::{ExportResult, ImportError, ImportResult};
use crate::exchange;
use crate::models::PlaceholderState;
use crate::tracing::span_names;

/// Manager for the placeholder fill-state
///
/// Alongside the mapping it keeps an index from each assigned name to the
/// placeholder holding it, so exclusivity checks do not scan every sequence.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderManager {
    /// Placeholder key to assigned names, in assignment order
    state: PlaceholderState,
    /// Assigned name to owning placeholder key
    owners: HashMap<String, String>,
    /// Export formatting
    export: ExportSettings,
}

impl PlaceholderManager {
    /// Creates a new empty `PlaceholderManager`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager with the given export formatting
    #[must_use]
    pub fn with_export_settings(export: ExportSettings) -> Self {
        Self {
            export,
            ..Self::default()
        }
    }

    // ========== Assignment ==========

    /// Assigns `name` to `placeholder`
    ///
    /// Unseen placeholder keys are created on the fly.
    ///
    /// # Returns
    /// `false` without touching the state if the name is already assigned,
    /// whether to this placeholder or another one
    pub fn update_placeholder(&mut self, placeholder: &str, name: &str) -> bool {
        if let Some(owner) = self.owners.get(name) {
            tracing::debug!(placeholder, name, owner = %owner, "Name already assigned");
            return false;
        }

        self.state
            .entry(placeholder.to_string())
            .or_default()
            .push(name.to_string());
        self.owners.insert(name.to_string(), placeholder.to_string());
        tracing::debug!(placeholder, name, "Name assigned");
        true
    }

    /// Removes the first occurrence of `name` from `placeholder`
    ///
    /// # Returns
    /// `true` if the name was removed, `false` if the placeholder or the name
    /// was absent
    pub fn remove_name(&mut self, placeholder: &str, name: &str) -> bool {
        let Some(names) = self.state.get_mut(placeholder) else {
            return false;
        };
        let Some(index) = names.iter().position(|n| n == name) else {
            return false;
        };

        names.remove(index);
        if self.owners.get(name).is_some_and(|owner| owner == placeholder) {
            self.owners.remove(name);
        }
        tracing::debug!(placeholder, name, "Name unassigned");
        true
    }

    /// Empties a single placeholder
    ///
    /// Absent keys are not created.
    ///
    /// # Returns
    /// `true` if the placeholder exists
    pub fn clear_placeholder(&mut self, placeholder: &str) -> bool {
        let Some(names) = self.state.get_mut(placeholder) else {
            return false;
        };

        for name in names.drain(..) {
            self.owners.remove(&name);
        }
        true
    }

    /// Replaces the whole mapping with empty placeholders for exactly `keys`
    ///
    /// Every previous assignment is discarded.
    pub fn initialize_placeholders<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let _span = crate::trace_operation_debug!(span_names::PLACEHOLDER_INITIALIZE).entered();
        self.state = keys.into_iter().map(|k| (k.into(), Vec::new())).collect();
        self.owners.clear();
        tracing::debug!(count = self.state.len(), "Placeholders initialized");
    }

    // ========== Queries ==========

    /// Returns `true` if `name` is assigned to any placeholder
    #[must_use]
    pub fn is_name_used(&self, name: &str) -> bool {
        self.owners.contains_key(name)
    }

    /// Returns the placeholder holding `name`
    #[must_use]
    pub fn placeholder_of(&self, name: &str) -> Option<&str> {
        self.owners.get(name).map(String::as_str)
    }

    /// Returns the names assigned to `placeholder`
    #[must_use]
    pub fn names_in(&self, placeholder: &str) -> Option<&[String]> {
        self.state.get(placeholder).map(Vec::as_slice)
    }

    /// Returns the placeholder keys in lexicographic order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.state.keys().map(String::as_str)
    }

    /// Returns placeholders that have no name yet
    #[must_use]
    pub fn unfilled(&self) -> Vec<&str> {
        self.state
            .iter()
            .filter(|(_, names)| names.is_empty())
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Returns `true` if every placeholder holds at least one name
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.values().all(|names| !names.is_empty())
    }

    /// Returns the whole mapping
    #[must_use]
    pub fn state(&self) -> &PlaceholderState {
        &self.state
    }

    /// Returns the number of placeholders
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns `true` if there are no placeholders
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    // ========== Export / Import ==========

    /// Serializes the whole mapping
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_placeholders(&self) -> ExportResult<String> {
        let _span = crate::trace_operation_debug!(
            span_names::EXPORT_EXECUTE,
            collection = "placeholders"
        )
        .entered();
        exchange::encode(&self.state, self.export.pretty)
    }

    /// Replaces the whole mapping with the one decoded from `text`
    ///
    /// The payload must be an object of string arrays in which no name is
    /// assigned twice. On failure the current mapping is left untouched and
    /// the reason is logged and returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be decoded or breaks the
    /// one-placeholder-per-name rule.
    pub fn import_placeholders(&mut self, text: &str) -> ImportResult<usize> {
        let _span =
            crate::trace_operation!(span_names::IMPORT_EXECUTE, collection = "placeholders")
                .entered();

        let decoded = exchange::decode_object::<Vec<String>>(text)
            .and_then(|state| build_owner_index(&state).map(|owners| (state, owners)));

        match decoded {
            Ok((state, owners)) => {
                let count = state.len();
                self.state = state;
                self.owners = owners;
                tracing::info!(count, "Placeholder state imported");
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Placeholder state import failed");
                Err(e)
            }
        }
    }
}

/// Builds the name to placeholder index, rejecting names assigned twice
fn build_owner_index(state: &PlaceholderState) -> ImportResult<HashMap<String, String>> {
    let mut owners = HashMap::new();
    for (key, names) in state {
        for name in names {
            if owners.insert(name.clone(), key.clone()).is_some() {
                return Err(ImportError::DuplicateAssignment(name.clone()));
            }
        }
    }
    Ok(owners)
}
