//! Template manager for CRUD operations
//!
//! This module provides the `TemplateManager` which handles creating, updating,
//! removing, reordering, exporting and importing templates.

use crate::config::ExportSettings;
use crate::error::{ExportResult, ImportResult};
use crate::exchange;
use crate::models::Template;
use crate::placeholder::PlaceholderSyntax;
use crate::reorder;
use crate::tracing::span_names;

/// Manager for template CRUD operations
///
/// Templates are kept in display order. Supports search and placeholder
/// discovery on top of the basic list operations.
#[derive(Debug, Default, Clone)]
pub struct TemplateManager {
    /// Templates in display order
    templates: Vec<Template>,
    /// Syntax used to find placeholders in template content
    syntax: PlaceholderSyntax,
    /// Export formatting
    export: ExportSettings,
}

impl TemplateManager {
    /// Creates a new empty `TemplateManager` with the default placeholder syntax
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager with the given syntax and export formatting
    #[must_use]
    pub fn with_settings(syntax: PlaceholderSyntax, export: ExportSettings) -> Self {
        Self {
            templates: Vec::new(),
            syntax,
            export,
        }
    }

    // ========== Template CRUD Operations ==========

    /// Appends a new template and returns it
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Template {
        let template = Template::new(name, content);
        tracing::debug!(id = %template.id, "Template added");
        self.templates.push(template.clone());
        template
    }

    /// Replaces the name and content of an existing template
    ///
    /// Preserves the original ID and creation timestamp and stamps the
    /// modification time.
    ///
    /// Returns `false` if no template has the given id
    pub fn update_template(
        &mut self,
        id: &str,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> bool {
        let Some(template) = self.templates.iter_mut().find(|t| t.id == id) else {
            return false;
        };

        template.name = name.into();
        template.content = content.into();
        template.touch();
        tracing::debug!(id, "Template updated");
        true
    }

    /// Removes a template by ID
    ///
    /// Returns `true` if a template was removed
    pub fn remove_template(&mut self, id: &str) -> bool {
        let len_before = self.templates.len();
        self.templates.retain(|t| t.id != id);
        let removed = self.templates.len() < len_before;
        if removed {
            tracing::debug!(id, "Template removed");
        }
        removed
    }

    /// Moves the template at `from` to index `to`
    ///
    /// Out-of-range indices leave the list unchanged.
    ///
    /// Returns `true` if the order changed
    pub fn move_template(&mut self, from: usize, to: usize) -> bool {
        reorder::move_item(&mut self.templates, from, to)
    }

    /// Appends a copy of a template under a new id
    ///
    /// The copy is named "<name> (copy)" and gets a fresh creation time.
    pub fn duplicate_template(&mut self, id: &str) -> Option<Template> {
        let source = self.get_template(id)?;
        let name = format!("{} (copy)", source.name);
        let content = source.content.clone();
        Some(self.add_template(name, content))
    }

    /// Gets a template by ID
    #[must_use]
    pub fn get_template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Lists all templates in order
    #[must_use]
    pub fn list_templates(&self) -> &[Template] {
        &self.templates
    }

    /// Returns the total number of templates
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` if there are no templates
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    // ========== Search ==========

    /// Searches templates by name and content (case-insensitive)
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Template> {
        let query_lower = query.to_lowercase();
        self.templates
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&query_lower)
                    || t.content.to_lowercase().contains(&query_lower)
            })
            .collect()
    }

    /// Finds a template by name (case-insensitive)
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Template> {
        let name_lower = name.to_lowercase();
        self.templates
            .iter()
            .find(|t| t.name.to_lowercase() == name_lower)
    }

    // ========== Placeholders ==========

    /// Returns the placeholder keys referenced by a template's content
    #[must_use]
    pub fn placeholders_of(&self, id: &str) -> Option<Vec<String>> {
        self.get_template(id)
            .map(|t| self.syntax.extract(&t.content))
    }

    /// Returns the placeholder syntax used by this manager
    #[must_use]
    pub fn syntax(&self) -> &PlaceholderSyntax {
        &self.syntax
    }

    // ========== Export / Import ==========

    /// Serializes all templates
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_templates(&self) -> ExportResult<String> {
        let _span =
            crate::trace_operation_debug!(span_names::EXPORT_EXECUTE, collection = "templates")
                .entered();
        exchange::encode(&self.templates, self.export.pretty)
    }

    /// Replaces all templates with the ones decoded from `text`
    ///
    /// On failure the current templates are left untouched and the reason is
    /// logged and returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not an array of template records or
    /// two records share an id.
    pub fn import_templates(&mut self, text: &str) -> ImportResult<usize> {
        let _span =
            crate::trace_operation!(span_names::IMPORT_EXECUTE, collection = "templates")
                .entered();

        let decoded = exchange::decode_array::<Template>(text).and_then(|templates| {
            exchange::ensure_unique_ids(&templates, |t| t.id.as_str()).map(|()| templates)
        });

        match decoded {
            Ok(templates) => {
                let count = templates.len();
                self.templates = templates;
                tracing::info!(count, "Templates imported");
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Template import failed");
                Err(e)
            }
        }
    }
}
