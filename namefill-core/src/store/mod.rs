//! Shared store for the three managers
//!
//! A `NameFillStore` is built once by the host application and handed to
//! every consumer as a [`SharedStore`]. All consumers observe and mutate the
//! same managers, so a change made by one is visible to the others at once.
//!
//! The store also coordinates the rules that span managers: switching the
//! active template resets the placeholder fill-state to that template's
//! placeholders, and deleting a name from the registry releases it from the
//! placeholder it was assigned to.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::Settings;
use crate::error::ConfigResult;
use crate::models::Template;
use crate::names::NameManager;
use crate::placeholder::{PlaceholderManager, PlaceholderSyntax};
use crate::template::TemplateManager;
use crate::tracing::span_names;

/// Shared store type
pub type SharedStore = Rc<RefCell<NameFillStore>>;

/// Creates a new shared store from settings
///
/// # Errors
///
/// Returns an error if the settings are invalid.
pub fn create_shared_store(settings: &Settings) -> ConfigResult<SharedStore> {
    NameFillStore::with_settings(settings).map(|store| Rc::new(RefCell::new(store)))
}

/// Owner of the name registry, template registry and placeholder fill-state
#[derive(Debug, Clone)]
pub struct NameFillStore {
    names: NameManager,
    templates: TemplateManager,
    placeholders: PlaceholderManager,
    /// Template whose placeholders are currently being filled
    active_template: Option<String>,
    /// Text between names rendered into one placeholder
    separator: String,
}

impl Default for NameFillStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NameFillStore {
    /// Creates an empty store with default settings
    #[must_use]
    pub fn new() -> Self {
        let defaults = Settings::default();
        Self {
            names: NameManager::new(),
            templates: TemplateManager::new(),
            placeholders: PlaceholderManager::new(),
            active_template: None,
            separator: defaults.placeholders.separator,
        }
    }

    /// Creates an empty store configured by `settings`
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid.
    pub fn with_settings(settings: &Settings) -> ConfigResult<Self> {
        settings.validate()?;
        let syntax = PlaceholderSyntax::from_settings(&settings.placeholders)?;
        Ok(Self {
            names: NameManager::with_export_settings(settings.export),
            templates: TemplateManager::with_settings(syntax, settings.export),
            placeholders: PlaceholderManager::with_export_settings(settings.export),
            active_template: None,
            separator: settings.placeholders.separator.clone(),
        })
    }

    // ========== Managers ==========

    /// Returns the name registry
    #[must_use]
    pub fn names(&self) -> &NameManager {
        &self.names
    }

    /// Returns the name registry for mutation
    pub fn names_mut(&mut self) -> &mut NameManager {
        &mut self.names
    }

    /// Returns the template registry
    #[must_use]
    pub fn templates(&self) -> &TemplateManager {
        &self.templates
    }

    /// Returns the template registry for mutation
    pub fn templates_mut(&mut self) -> &mut TemplateManager {
        &mut self.templates
    }

    /// Returns the placeholder fill-state
    #[must_use]
    pub fn placeholders(&self) -> &PlaceholderManager {
        &self.placeholders
    }

    /// Returns the placeholder fill-state for mutation
    pub fn placeholders_mut(&mut self) -> &mut PlaceholderManager {
        &mut self.placeholders
    }

    // ========== Coordination ==========

    /// Makes `id` the active template and resets the placeholders to its keys
    ///
    /// Returns `false` and changes nothing if no template has the given id
    pub fn select_template(&mut self, id: &str) -> bool {
        let _span = crate::trace_operation!(span_names::TEMPLATE_SELECT, template_id = id).entered();

        let Some(keys) = self.templates.placeholders_of(id) else {
            tracing::warn!(id, "Cannot select unknown template");
            return false;
        };

        self.placeholders.initialize_placeholders(keys);
        self.active_template = Some(id.to_string());
        true
    }

    /// Returns the active template if it still exists
    #[must_use]
    pub fn active_template(&self) -> Option<&Template> {
        self.active_template
            .as_deref()
            .and_then(|id| self.templates.get_template(id))
    }

    /// Returns the id of the active template
    #[must_use]
    pub fn active_template_id(&self) -> Option<&str> {
        self.active_template.as_deref()
    }

    /// Assigns `name` to `placeholder`, keeping each name in one placeholder
    pub fn assign(&mut self, placeholder: &str, name: &str) -> bool {
        self.placeholders.update_placeholder(placeholder, name)
    }

    /// Removes `name` from `placeholder`
    pub fn unassign(&mut self, placeholder: &str, name: &str) -> bool {
        self.placeholders.remove_name(placeholder, name)
    }

    /// Removes a name from the registry
    ///
    /// When no remaining entry carries the same name, the name is also
    /// released from the placeholder it was assigned to.
    pub fn remove_name_item(&mut self, id: &str) -> bool {
        let Some(name) = self.names.get_name(id).map(|n| n.name.clone()) else {
            return false;
        };

        self.names.remove_name(id);
        if !self.names.contains_name(&name)
            && let Some(placeholder) = self.placeholders.placeholder_of(&name).map(str::to_string)
        {
            self.placeholders.remove_name(&placeholder, &name);
        }
        true
    }

    /// Removes a template from the registry
    ///
    /// Removing the active template deselects it and empties the fill-state.
    pub fn remove_template(&mut self, id: &str) -> bool {
        if !self.templates.remove_template(id) {
            return false;
        }
        if self.active_template.as_deref() == Some(id) {
            self.active_template = None;
            self.placeholders
                .initialize_placeholders(std::iter::empty::<String>());
        }
        true
    }

    /// Renders the active template with the current assignments
    #[must_use]
    pub fn render_active(&self) -> Option<String> {
        let template = self.active_template()?;
        let _span =
            crate::trace_operation_debug!(span_names::TEMPLATE_RENDER, template_id = template.id.as_str())
                .entered();
        Some(self.templates.syntax().render(
            &template.content,
            self.placeholders.state(),
            &self.separator,
        ))
    }
}
