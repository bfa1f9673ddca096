//! Placeholder markers in template content
//!
//! A placeholder is written as a key between an opening and a closing
//! delimiter, `{{이름}}` with the default syntax. Whitespace around the key is
//! ignored, so `{{ 이름 }}` names the same placeholder.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::PlaceholderSettings;
use crate::error::{ConfigError, ConfigResult};
use crate::models::PlaceholderState;

/// Cached regex for the default `{{key}}` syntax
static DEFAULT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([^{}\n]+?)\}\}").expect("DEFAULT_REGEX is a valid regex pattern")
});

/// Compiled placeholder syntax
#[derive(Debug, Clone)]
pub struct PlaceholderSyntax {
    open: String,
    close: String,
    regex: Regex,
}

impl Default for PlaceholderSyntax {
    fn default() -> Self {
        Self {
            open: "{{".to_string(),
            close: "}}".to_string(),
            regex: DEFAULT_REGEX.clone(),
        }
    }
}

impl PlaceholderSyntax {
    /// Compiles a syntax for the given delimiters
    ///
    /// The key may not contain a newline or the first character of either
    /// delimiter.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a delimiter is empty.
    pub fn new(open: &str, close: &str) -> ConfigResult<Self> {
        let (Some(open_first), Some(close_first)) = (open.chars().next(), close.chars().next())
        else {
            return Err(ConfigError::Invalid {
                field: "placeholders".to_string(),
                reason: "delimiters must not be empty".to_string(),
            });
        };

        let pattern = format!(
            r"{}([^{}{}\n]+?){}",
            regex::escape(open),
            regex::escape(&open_first.to_string()),
            regex::escape(&close_first.to_string()),
            regex::escape(close),
        );
        let regex = Regex::new(&pattern).map_err(|e| ConfigError::Invalid {
            field: "placeholders".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            open: open.to_string(),
            close: close.to_string(),
            regex,
        })
    }

    /// Compiles the syntax described by the settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a delimiter is empty.
    pub fn from_settings(settings: &PlaceholderSettings) -> ConfigResult<Self> {
        Self::new(&settings.open, &settings.close)
    }

    /// Returns the opening delimiter
    #[must_use]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Returns the closing delimiter
    #[must_use]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Formats a key as a placeholder marker
    #[must_use]
    pub fn marker(&self, key: &str) -> String {
        format!("{}{key}{}", self.open, self.close)
    }

    /// Extracts the placeholder keys referenced by `content`
    ///
    /// Keys are trimmed and returned once each, in order of first appearance.
    #[must_use]
    pub fn extract(&self, content: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.regex
            .captures_iter(content)
            .filter_map(|cap| key_of(&cap))
            .filter(|key| seen.insert(key.to_string()))
            .map(str::to_string)
            .collect()
    }

    /// Replaces every placeholder in `content` with its assigned names
    ///
    /// Names are joined with `separator`. Placeholders that are unknown to
    /// `state` or have no names yet are left as written.
    #[must_use]
    pub fn render(&self, content: &str, state: &PlaceholderState, separator: &str) -> String {
        self.regex
            .replace_all(content, |cap: &Captures<'_>| {
                key_of(cap)
                    .and_then(|key| state.get(key))
                    .filter(|names| !names.is_empty())
                    .map_or_else(|| cap[0].to_string(), |names| names.join(separator))
            })
            .into_owned()
    }
}

fn key_of<'h>(cap: &Captures<'h>) -> Option<&'h str> {
    cap.get(1)
        .map(|m| m.as_str().trim())
        .filter(|key| !key.is_empty())
}

/// Extracts placeholder keys using the default `{{key}}` syntax
#[must_use]
pub fn extract_placeholders(content: &str) -> Vec<String> {
    PlaceholderSyntax::default().extract(content)
}

/// Renders `content` using the default `{{key}}` syntax
#[must_use]
pub fn render(content: &str, state: &PlaceholderState, separator: &str) -> String {
    PlaceholderSyntax::default().render(content, state, separator)
}
