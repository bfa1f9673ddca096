//! JSON exchange format shared by the managers
//!
//! Every collection exports as the bare JSON form of its in-memory value: an
//! array of records for names and templates, an object of string arrays for
//! the placeholder mapping. There is no envelope, version or schema tag.
//!
//! Decoding is done in two passes. The text is first parsed into a generic
//! [`serde_json::Value`] so the top-level shape can be checked and reported
//! precisely, then converted into the typed collection.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ExportError, ExportResult, ImportError, ImportResult};

/// Top-level shape name for arrays, used in [`ImportError::Shape`]
pub const SHAPE_ARRAY: &str = "array";

/// Top-level shape name for objects, used in [`ImportError::Shape`]
pub const SHAPE_OBJECT: &str = "object";

/// Serializes a collection into its exchange text
///
/// # Errors
///
/// Returns `ExportError::Serialization` if serialization fails.
pub fn encode<T: Serialize + ?Sized>(value: &T, pretty: bool) -> ExportResult<String> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| ExportError::Serialization(e.to_string()))
}

/// Decodes exchange text that must hold an array of records
///
/// # Errors
///
/// Returns an error if the text is not JSON, is not an array, or an element
/// does not match the record type.
pub fn decode_array<T: DeserializeOwned>(text: &str) -> ImportResult<Vec<T>> {
    let value = parse(text)?;
    if !value.is_array() {
        return Err(ImportError::Shape {
            expected: SHAPE_ARRAY,
            found: shape_of(&value),
        });
    }
    serde_json::from_value(value).map_err(|e| ImportError::Record(e.to_string()))
}

/// Decodes exchange text that must hold an object keyed by strings
///
/// # Errors
///
/// Returns an error if the text is not JSON, is not an object, or a value
/// does not match the entry type.
pub fn decode_object<T: DeserializeOwned>(text: &str) -> ImportResult<BTreeMap<String, T>> {
    let value = parse(text)?;
    if !value.is_object() {
        return Err(ImportError::Shape {
            expected: SHAPE_OBJECT,
            found: shape_of(&value),
        });
    }
    serde_json::from_value(value).map_err(|e| ImportError::Record(e.to_string()))
}

/// Rejects a decoded record list in which two records share an id
///
/// # Errors
///
/// Returns `ImportError::DuplicateId` with the first repeated id.
pub fn ensure_unique_ids<T>(items: &[T], id_of: impl Fn(&T) -> &str) -> ImportResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        let id = id_of(item);
        if !seen.insert(id) {
            return Err(ImportError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}

fn parse(text: &str) -> ImportResult<Value> {
    serde_json::from_str(text).map_err(|e| ImportError::Parse(e.to_string()))
}

/// Returns the JSON type name of a value
#[must_use]
pub fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => SHAPE_ARRAY,
        Value::Object(_) => SHAPE_OBJECT,
    }
}
