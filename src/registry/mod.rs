//! Tool registry — parsed view of the collaborator's tool map.
//!
//! The registry collaborator is a dynamically-typed Node.js module; records
//! arrive as loosely-schematized JSON objects. This module models each record
//! as an explicit optional-field struct so "maybe undefined" checks stop at
//! the parse boundary — defaulting happens once, in [`crate::migration`].

mod loader;

pub use loader::fetch_registry;

use crate::types::Result;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// A single tool's record as exposed by the registry collaborator.
///
/// Registry records carry many more fields (name, description, UI hints);
/// only the three the migration persists are deserialized, the rest are
/// ignored. All three are optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    /// Accepted input types, e.g. `["text"]` or `["image"]`.
    #[serde(default)]
    pub input_types: Option<Vec<String>>,

    /// Configuration field schema — an arbitrary JSON value.
    #[serde(default)]
    pub config_schema: Option<Value>,

    /// Output type, e.g. `"text"`, `"json"`, `"number"`.
    #[serde(default)]
    pub output_type: Option<String>,
}

/// In-memory tool registry keyed by tool identifier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ToolRegistry {
    entries: HashMap<String, ToolRecord>,
}

impl ToolRegistry {
    /// Parse a registry from the collaborator's JSON dump.
    ///
    /// Malformed JSON is fatal — the generator never emits partial output.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get a tool record by identifier.
    pub fn get(&self, tool_id: &str) -> Option<&ToolRecord> {
        self.entries.get(tool_id)
    }

    /// Check if a tool exists.
    pub fn has_tool(&self, tool_id: &str) -> bool {
        self.entries.contains_key(tool_id)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let registry = ToolRegistry::from_json(
            r#"{"word-counter": {"inputTypes": ["text"], "configSchema": [{"name":"x"}], "outputType": "number"}}"#,
        )
        .unwrap();

        assert!(registry.has_tool("word-counter"));
        assert_eq!(registry.len(), 1);

        let record = registry.get("word-counter").unwrap();
        assert_eq!(record.input_types.as_deref(), Some(["text".to_string()].as_slice()));
        assert_eq!(record.output_type.as_deref(), Some("number"));
        assert!(record.config_schema.is_some());
    }

    #[test]
    fn test_parse_record_with_all_fields_absent() {
        let registry = ToolRegistry::from_json(r#"{"reverse-text": {}}"#).unwrap();

        let record = registry.get("reverse-text").unwrap();
        assert!(record.input_types.is_none());
        assert!(record.config_schema.is_none());
        assert!(record.output_type.is_none());
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let registry = ToolRegistry::from_json(
            r#"{"slug-generator": {"name": "Slug Generator", "category": "text", "outputType": "text"}}"#,
        )
        .unwrap();

        assert_eq!(
            registry.get("slug-generator").unwrap().output_type.as_deref(),
            Some("text")
        );
    }

    #[test]
    fn test_parse_empty_registry() {
        let registry = ToolRegistry::from_json("{}").unwrap();
        assert!(registry.is_empty());
        assert!(!registry.has_tool("word-counter"));
    }

    #[test]
    fn test_parse_malformed_json_fails() {
        assert!(ToolRegistry::from_json("not json").is_err());
        assert!(ToolRegistry::from_json(r#"["a", "b"]"#).is_err());
    }
}
