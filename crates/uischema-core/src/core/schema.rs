// crates/uischema-core/src/core/schema.rs
// ============================================================================
// Module: Schema Node Model
// Description: JSON-Schema-style input nodes and their closed classification.
// Purpose: Give the walker an exhaustive, typed view of untrusted schema documents.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Schema documents arrive from an external store as JSON following a subset
//! of JSON-Schema/OpenAPI v3. [`SchemaNode`] deserializes that subset and
//! ignores everything else. [`SchemaKind`] collapses the open-ended `type`
//! string into a closed variant set so the walker's recursion is exhaustive;
//! constructs the engine does not understand classify as [`SchemaKind::Fallback`]
//! and degrade to a generic widget instead of failing derivation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Schema Node
// ============================================================================

/// One node of an incoming schema document.
///
/// # Invariants
/// - Read-only input: the engine never mutates or re-serializes schema nodes.
/// - `properties` is meaningful only for object nodes, `items` only for arrays;
///   both are tolerated (and ignored) anywhere else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Declared schema type, when present.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Display title for the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description for the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Enumerated allowed values.
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    /// Child property nodes for object types.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, SchemaNode>,
    /// Item shape for array types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    /// Property names required at this node's level.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Declared string format, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Regular-expression constraint for string values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Inclusive lower bound for numeric values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper bound for numeric values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Default value for the parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl SchemaNode {
    /// Returns true when `name` is listed as required at this node's level.
    #[must_use]
    pub fn requires(&self, name: &str) -> bool {
        self.required.iter().any(|entry| entry == name)
    }

    /// Classifies this node into the closed [`SchemaKind`] set.
    #[must_use]
    pub fn kind(&self) -> SchemaKind {
        if !self.enum_values.is_empty() {
            return SchemaKind::Enum;
        }
        match self.schema_type.as_deref() {
            Some("object") => {
                if self.properties.is_empty() {
                    SchemaKind::Fallback
                } else {
                    SchemaKind::Object
                }
            }
            Some("array") => match self.items.as_deref() {
                Some(items) if items.kind() == SchemaKind::Object => SchemaKind::ArrayOfObject,
                _ => SchemaKind::ArrayOfScalar,
            },
            Some("string") => SchemaKind::String,
            Some("number" | "integer") => SchemaKind::Number,
            Some("boolean") => SchemaKind::Boolean,
            _ => SchemaKind::Fallback,
        }
    }
}

// ============================================================================
// SECTION: Schema Kind
// ============================================================================

/// Closed classification of schema nodes used by the walker.
///
/// # Invariants
/// - Every possible schema node maps to exactly one variant; unknown or
///   malformed constructs map to `Fallback`, never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// Object node with at least one property.
    Object,
    /// Array node whose items are objects with properties.
    ArrayOfObject,
    /// Array node with scalar (or unrecognized) items.
    ArrayOfScalar,
    /// Node carrying an `enum` list, whatever its declared type.
    Enum,
    /// Plain string node.
    String,
    /// Numeric node (`number` or `integer`).
    Number,
    /// Boolean node.
    Boolean,
    /// Unknown type, missing type, or object with no properties.
    Fallback,
}
