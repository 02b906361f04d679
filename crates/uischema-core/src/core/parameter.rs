// crates/uischema-core/src/core/parameter.rs
// ============================================================================
// Module: UI Parameter Model
// Description: Renderable parameter definitions produced by the engine.
// Purpose: Define the wire-stable output tree served to UI clients.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! [`UiParameter`] is the engine's output entity: one renderable parameter
//! with display metadata, validation constraints, visibility conditions, a
//! sibling-relative sort number, and nested sub-parameters. Wire names are
//! camelCase and stable; API clients deserialize these trees verbatim.
//!
//! `jsonKey` is the identity used to match nodes across derivation, sorting,
//! and patching: the dot-delimited path from the tree root through property
//! names. Array-of-object parameters reuse the array property's own key; the
//! schema describes the item shape once, so there is no per-index segment.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: UI Parameter
// ============================================================================

/// One renderable UI parameter derived from a schema property.
///
/// # Invariants
/// - `json_key` is unique among siblings under the same parent.
/// - `sub_parameters` is non-empty only for object and array-of-object nodes.
/// - `sort` is meaningful only relative to siblings, never globally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiParameter {
    /// Dot-delimited path identifying this parameter within the tree.
    pub json_key: String,
    /// Display label: the schema `title` when present, else the property name.
    pub label: String,
    /// Display description for the parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Widget tag an external renderer dispatches on.
    pub ui_type: UiType,
    /// Validation constraints for the parameter.
    pub validate: Validate,
    /// Visibility rules gating when the parameter is shown.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<ConditionRule>,
    /// Sibling-relative display order number.
    #[serde(default)]
    pub sort: u64,
    /// Nested parameters for object and array-of-object nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_parameters: Vec<UiParameter>,
}

// ============================================================================
// SECTION: Validation Constraints
// ============================================================================

/// Validation constraints attached to a UI parameter.
///
/// # Invariants
/// - `required` reflects membership in the parent schema node's `required`
///   list at derivation time; overlays may force it `true` but absence in an
///   overlay never resets it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validate {
    /// Whether the parameter must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Enumerated allowed values, copied verbatim from the schema node.
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    /// Regular-expression constraint for string values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Inclusive lower bound for numeric values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound for numeric values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Default value presented by the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

// ============================================================================
// SECTION: Visibility Conditions
// ============================================================================

/// Comparison operator for a visibility condition.
///
/// # Invariants
/// - Variants are stable for serialization; absence on the wire means `==`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionOp {
    /// The referenced value must equal the condition value.
    #[default]
    #[serde(rename = "==")]
    Equal,
    /// The referenced value must not equal the condition value.
    #[serde(rename = "!=")]
    NotEqual,
    /// The referenced value must be a member of the condition value list.
    #[serde(rename = "in")]
    In,
}

impl fmt::Display for ConditionOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::In => "in",
        };
        f.write_str(op)
    }
}

/// One visibility rule gating when a parameter is shown.
///
/// # Invariants
/// - Derivation never produces conditions; they are authored in overlays only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRule {
    /// Dot-delimited key of the parameter this rule reads.
    pub json_key: String,
    /// Comparison operator; defaults to `==` when absent on the wire.
    #[serde(default)]
    pub op: ConditionOp,
    /// Value compared against the referenced parameter.
    pub value: Value,
}

// ============================================================================
// SECTION: Widget Taxonomy
// ============================================================================

/// Closed set of widget tags emitted by derivation.
///
/// # Invariants
/// - Wire strings are stable; renderers dispatch on them verbatim.
/// - Overlays may set any variant; derivation emits them per the schema kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiType {
    /// Free-form text input (also the fallback for unknown scalar types).
    #[default]
    Input,
    /// Single choice among enumerated values.
    Select,
    /// Numeric input.
    Number,
    /// Boolean toggle.
    Switch,
    /// List of string values.
    Strings,
    /// List of numeric values.
    Numbers,
    /// List of structured values described by nested parameters.
    Structs,
    /// Nested group of parameters.
    Group,
    /// Free-form key/value pairs for object nodes without declared properties.
    #[serde(rename = "KV")]
    Kv,
}
