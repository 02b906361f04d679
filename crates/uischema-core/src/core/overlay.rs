// crates/uischema-core/src/core/overlay.rs
// ============================================================================
// Module: Overlay Model
// Description: Operator-authored partial parameter trees.
// Purpose: Define the patch shapes the merger overlays onto derived trees.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! An overlay document is an array of partial UI parameters: the same shape
//! as [`UiParameter`](crate::core::parameter::UiParameter) with every field
//! optional except `jsonKey`. Field presence is the overwrite signal — a
//! field carried by a patch replaces the base value; an absent field leaves
//! the base value untouched. Overlays are best-effort: entries whose key
//! matches nothing in the derived tree are ignored by the merger.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::parameter::ConditionRule;
use crate::core::parameter::UiType;

// ============================================================================
// SECTION: Parameter Patch
// ============================================================================

/// Partial UI parameter authored in an overlay document.
///
/// # Invariants
/// - `json_key` is the only mandatory field; it matches against the derived
///   tree at the same nesting level.
/// - An explicit `sort` is taken verbatim by the merger and never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiParameterPatch {
    /// Dot-delimited key of the base parameter this patch targets.
    pub json_key: String,
    /// Replacement display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Replacement description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement widget tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_type: Option<UiType>,
    /// Replacement validation constraints, applied field by field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate: Option<ValidatePatch>,
    /// Replacement visibility conditions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<ConditionRule>>,
    /// Explicit sort number, taken verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<u64>,
    /// Patches for nested parameters, matched one nesting level down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_parameters: Option<Vec<UiParameterPatch>>,
}

// ============================================================================
// SECTION: Validate Patch
// ============================================================================

/// Partial validation constraints authored in an overlay document.
///
/// # Invariants
/// - `required` may force `true` (or `false`) when present; absence never
///   changes the derived value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePatch {
    /// Replacement required flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Replacement enumerated values.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// Replacement pattern constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Replacement lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Replacement upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Replacement default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}
