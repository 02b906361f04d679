// crates/uischema-document/src/schema.rs
// ============================================================================
// Module: Overlay Document Schema
// Description: Published JSON Schema for the overlay document format.
// Purpose: Let authoring tools validate overlay documents before submission.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The overlay document format is stable enough to publish: an array of
//! partial parameter objects, each carrying a mandatory `jsonKey` and any
//! subset of the overridable fields. This schema mirrors exactly what the
//! parser accepts; additional fields are permitted (and ignored by the
//! parser) so documents authored against newer revisions still validate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Schema Generation
// ============================================================================

/// Returns the JSON Schema (draft 2020-12) for overlay documents.
#[must_use]
pub fn overlay_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "urn:uischema:overlay-document",
        "title": "UI parameter overlay document",
        "type": "array",
        "items": { "$ref": "#/$defs/parameterPatch" },
        "$defs": {
            "parameterPatch": {
                "type": "object",
                "required": ["jsonKey"],
                "properties": {
                    "jsonKey": { "type": "string", "minLength": 1 },
                    "label": { "type": "string" },
                    "description": { "type": "string" },
                    "uiType": {
                        "type": "string",
                        "enum": [
                            "Input",
                            "Select",
                            "Number",
                            "Switch",
                            "Strings",
                            "Numbers",
                            "Structs",
                            "Group",
                            "KV"
                        ]
                    },
                    "validate": { "$ref": "#/$defs/validatePatch" },
                    "conditions": {
                        "type": "array",
                        "items": { "$ref": "#/$defs/condition" }
                    },
                    "sort": { "type": "integer", "minimum": 0 },
                    "subParameters": {
                        "type": "array",
                        "items": { "$ref": "#/$defs/parameterPatch" }
                    }
                }
            },
            "validatePatch": {
                "type": "object",
                "properties": {
                    "required": { "type": "boolean" },
                    "enum": { "type": "array" },
                    "pattern": { "type": "string" },
                    "min": { "type": "number" },
                    "max": { "type": "number" },
                    "defaultValue": {}
                }
            },
            "condition": {
                "type": "object",
                "required": ["jsonKey", "value"],
                "properties": {
                    "jsonKey": { "type": "string", "minLength": 1 },
                    "op": { "type": "string", "enum": ["==", "!=", "in"] },
                    "value": {}
                }
            }
        }
    })
}
