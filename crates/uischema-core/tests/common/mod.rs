// crates/uischema-core/tests/common/mod.rs
// ============================================================================
// Module: Shared Test Fixtures
// Description: Schema documents and builders shared across engine tests.
// ============================================================================
//! ## Overview
//! Provides the web-service-style schema fixture used by walker, patcher, and
//! render tests, plus small builders for hand-rolled parameter lists.

#![allow(
    dead_code,
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only helpers; not every test file uses every helper."
)]

use serde_json::json;
use uischema_core::SchemaNode;
use uischema_core::UiParameter;
use uischema_core::Validate;

/// Returns the eight properties shared by the probe fixtures.
fn probe_properties() -> serde_json::Value {
    json!({
        "path": { "type": "string", "title": "path" },
        "port": { "type": "integer", "title": "port" },
        "host": { "type": "string", "title": "host" },
        "scheme": { "type": "string", "title": "scheme" },
        "initialDelaySeconds": { "type": "integer", "title": "initialDelaySeconds" },
        "periodSeconds": { "type": "integer", "title": "periodSeconds" },
        "timeoutSeconds": { "type": "integer", "title": "timeoutSeconds" },
        "successThreshold": { "type": "integer", "title": "successThreshold" }
    })
}

/// Builds the 12-property web-service schema fixture (3 required properties).
pub fn webservice_schema() -> SchemaNode {
    let document = json!({
        "type": "object",
        "required": ["image", "targetRevision", "targetSize"],
        "properties": {
            "image": { "type": "string", "title": "image" },
            "cmd": {
                "type": "array",
                "title": "cmd",
                "items": { "type": "string" }
            },
            "cpu": { "type": "string", "title": "cpu" },
            "memory": { "type": "string", "title": "memory" },
            "volumes": {
                "type": "string",
                "title": "volumes",
                "description": "Specify volume type, options: pvc, configMap, secret, emptyDir",
                "enum": ["pvc", "configMap", "secret", "emptyDir"]
            },
            "livenessProbe": {
                "type": "object",
                "title": "livenessProbe",
                "required": ["port"],
                "properties": probe_properties()
            },
            "readinessProbe": {
                "type": "object",
                "title": "readinessProbe",
                "required": ["port"],
                "properties": probe_properties()
            },
            "env": {
                "type": "array",
                "title": "env",
                "items": {
                    "type": "object",
                    "required": ["name"],
                    "properties": {
                        "name": { "type": "string", "title": "name" },
                        "value": { "type": "string", "title": "value" }
                    }
                }
            },
            "annotations": { "type": "object", "title": "annotations" },
            "targetRevision": { "type": "string", "title": "targetRevision" },
            "targetSize": { "type": "integer", "title": "targetSize" },
            "batchPartition": { "type": "integer", "title": "batchPartition" }
        }
    });
    serde_json::from_value(document).expect("fixture deserializes")
}

/// Builds one parameter with the given label, required flag, and child count.
pub fn parameter(label: &str, required: bool, children: usize, sort: u64) -> UiParameter {
    let sub_parameters = (0 .. children)
        .map(|index| UiParameter {
            json_key: format!("{label}.s{index}"),
            label: format!("{label}S{index}"),
            ..UiParameter::default()
        })
        .collect();
    UiParameter {
        json_key: label.to_lowercase(),
        label: label.to_owned(),
        validate: Validate {
            required,
            ..Validate::default()
        },
        sort,
        sub_parameters,
        ..UiParameter::default()
    }
}

/// Collects every `jsonKey` in the tree, depth first.
pub fn collect_keys(parameters: &[UiParameter], keys: &mut Vec<String>) {
    for parameter in parameters {
        keys.push(parameter.json_key.clone());
        collect_keys(&parameter.sub_parameters, keys);
    }
}

/// Finds a parameter by key within one sibling list.
pub fn find<'a>(parameters: &'a [UiParameter], json_key: &str) -> &'a UiParameter {
    parameters
        .iter()
        .find(|parameter| parameter.json_key == json_key)
        .unwrap_or_else(|| panic!("missing parameter {json_key}"))
}
