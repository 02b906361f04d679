// crates/uischema-core/tests/patcher.rs
// ============================================================================
// Module: Patch Merger Tests
// Description: Verifies field-level overlay merging onto derived trees.
// ============================================================================
//! ## Overview
//! Ensures merging preserves tree shape and order exactly, overwrites only
//! the fields a patch carries, honors explicit sort numbers verbatim, and
//! ignores patches that match nothing or mismatch structurally.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use serde_json::json;
use uischema_core::ConditionOp;
use uischema_core::ConditionRule;
use uischema_core::UiParameterPatch;
use uischema_core::UiType;
use uischema_core::ValidatePatch;
use uischema_core::render_default;
use uischema_core::runtime::patcher::patch_parameters;

use crate::common::find;
use crate::common::webservice_schema;

/// Builds a patch carrying only a key.
fn patch_for(json_key: &str) -> UiParameterPatch {
    UiParameterPatch {
        json_key: json_key.to_owned(),
        ..UiParameterPatch::default()
    }
}

#[test]
fn patching_preserves_length_order_and_keys() {
    let base = render_default(&webservice_schema());
    let patches = vec![UiParameterPatch {
        label: Some("Liveness Probe".to_owned()),
        sub_parameters: Some(vec![UiParameterPatch {
            validate: Some(ValidatePatch {
                required: Some(true),
                ..ValidatePatch::default()
            }),
            ..patch_for("livenessProbe.path")
        }]),
        ..patch_for("livenessProbe")
    }];

    let merged = patch_parameters(&base, &patches);

    assert_eq!(merged.len(), 12);
    let base_keys: Vec<&str> = base.iter().map(|parameter| parameter.json_key.as_str()).collect();
    let merged_keys: Vec<&str> =
        merged.iter().map(|parameter| parameter.json_key.as_str()).collect();
    assert_eq!(merged_keys, base_keys);

    let probe = find(&merged, "livenessProbe");
    assert_eq!(probe.label, "Liveness Probe");
    assert_eq!(probe.sub_parameters.len(), 8);
    assert!(find(&probe.sub_parameters, "livenessProbe.path").validate.required);
}

#[test]
fn unpatched_fields_keep_their_derived_values() {
    let base = render_default(&webservice_schema());
    let patches = vec![UiParameterPatch {
        label: Some("Volume Kind".to_owned()),
        ..patch_for("volumes")
    }];

    let merged = patch_parameters(&base, &patches);

    let volumes = find(&merged, "volumes");
    assert_eq!(volumes.label, "Volume Kind");
    // Everything the patch did not carry stays derived.
    assert_eq!(volumes.ui_type, UiType::Select);
    assert_eq!(volumes.validate.enum_values.len(), 4);
    assert_eq!(volumes.description, find(&base, "volumes").description);
    assert_eq!(volumes.sort, find(&base, "volumes").sort);
}

#[test]
fn explicit_sort_is_taken_verbatim_without_reordering() {
    let base = render_default(&webservice_schema());
    let patches = vec![UiParameterPatch {
        sort: Some(7),
        ..patch_for("batchPartition")
    }];

    let merged = patch_parameters(&base, &patches);

    let position = merged
        .iter()
        .position(|parameter| parameter.json_key == "batchPartition")
        .expect("batchPartition present");
    let base_position = base
        .iter()
        .position(|parameter| parameter.json_key == "batchPartition")
        .expect("batchPartition present");
    assert_eq!(position, base_position, "list position is inherited from base");
    assert_eq!(merged[position].sort, 7);
}

#[test]
fn unmatched_patches_are_discarded() {
    let base = render_default(&webservice_schema());
    let patches = vec![patch_for("doesNotExist"), patch_for("livenessProbe.nope")];

    let merged = patch_parameters(&base, &patches);

    assert_eq!(merged, base);
}

#[test]
fn nested_patches_on_leaf_parameters_are_ignored() {
    let base = render_default(&webservice_schema());
    let patches = vec![UiParameterPatch {
        label: Some("Image".to_owned()),
        sub_parameters: Some(vec![patch_for("image.tag")]),
        ..patch_for("image")
    }];

    let merged = patch_parameters(&base, &patches);

    let image = find(&merged, "image");
    assert_eq!(image.label, "Image");
    assert!(image.sub_parameters.is_empty());
}

#[test]
fn conditions_and_forced_required_apply_from_patches() {
    let base = render_default(&webservice_schema());
    let patches = vec![UiParameterPatch {
        validate: Some(ValidatePatch {
            required: Some(true),
            ..ValidatePatch::default()
        }),
        conditions: Some(vec![ConditionRule {
            json_key: "volumes".to_owned(),
            op: ConditionOp::Equal,
            value: json!("pvc"),
        }]),
        sort: Some(77),
        ..patch_for("batchPartition")
    }];

    let merged = patch_parameters(&base, &patches);

    let batch = find(&merged, "batchPartition");
    assert!(batch.validate.required);
    assert_eq!(batch.sort, 77);
    assert_eq!(batch.conditions.len(), 1);
    assert_eq!(batch.conditions[0].op, ConditionOp::Equal);
}

#[test]
fn merging_leaves_the_base_tree_untouched() {
    let base = render_default(&webservice_schema());
    let before = base.clone();
    let patches = vec![UiParameterPatch {
        label: Some("CPU".to_owned()),
        ..patch_for("cpu")
    }];

    let _merged = patch_parameters(&base, &patches);

    assert_eq!(base, before);
}
