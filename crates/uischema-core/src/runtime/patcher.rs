// crates/uischema-core/src/runtime/patcher.rs
// ============================================================================
// Module: Patch Merger
// Description: Field-level overlay of operator patches onto derived trees.
// Purpose: Customize matched nodes without disturbing tree shape or order.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The merger overlays an operator-authored partial tree onto an
//! already-sorted base tree. Matching is by `jsonKey` at each nesting level.
//! A matched patch overwrites exactly the fields it carries; everything else
//! keeps its derived value. The output has the same length, order, and
//! `jsonKey` sequence as the base at every level — patches whose key matches
//! nothing are discarded, and the merger never inserts parameters the base
//! tree does not have.
//!
//! The merger produces a new tree and leaves the base untouched, so callers
//! may keep reusing the sorted default tree.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::overlay::UiParameterPatch;
use crate::core::overlay::ValidatePatch;
use crate::core::parameter::UiParameter;
use crate::core::parameter::Validate;

// ============================================================================
// SECTION: Merging
// ============================================================================

/// Overlays `patches` onto `base`, returning the merged tree.
///
/// An explicit `sort` carried by a patch is taken verbatim; the merger never
/// re-sorts, so output order is inherited entirely from `base`.
#[must_use]
pub fn patch_parameters(base: &[UiParameter], patches: &[UiParameterPatch]) -> Vec<UiParameter> {
    base.iter()
        .map(|parameter| {
            patches
                .iter()
                .find(|patch| patch.json_key == parameter.json_key)
                .map_or_else(|| parameter.clone(), |patch| apply_patch(parameter, patch))
        })
        .collect()
}

/// Applies one matched patch to one base parameter.
fn apply_patch(base: &UiParameter, patch: &UiParameterPatch) -> UiParameter {
    let mut merged = base.clone();
    if let Some(label) = &patch.label {
        merged.label = label.clone();
    }
    if let Some(description) = &patch.description {
        merged.description = Some(description.clone());
    }
    if let Some(ui_type) = patch.ui_type {
        merged.ui_type = ui_type;
    }
    if let Some(validate) = &patch.validate {
        apply_validate_patch(&mut merged.validate, validate);
    }
    if let Some(conditions) = &patch.conditions {
        merged.conditions = conditions.clone();
    }
    if let Some(sort) = patch.sort {
        merged.sort = sort;
    }
    // Nested patches only apply where the base actually has sub-parameters;
    // a structurally inconsistent patch is ignored for the mismatched portion.
    if let Some(sub_patches) = &patch.sub_parameters
        && !base.sub_parameters.is_empty()
    {
        merged.sub_parameters = patch_parameters(&base.sub_parameters, sub_patches);
    }
    merged
}

/// Applies present validate fields onto the base constraints.
fn apply_validate_patch(validate: &mut Validate, patch: &ValidatePatch) {
    if let Some(required) = patch.required {
        validate.required = required;
    }
    if let Some(enum_values) = &patch.enum_values {
        validate.enum_values = enum_values.clone();
    }
    if let Some(pattern) = &patch.pattern {
        validate.pattern = Some(pattern.clone());
    }
    if let Some(min) = patch.min {
        validate.min = Some(min);
    }
    if let Some(max) = patch.max {
        validate.max = Some(max);
    }
    if let Some(default_value) = &patch.default_value {
        validate.default_value = Some(default_value.clone());
    }
}
