// crates/uischema-document/src/validate.rs
// ============================================================================
// Module: Overlay Validation
// Description: Structural checks for operator-authored overlay documents.
// Purpose: Reject malformed overlays before they are persisted.
// Dependencies: thiserror, uischema-core
// ============================================================================

//! ## Overview
//! Overlay documents are best-effort overlays and may legitimately reference
//! parameters a given definition version does not have — that is not an
//! error. What is rejected here is structure that can never merge sensibly:
//! entries with no `jsonKey`, duplicate keys among siblings (the merger would
//! silently apply only the first), and conditions that reference no key.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use thiserror::Error;
use uischema_core::UiParameterPatch;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Overlay document validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - `position` fields are zero-based indices within the offending sibling list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverlayValidationError {
    /// An overlay entry has an empty `jsonKey`.
    #[error("overlay entry {position} under {parent:?} has an empty jsonKey")]
    EmptyJsonKey {
        /// Parent key of the offending sibling list (`None` at the root).
        parent: Option<String>,
        /// Index of the offending entry in its sibling list.
        position: usize,
    },
    /// Two overlay entries in one sibling list share a `jsonKey`.
    #[error("overlay declares jsonKey {json_key} more than once in one sibling list")]
    DuplicateJsonKey {
        /// The duplicated key.
        json_key: String,
    },
    /// A condition on an overlay entry references no key.
    #[error("condition {position} on overlay entry {json_key} has an empty jsonKey")]
    EmptyConditionKey {
        /// Key of the entry carrying the condition.
        json_key: String,
        /// Index of the offending condition.
        position: usize,
    },
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates an overlay document's structure.
///
/// # Errors
///
/// Returns the first [`OverlayValidationError`] encountered in document order.
pub fn validate_overlay(patches: &[UiParameterPatch]) -> Result<(), OverlayValidationError> {
    validate_sibling_list(patches, None)
}

/// Validates one sibling list of patches and recurses into nested lists.
fn validate_sibling_list(
    patches: &[UiParameterPatch],
    parent: Option<&str>,
) -> Result<(), OverlayValidationError> {
    let mut seen = BTreeSet::new();
    for (position, patch) in patches.iter().enumerate() {
        if patch.json_key.is_empty() {
            return Err(OverlayValidationError::EmptyJsonKey {
                parent: parent.map(ToOwned::to_owned),
                position,
            });
        }
        if !seen.insert(patch.json_key.as_str()) {
            return Err(OverlayValidationError::DuplicateJsonKey {
                json_key: patch.json_key.clone(),
            });
        }
        if let Some(conditions) = &patch.conditions {
            for (condition_position, condition) in conditions.iter().enumerate() {
                if condition.json_key.is_empty() {
                    return Err(OverlayValidationError::EmptyConditionKey {
                        json_key: patch.json_key.clone(),
                        position: condition_position,
                    });
                }
            }
        }
        if let Some(sub_patches) = &patch.sub_parameters {
            validate_sibling_list(sub_patches, Some(patch.json_key.as_str()))?;
        }
    }
    Ok(())
}
