// crates/uischema-core/src/runtime/sorter.rs
// ============================================================================
// Module: Parameter Sorter
// Description: Deterministic display ordering for sibling parameter lists.
// Purpose: Partition required fields first and number siblings continuously.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The sorter imposes a total, deterministic order on every sibling list in a
//! parameter tree. Required parameters form a hard leading partition; within
//! each partition, parameters with fewer nested children come first, and
//! remaining ties break on byte-wise label order. Numbering is continuous
//! across the partition boundary, so numeric comparison of `sort` alone
//! reproduces the display order later.
//!
//! Sorting is idempotent: a second pass reorders nothing and re-derives the
//! same numbers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use crate::core::parameter::UiParameter;

/// Numbering base used when no sibling carries a sort number yet.
const DEFAULT_SORT_BASE: u64 = 100;

// ============================================================================
// SECTION: Sorting
// ============================================================================

/// Sorts every sibling list in the tree and assigns fresh sort numbers.
///
/// Each sibling list is ordered and numbered independently; `sort` values are
/// never comparable across nesting levels.
pub fn sort_parameters(siblings: &mut [UiParameter]) {
    sort_sibling_list(siblings);
    for parameter in siblings.iter_mut() {
        sort_parameters(&mut parameter.sub_parameters);
    }
}

/// Orders one sibling list and renumbers it continuously.
fn sort_sibling_list(siblings: &mut [UiParameter]) {
    let base = siblings
        .iter()
        .map(|parameter| parameter.sort)
        .filter(|sort| *sort != 0)
        .min()
        .unwrap_or(DEFAULT_SORT_BASE);

    siblings.sort_by(compare_siblings);

    let mut next = base;
    for parameter in siblings.iter_mut() {
        parameter.sort = next;
        next = next.saturating_add(1);
    }
}

/// Compares two siblings: required first, then fewer children, then label.
fn compare_siblings(a: &UiParameter, b: &UiParameter) -> Ordering {
    b.validate
        .required
        .cmp(&a.validate.required)
        .then_with(|| a.sub_parameters.len().cmp(&b.sub_parameters.len()))
        .then_with(|| a.label.as_bytes().cmp(b.label.as_bytes()))
}
