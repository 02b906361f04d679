// crates/uischema-core/src/runtime/mod.rs
// ============================================================================
// Module: UI Schema Runtime
// Description: Walker, sorter, merger, and the rendering façade.
// Purpose: Compose the pure pipeline from schema document to final tree.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The runtime composes three pure, stateless stages into a pipeline: the
//! walker derives a default tree from a schema document, the sorter imposes
//! the deterministic display order, and the patcher overlays operator
//! customizations. [`render`] exposes the façade external collaborators call.

pub mod patcher;
pub mod render;
pub mod sorter;
pub mod walker;
