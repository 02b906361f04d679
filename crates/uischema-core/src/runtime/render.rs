// crates/uischema-core/src/runtime/render.rs
// ============================================================================
// Module: Rendering Façade
// Description: Pipeline composition from schema document to final tree.
// Purpose: Expose the two operations external collaborators call.
// Dependencies: crate::core, crate::interfaces, crate::runtime, thiserror
// ============================================================================

//! ## Overview
//! The façade composes walker, sorter, and merger. [`render_default`] derives
//! and orders the default tree; [`render_final`] additionally overlays the
//! operator patch document. Both are pure functions of their inputs.
//! [`render_definition`] is the convenience entry point that pulls both
//! documents from collaborator sources before running the pipeline.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::identifiers::DefinitionRef;
use crate::core::overlay::UiParameterPatch;
use crate::core::parameter::UiParameter;
use crate::core::schema::SchemaNode;
use crate::interfaces::OverlaySource;
use crate::interfaces::SchemaSource;
use crate::interfaces::SourceError;
use crate::runtime::patcher::patch_parameters;
use crate::runtime::sorter::sort_parameters;
use crate::runtime::walker::derive_parameters;

// ============================================================================
// SECTION: Render Errors
// ============================================================================

/// Errors surfaced when rendering a definition through document sources.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No schema document exists for the definition.
    #[error("schema document not found for definition {definition}")]
    SchemaNotFound {
        /// Definition whose schema document is missing.
        definition: DefinitionRef,
    },
    /// A document source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

// ============================================================================
// SECTION: Façade Operations
// ============================================================================

/// Renders the default UI parameter tree for a schema document.
#[must_use]
pub fn render_default(schema: &SchemaNode) -> Vec<UiParameter> {
    let mut parameters = derive_parameters(schema);
    sort_parameters(&mut parameters);
    parameters
}

/// Renders the final UI parameter tree, overlaying patches when present.
///
/// A `None` or empty overlay behaves exactly as [`render_default`].
#[must_use]
pub fn render_final(
    schema: &SchemaNode,
    overlay: Option<&[UiParameterPatch]>,
) -> Vec<UiParameter> {
    let parameters = render_default(schema);
    match overlay {
        Some(patches) if !patches.is_empty() => patch_parameters(&parameters, patches),
        _ => parameters,
    }
}

/// Renders the final tree for a definition by fetching both documents.
///
/// A missing overlay document is not an error; the default tree is returned.
///
/// # Errors
///
/// Returns [`RenderError::SchemaNotFound`] when no schema document exists for
/// the definition, and propagates [`SourceError`] from either source.
pub fn render_definition(
    schemas: &impl SchemaSource,
    overlays: &impl OverlaySource,
    definition: &DefinitionRef,
) -> Result<Vec<UiParameter>, RenderError> {
    let schema = schemas.fetch_schema(definition)?.ok_or_else(|| RenderError::SchemaNotFound {
        definition: definition.clone(),
    })?;
    let overlay = overlays.fetch_overlay(definition)?;
    Ok(render_final(&schema, overlay.as_deref()))
}
