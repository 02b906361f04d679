// crates/uischema-core/src/interfaces/mod.rs
// ============================================================================
// Module: Collaborator Interfaces
// Description: Backend-agnostic document sources for schemas and overlays.
// Purpose: Define the seams the surrounding system implements for the engine.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The engine itself performs no I/O. The surrounding system fetches the raw
//! schema document and the operator overlay document from whatever store it
//! uses and hands them to the rendering façade, either directly or through
//! these traits. Implementations must treat fetched documents as untrusted
//! and surface retrieval or deserialization failures as [`SourceError`]s;
//! retries belong to the implementation, never to the engine.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::identifiers::DefinitionRef;
use crate::core::overlay::UiParameterPatch;
use crate::core::schema::SchemaNode;

// ============================================================================
// SECTION: Source Errors
// ============================================================================

/// Document source errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Source I/O error.
    #[error("document source io error: {0}")]
    Io(String),
    /// Fetched document could not be parsed into the expected shape.
    #[error("document source invalid data: {0}")]
    Invalid(String),
    /// Source reported an error.
    #[error("document source error: {0}")]
    Store(String),
}

// ============================================================================
// SECTION: Schema Source
// ============================================================================

/// Source of raw schema documents keyed by definition reference.
pub trait SchemaSource {
    /// Fetches the schema document for a definition, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when retrieval or deserialization fails.
    fn fetch_schema(&self, definition: &DefinitionRef) -> Result<Option<SchemaNode>, SourceError>;
}

// ============================================================================
// SECTION: Overlay Source
// ============================================================================

/// Source of operator-authored overlay documents keyed by definition reference.
pub trait OverlaySource {
    /// Fetches the overlay document for a definition, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when retrieval or deserialization fails.
    fn fetch_overlay(
        &self,
        definition: &DefinitionRef,
    ) -> Result<Option<Vec<UiParameterPatch>>, SourceError>;
}
