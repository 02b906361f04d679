// crates/uischema-document/src/parse.rs
// ============================================================================
// Module: Document Parsing
// Description: Deserialization of schema and overlay documents.
// Purpose: Turn untrusted document text into typed core structures.
// Dependencies: serde_json, serde_yaml, thiserror, uischema-core
// ============================================================================

//! ## Overview
//! Schema documents are JSON objects following the engine's JSON-Schema
//! subset; overlay documents are arrays of partial parameters, authored in
//! YAML or JSON. Unknown fields in either document are ignored rather than
//! rejected, since documents may be authored against newer format revisions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use uischema_core::SchemaNode;
use uischema_core::UiParameterPatch;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Document parsing errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Schema document is not valid JSON for the expected shape.
    #[error("invalid schema document: {0}")]
    Schema(String),
    /// Overlay document is not valid YAML/JSON for the expected shape.
    #[error("invalid overlay document: {0}")]
    Overlay(String),
}

// ============================================================================
// SECTION: Document Formats
// ============================================================================

/// Text format an overlay document is authored in.
///
/// # Invariants
/// - Both formats deserialize to identical patch lists for equivalent content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON document text.
    Json,
    /// YAML document text.
    Yaml,
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a raw schema document (JSON) into a schema node tree.
///
/// # Errors
///
/// Returns [`DocumentError::Schema`] when the document is not valid JSON or
/// does not deserialize into the schema node shape.
pub fn parse_schema_document(document: &str) -> Result<SchemaNode, DocumentError> {
    serde_json::from_str(document).map_err(|err| DocumentError::Schema(err.to_string()))
}

/// Parses an overlay document into a list of parameter patches.
///
/// # Errors
///
/// Returns [`DocumentError`] when the document does not deserialize into a
/// patch list in the given format.
pub fn parse_overlay_document(
    document: &str,
    format: DocumentFormat,
) -> Result<Vec<UiParameterPatch>, DocumentError> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str(document).map_err(|err| DocumentError::Overlay(err.to_string()))
        }
        DocumentFormat::Yaml => {
            serde_yaml::from_str(document).map_err(|err| DocumentError::Overlay(err.to_string()))
        }
    }
}
