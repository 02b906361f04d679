// crates/uischema-document/src/lib.rs
// ============================================================================
// Module: UI Schema Documents
// Description: Parsing and validation for schema and overlay documents.
// Purpose: Convert untrusted external documents into core engine types.
// Dependencies: serde_json, serde_yaml, thiserror, uischema-core
// ============================================================================

//! ## Overview
//! The engine's two external inputs arrive as text documents: the raw schema
//! document (JSON, stored as definition config data) and the operator overlay
//! document (authored in YAML or JSON). This crate parses both into core
//! types, validates overlay documents structurally before they are persisted,
//! and publishes a JSON Schema describing the overlay document format so
//! authoring tools can validate ahead of submission.
//!
//! Parsing failures here are the one externally surfaced error class of the
//! engine's contract: a document that cannot be turned into core types.

pub mod parse;
pub mod schema;
pub mod validate;

pub use parse::DocumentError;
pub use parse::DocumentFormat;
pub use parse::parse_overlay_document;
pub use parse::parse_schema_document;
pub use schema::overlay_schema;
pub use validate::OverlayValidationError;
pub use validate::validate_overlay;
