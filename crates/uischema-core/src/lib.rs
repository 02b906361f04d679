// crates/uischema-core/src/lib.rs
// ============================================================================
// Module: UI Schema Core
// Description: Schema-derived UI parameter engine for definition documents.
// Purpose: Derive, order, and overlay renderable UI parameter trees.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate turns a JSON-Schema-style description of a definition's
//! configurable parameters into a renderable, deterministically ordered tree
//! of UI parameter definitions, and merges operator-authored overlay
//! documents onto that tree without disturbing the parts they do not touch.
//!
//! The engine is pure and synchronous: every operation is a function of its
//! arguments, with no I/O, no shared state, and no caching. Persistence,
//! transport, and rendering belong to the surrounding system, which reaches
//! the engine through the [`interfaces`] traits or by passing parsed
//! documents directly to the [`runtime::render`] façade.

pub mod core;
pub mod interfaces;
pub mod runtime;

pub use crate::core::identifiers::DefinitionKind;
pub use crate::core::identifiers::DefinitionName;
pub use crate::core::identifiers::DefinitionRef;
pub use crate::core::overlay::UiParameterPatch;
pub use crate::core::overlay::ValidatePatch;
pub use crate::core::parameter::ConditionOp;
pub use crate::core::parameter::ConditionRule;
pub use crate::core::parameter::UiParameter;
pub use crate::core::parameter::UiType;
pub use crate::core::parameter::Validate;
pub use crate::core::schema::SchemaKind;
pub use crate::core::schema::SchemaNode;
pub use crate::interfaces::OverlaySource;
pub use crate::interfaces::SchemaSource;
pub use crate::interfaces::SourceError;
pub use crate::runtime::render::RenderError;
pub use crate::runtime::render::render_default;
pub use crate::runtime::render::render_definition;
pub use crate::runtime::render::render_final;
