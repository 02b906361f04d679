// crates/uischema-core/src/core/mod.rs
// ============================================================================
// Module: UI Schema Core Model
// Description: Data model for schema nodes, UI parameters, and overlays.
// Purpose: Define the wire-stable types shared by walker, sorter, and merger.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The core model covers the three document shapes the engine works with:
//! the incoming schema node tree, the derived UI parameter tree, and the
//! operator-authored overlay tree. All types serialize with wire names that
//! are stable for external API clients.

pub mod identifiers;
pub mod overlay;
pub mod parameter;
pub mod schema;
