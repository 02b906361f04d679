// crates/uischema-core/src/core/identifiers.rs
// ============================================================================
// Module: Definition Identifiers
// Description: Identity types for definitions whose schemas feed the engine.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! External stores hold schema and overlay documents keyed by a definition
//! name and kind. The engine never interprets either value; it only threads
//! them through to collaborator lookups. Names are opaque strings; kinds are
//! a closed set matching the definition categories the surrounding system
//! manages.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Definition Name
// ============================================================================

/// Definition name identifying one component, trait, workflow-step, or policy.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionName(String);

impl DefinitionName {
    /// Creates a new definition name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DefinitionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for DefinitionName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DefinitionName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Definition Kind
// ============================================================================

/// Category of a definition whose parameters the engine renders.
///
/// # Invariants
/// - Variants are stable for serialization and store-key matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKind {
    /// Component definition.
    Component,
    /// Trait definition.
    Trait,
    /// Workflow step definition.
    WorkflowStep,
    /// Policy definition.
    Policy,
}

impl DefinitionKind {
    /// Returns the stable wire string for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Trait => "trait",
            Self::WorkflowStep => "workflowstep",
            Self::Policy => "policy",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Definition Reference
// ============================================================================

/// Composite key under which external stores hold schema and overlay documents.
///
/// # Invariants
/// - `name` and `kind` together identify exactly one definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefinitionRef {
    /// Definition name.
    pub name: DefinitionName,
    /// Definition kind.
    pub kind: DefinitionKind,
}

impl DefinitionRef {
    /// Creates a definition reference from a name and kind.
    #[must_use]
    pub fn new(name: impl Into<DefinitionName>, kind: DefinitionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

impl fmt::Display for DefinitionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}
