// crates/uischema-core/src/runtime/walker.rs
// ============================================================================
// Module: Schema Walker
// Description: Recursive derivation of default UI parameter trees.
// Purpose: Turn every schema property into exactly one renderable parameter.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The walker recursively descends a schema node tree and emits one
//! [`UiParameter`] per schema property, transitively. Object properties and
//! array-of-object item shapes recurse into nested sub-parameters; scalar,
//! enum, and array-of-scalar properties stay flat. Nodes the engine does not
//! understand degrade to a generic widget — derivation never drops a property
//! and never fails.
//!
//! The walker assigns no sort numbers; sibling order at this stage follows
//! property-map iteration and is not significant until the sorter runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::parameter::UiParameter;
use crate::core::parameter::UiType;
use crate::core::parameter::Validate;
use crate::core::schema::SchemaKind;
use crate::core::schema::SchemaNode;

// ============================================================================
// SECTION: Derivation
// ============================================================================

/// Derives the default UI parameter tree for a schema document root.
///
/// Returns the root-level siblings, unsorted. Every property of `root` yields
/// exactly one parameter (or sub-tree); an empty or property-less root yields
/// an empty list.
#[must_use]
pub fn derive_parameters(root: &SchemaNode) -> Vec<UiParameter> {
    derive_children(root, "")
}

/// Derives parameters for every property of `node`, keyed under `parent_key`.
fn derive_children(node: &SchemaNode, parent_key: &str) -> Vec<UiParameter> {
    node.properties
        .iter()
        .map(|(name, child)| derive_parameter(name, child, node, parent_key))
        .collect()
}

/// Derives one parameter for the property `name` with shape `child`.
fn derive_parameter(
    name: &str,
    child: &SchemaNode,
    parent: &SchemaNode,
    parent_key: &str,
) -> UiParameter {
    let json_key = if parent_key.is_empty() {
        name.to_owned()
    } else {
        format!("{parent_key}.{name}")
    };
    let kind = child.kind();

    let sub_parameters = match kind {
        SchemaKind::Object => derive_children(child, &json_key),
        // The item shape is described once; sub-parameters reuse the array's
        // own key with no index segment.
        SchemaKind::ArrayOfObject => child
            .items
            .as_deref()
            .map(|items| derive_children(items, &json_key))
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    UiParameter {
        label: child.title.clone().unwrap_or_else(|| name.to_owned()),
        description: child.description.clone(),
        ui_type: infer_ui_type(child, kind),
        validate: Validate {
            required: parent.requires(name),
            enum_values: child.enum_values.clone(),
            pattern: child.pattern.clone(),
            min: child.minimum,
            max: child.maximum,
            default_value: child.default.clone(),
        },
        conditions: Vec::new(),
        sort: 0,
        sub_parameters,
        json_key,
    }
}

/// Maps a schema node's classification to the widget tag renderers dispatch on.
fn infer_ui_type(node: &SchemaNode, kind: SchemaKind) -> UiType {
    match kind {
        SchemaKind::Enum => UiType::Select,
        SchemaKind::String => UiType::Input,
        SchemaKind::Number => UiType::Number,
        SchemaKind::Boolean => UiType::Switch,
        SchemaKind::ArrayOfScalar => match node.items.as_deref().map(SchemaNode::kind) {
            Some(SchemaKind::Number) => UiType::Numbers,
            _ => UiType::Strings,
        },
        SchemaKind::ArrayOfObject => UiType::Structs,
        SchemaKind::Object => UiType::Group,
        SchemaKind::Fallback => {
            // A declared object with no properties still renders, as free-form
            // key/value pairs. Everything else unknown renders as plain input.
            if node.schema_type.as_deref() == Some("object") {
                UiType::Kv
            } else {
                UiType::Input
            }
        }
    }
}
