//! Handle resolution: mapping edge handle names to declared inputs/outputs.
//!
//! A handle name resolves against the node type's static metadata first,
//! then against the instance's dynamically declared handles. Nodes whose
//! metadata is marked `isDynamic` accept any input handle name.

pub mod reroute;

pub use reroute::{ResolvedType, resolve_effective_source_type};

use crate::parse::types::{Node, NodeMetadata, OutputSlot, Property, TypeDescriptor};

/// A resolved output handle: either a static metadata slot or a
/// dynamically declared output on the node instance.
#[derive(Debug, Clone, Copy)]
pub enum ResolvedOutput<'a> {
    Static(&'a OutputSlot),
    Dynamic {
        name: &'a str,
        ty: &'a TypeDescriptor,
    },
}

impl<'a> ResolvedOutput<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            ResolvedOutput::Static(slot) => &slot.name,
            ResolvedOutput::Dynamic { name, .. } => name,
        }
    }

    pub fn ty(&self) -> &'a TypeDescriptor {
        match self {
            ResolvedOutput::Static(slot) => &slot.ty,
            ResolvedOutput::Dynamic { ty, .. } => ty,
        }
    }
}

/// A resolved input handle. Dynamically declared inputs carry no declared
/// type, so they type as the `any` wildcard.
#[derive(Debug, Clone, Copy)]
pub enum ResolvedInput<'a> {
    Static(&'a Property),
    Dynamic { name: &'a str },
}

impl<'a> ResolvedInput<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            ResolvedInput::Static(prop) => &prop.name,
            ResolvedInput::Dynamic { name } => name,
        }
    }

    pub fn ty(&self) -> TypeDescriptor {
        match self {
            ResolvedInput::Static(prop) => prop.ty.clone(),
            ResolvedInput::Dynamic { .. } => TypeDescriptor::any(),
        }
    }
}

/// Find `handle` among the node type's declared outputs, then among the
/// instance's dynamic outputs.
pub fn find_output_handle<'a>(
    node: &'a Node,
    handle: &str,
    metadata: Option<&'a NodeMetadata>,
) -> Option<ResolvedOutput<'a>> {
    if let Some(meta) = metadata
        && let Some(slot) = meta.outputs.iter().find(|o| o.name == handle)
    {
        return Some(ResolvedOutput::Static(slot));
    }
    node.dynamic_outputs
        .get_key_value(handle)
        .map(|(name, ty)| ResolvedOutput::Dynamic {
            name: name.as_str(),
            ty,
        })
}

/// Find `handle` among the node type's declared properties, then among
/// the instance's dynamic properties. Metadata marked `isDynamic` treats
/// any name as valid.
pub fn find_input_handle<'a>(
    node: &'a Node,
    handle: &'a str,
    metadata: Option<&'a NodeMetadata>,
) -> Option<ResolvedInput<'a>> {
    if let Some(meta) = metadata {
        if let Some(prop) = meta.properties.iter().find(|p| p.name == handle) {
            return Some(ResolvedInput::Static(prop));
        }
        if meta.is_dynamic {
            return Some(ResolvedInput::Dynamic { name: handle });
        }
    }
    node.dynamic_properties
        .get_key_value(handle)
        .map(|(name, _)| ResolvedInput::Dynamic {
            name: name.as_str(),
        })
}

/// Every valid output handle name on a node, static then dynamic, sorted
/// for deterministic issue messages.
pub fn available_output_names(node: &Node, metadata: Option<&NodeMetadata>) -> Vec<String> {
    let mut names: Vec<String> = metadata
        .map(|m| m.outputs.iter().map(|o| o.name.clone()).collect())
        .unwrap_or_default();
    names.extend(node.dynamic_outputs.keys().cloned());
    names.sort();
    names.dedup();
    names
}

/// Every valid input handle name on a node, static then dynamic, sorted
/// for deterministic issue messages.
pub fn available_input_names(node: &Node, metadata: Option<&NodeMetadata>) -> Vec<String> {
    let mut names: Vec<String> = metadata
        .map(|m| m.properties.iter().map(|p| p.name.clone()).collect())
        .unwrap_or_default();
    names.extend(node.dynamic_properties.keys().cloned());
    names.sort();
    names.dedup();
    names
}
