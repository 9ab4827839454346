//! Raw symbol records as produced by an external metadata walker.
//!
//! These mirror a reflection API: type references carry independent
//! modifier flags and names may still carry a generic arity marker. They are
//! deserialized from JSON and normalized into descriptors by
//! [`crate::model::build`].

use serde::Deserialize;

use super::descriptor::{Accessibility, Literal, TypeCategory};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawAssembly {
    pub name: String,
    pub types: Vec<RawTypeDefinition>,
}

/// A reflected type reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTypeRef {
    pub namespace: Option<String>,
    pub name: String,
    pub is_array: bool,
    pub array_rank: Option<u32>,
    pub is_pointer: bool,
    pub is_by_ref: bool,
    pub element_type: Option<Box<RawTypeRef>>,
    pub generic_parameter_position: Option<u32>,
    pub generic_arguments: Vec<RawTypeRef>,
    pub declaring_type: Option<Box<RawTypeRef>>,
}

impl RawTypeRef {
    pub fn named(
        namespace: &str,
        name: &str,
    ) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            name: name.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawGenericParameter {
    pub name: String,
    pub position: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTypeDefinition {
    #[serde(flatten)]
    pub reference: RawTypeRef,
    pub category: TypeCategory,
    pub access: Accessibility,
    pub is_sealed: bool,
    pub is_abstract: bool,
    /// Base types, direct base first. `System.Object` may be omitted.
    pub base_types: Vec<RawTypeRef>,
    pub interfaces: Vec<RawTypeRef>,
    pub generic_parameters: Vec<RawGenericParameter>,
    pub deprecated: Option<String>,
    pub constructors: Vec<RawMethod>,
    pub methods: Vec<RawMethod>,
    pub properties: Vec<RawProperty>,
    pub fields: Vec<RawField>,
    pub delegate_invoke: Option<RawMethod>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawParameter {
    pub name: String,
    pub parameter_type: RawTypeRef,
    pub is_out: bool,
    pub is_params: bool,
    pub default_value: Option<Literal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawMethod {
    pub name: String,
    pub access: Accessibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_virtual: bool,
    pub is_special_name: bool,
    /// Type that introduced the virtual slot this method fills.
    pub introduced_by: Option<RawTypeRef>,
    pub generic_parameters: Vec<RawGenericParameter>,
    pub parameters: Vec<RawParameter>,
    /// `None` for constructors and `void` methods.
    pub return_type: Option<RawTypeRef>,
    pub deprecated: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawAccessor {
    pub access: Accessibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_virtual: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProperty {
    pub name: String,
    pub property_type: RawTypeRef,
    pub getter: Option<RawAccessor>,
    pub setter: Option<RawAccessor>,
    pub index_parameters: Vec<RawParameter>,
    pub introduced_by: Option<RawTypeRef>,
    pub deprecated: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawField {
    pub name: String,
    pub field_type: RawTypeRef,
    pub access: Accessibility,
    pub is_static: bool,
    pub is_literal: bool,
    pub is_init_only: bool,
    pub is_special_name: bool,
    pub constant_value: Option<Literal>,
    pub deprecated: Option<String>,
}
