//! Normalization of raw records into descriptors.
//!
//! Every function here is pure and either returns a complete descriptor or a
//! [`MalformedSymbolError`]; nothing partially built escapes.

use crate::error::MalformedSymbolError;

use super::descriptor::{
    Accessor, FieldSymbol, GenericParameter, MemberModifiers, MethodSymbol, NamedType, Operator, ParameterPassing,
    ParameterSymbol, PropertySymbol, TypeRef, TypeSymbol,
};
use super::names::{identifier, split_arity};
use super::raw::{
    RawAccessor, RawField, RawGenericParameter, RawMethod, RawParameter, RawProperty, RawTypeDefinition, RawTypeRef,
};
use super::tables::SymbolTables;

impl TypeRef {
    /// Normalize a reflected type reference.
    ///
    /// Modifier flags are checked in fixed precedence: array, pointer,
    /// by-ref, generic parameter, then plain named type. Modifiers descend
    /// exactly one element level; the element is normalized recursively.
    pub fn from_raw(raw: &RawTypeRef) -> Result<TypeRef, MalformedSymbolError> {
        if raw.is_array {
            let element = raw.element_type.as_deref().ok_or_else(|| MalformedSymbolError::MissingElementType {
                name: raw.name.clone(),
            })?;
            let rank = raw.array_rank.unwrap_or(1);
            if rank == 0 {
                return Err(MalformedSymbolError::ZeroArrayRank {
                    name: raw.name.clone(),
                });
            }
            return Ok(TypeRef::Array {
                element: Box::new(TypeRef::from_raw(element)?),
                rank,
            });
        }

        if raw.is_pointer {
            let element = modifier_target(raw, "pointer")?;
            return Ok(TypeRef::Pointer(Box::new(TypeRef::from_raw(element)?)));
        }

        if raw.is_by_ref {
            let element = modifier_target(raw, "by-ref")?;
            return Ok(TypeRef::ByRef(Box::new(TypeRef::from_raw(element)?)));
        }

        if let Some(position) = raw.generic_parameter_position {
            return Ok(TypeRef::GenericParameter(GenericParameter {
                name: identifier(&raw.name).to_string(),
                position,
            }));
        }

        Ok(TypeRef::Named(NamedType::from_raw(raw)?))
    }
}

fn modifier_target<'a>(
    raw: &'a RawTypeRef,
    kind: &'static str,
) -> Result<&'a RawTypeRef, MalformedSymbolError> {
    raw.element_type.as_deref().ok_or_else(|| MalformedSymbolError::MissingModifierTarget {
        kind,
        name: raw.name.clone(),
    })
}

impl NamedType {
    fn from_raw(raw: &RawTypeRef) -> Result<NamedType, MalformedSymbolError> {
        let (bare_name, arity) = split_arity(&raw.name)?;
        let generic_arguments = raw.generic_arguments.iter().map(TypeRef::from_raw).collect::<Result<Vec<_>, _>>()?;
        let declaring_type = match raw.declaring_type.as_deref() {
            Some(declaring) => Some(Box::new(TypeRef::from_raw(declaring)?)),
            None => None,
        };
        let namespace = raw.namespace.as_deref().map(str::trim).filter(|ns| !ns.is_empty()).map(str::to_string);

        Ok(NamedType {
            namespace,
            bare_name: bare_name.to_string(),
            arity,
            generic_arguments,
            declaring_type,
        })
    }
}

impl GenericParameter {
    fn from_raw(raw: &RawGenericParameter) -> Result<GenericParameter, MalformedSymbolError> {
        let (name, _) = split_arity(&raw.name)?;
        Ok(GenericParameter {
            name: name.to_string(),
            position: raw.position,
        })
    }
}

fn generic_parameters(raw: &[RawGenericParameter]) -> Result<Vec<GenericParameter>, MalformedSymbolError> {
    raw.iter().map(GenericParameter::from_raw).collect()
}

fn type_refs(raw: &[RawTypeRef]) -> Result<Vec<TypeRef>, MalformedSymbolError> {
    raw.iter().map(TypeRef::from_raw).collect()
}

impl TypeSymbol {
    pub fn from_raw(raw: &RawTypeDefinition) -> Result<TypeSymbol, MalformedSymbolError> {
        let context = || format!("type `{}`", raw.reference.name);

        let reference = match TypeRef::from_raw(&raw.reference).map_err(|e| e.within(context()))? {
            named @ TypeRef::Named(_) => named,
            _ => {
                return Err(MalformedSymbolError::NotATypeDefinition {
                    name: raw.reference.name.clone(),
                });
            },
        };

        let delegate_invoke = match &raw.delegate_invoke {
            Some(invoke) => Some(Box::new(MethodSymbol::from_raw(invoke, &reference)?)),
            None => None,
        };

        Ok(TypeSymbol {
            category: raw.category,
            access: raw.access,
            is_sealed: raw.is_sealed,
            is_abstract: raw.is_abstract,
            base_types: type_refs(&raw.base_types).map_err(|e| e.within(context()))?,
            interfaces: type_refs(&raw.interfaces).map_err(|e| e.within(context()))?,
            generic_parameters: generic_parameters(&raw.generic_parameters).map_err(|e| e.within(context()))?,
            delegate_invoke,
            deprecated: raw.deprecated.clone(),
            reference,
        })
    }
}

impl ParameterSymbol {
    pub fn from_raw(raw: &RawParameter) -> Result<ParameterSymbol, MalformedSymbolError> {
        let ty = TypeRef::from_raw(&raw.parameter_type)?;
        let passing = if raw.is_out {
            ParameterPassing::Out
        } else if matches!(ty, TypeRef::ByRef(_)) {
            ParameterPassing::Ref
        } else if raw.is_params {
            ParameterPassing::Params
        } else {
            ParameterPassing::Value
        };

        Ok(ParameterSymbol {
            name: raw.name.clone(),
            ty,
            passing,
            default_value: raw.default_value.clone(),
        })
    }
}

fn parameters(raw: &[RawParameter]) -> Result<Vec<ParameterSymbol>, MalformedSymbolError> {
    raw.iter().map(ParameterSymbol::from_raw).collect()
}

fn optional_type(raw: Option<&RawTypeRef>) -> Result<Option<TypeRef>, MalformedSymbolError> {
    raw.map(TypeRef::from_raw).transpose()
}

impl MethodSymbol {
    /// Build a method or constructor declared by `declaring_type`.
    pub fn from_raw(
        raw: &RawMethod,
        declaring_type: &TypeRef,
    ) -> Result<MethodSymbol, MalformedSymbolError> {
        let build = || -> Result<MethodSymbol, MalformedSymbolError> {
            let (name, _) = split_arity(&raw.name)?;
            let operator = recognize_operator(name, SymbolTables::global());
            Ok(MethodSymbol {
                declaring_type: declaring_type.clone(),
                name: name.to_string(),
                access: raw.access,
                modifiers: MemberModifiers {
                    is_static: raw.is_static,
                    is_abstract: raw.is_abstract,
                    is_virtual: raw.is_virtual,
                },
                introducing_type: optional_type(raw.introduced_by.as_ref())?,
                generic_parameters: generic_parameters(&raw.generic_parameters)?,
                parameters: parameters(&raw.parameters)?,
                return_type: optional_type(raw.return_type.as_ref())?,
                operator,
                deprecated: raw.deprecated.clone(),
            })
        };
        build().map_err(|e| e.within(format!("method `{}`", raw.name)))
    }

    /// Build a constructor; a missing raw name is treated as `.ctor`.
    pub fn constructor_from_raw(
        raw: &RawMethod,
        declaring_type: &TypeRef,
    ) -> Result<MethodSymbol, MalformedSymbolError> {
        if !raw.name.trim().is_empty() {
            return MethodSymbol::from_raw(raw, declaring_type);
        }
        let named = RawMethod {
            name: ".ctor".to_string(),
            ..raw.clone()
        };
        MethodSymbol::from_raw(&named, declaring_type)
    }
}

fn recognize_operator(
    name: &str,
    tables: &SymbolTables,
) -> Option<Operator> {
    if !name.starts_with("op_") || !tables.is_operator(name) {
        return None;
    }
    Some(match name {
        "op_Implicit" => Operator::Implicit,
        "op_Explicit" => Operator::Explicit,
        _ => Operator::Symbolic(tables.operator_symbol(name)),
    })
}

impl Accessor {
    fn from_raw(raw: &RawAccessor) -> Accessor {
        Accessor {
            access: raw.access,
            modifiers: MemberModifiers {
                is_static: raw.is_static,
                is_abstract: raw.is_abstract,
                is_virtual: raw.is_virtual,
            },
        }
    }
}

impl PropertySymbol {
    pub fn from_raw(
        raw: &RawProperty,
        declaring_type: &TypeRef,
    ) -> Result<PropertySymbol, MalformedSymbolError> {
        let build = || -> Result<PropertySymbol, MalformedSymbolError> {
            let (name, _) = split_arity(&raw.name)?;
            Ok(PropertySymbol {
                declaring_type: declaring_type.clone(),
                name: name.to_string(),
                ty: TypeRef::from_raw(&raw.property_type)?,
                getter: raw.getter.as_ref().map(Accessor::from_raw),
                setter: raw.setter.as_ref().map(Accessor::from_raw),
                index_parameters: parameters(&raw.index_parameters)?,
                introducing_type: optional_type(raw.introduced_by.as_ref())?,
                deprecated: raw.deprecated.clone(),
            })
        };
        build().map_err(|e| e.within(format!("property `{}`", raw.name)))
    }
}

impl FieldSymbol {
    pub fn from_raw(
        raw: &RawField,
        declaring_type: &TypeRef,
    ) -> Result<FieldSymbol, MalformedSymbolError> {
        let build = || -> Result<FieldSymbol, MalformedSymbolError> {
            let (name, _) = split_arity(&raw.name)?;
            Ok(FieldSymbol {
                declaring_type: declaring_type.clone(),
                name: name.to_string(),
                ty: TypeRef::from_raw(&raw.field_type)?,
                access: raw.access,
                is_static: raw.is_static,
                is_const: raw.is_literal,
                is_read_only: raw.is_init_only,
                constant_value: raw.constant_value.clone(),
                deprecated: raw.deprecated.clone(),
            })
        };
        build().map_err(|e| e.within(format!("field `{}`", raw.name)))
    }
}

#[cfg(test)]
#[path = "../../tests/src/model/build_tests.rs"]
mod tests;
