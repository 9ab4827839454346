//! Canonical identity strings.
//!
//! Produces the member ID grammar used by compiler-emitted documentation
//! files (`T:`, `M:`, `F:`, `P:` prefixes), so descriptors built from
//! metadata can be matched against independently authored annotations.
//!
//! Kind prefixes are only added at the outermost call; nested type
//! references (declaring types, generic arguments, parameter types) are
//! written as bare fragments.

use crate::model::{FieldSymbol, MethodSymbol, ParameterSymbol, PropertySymbol, Symbol, SymbolKind, TypeRef};

/// Encode any symbol as its canonical identity string.
pub fn encode_identity(symbol: &Symbol) -> String {
    match symbol {
        Symbol::Type(ty) => type_id(&ty.reference),
        Symbol::Method(method) => method_id(method, false),
        Symbol::Constructor(ctor) => method_id(ctor, true),
        Symbol::Field(field) => field_id(field),
        Symbol::Property(property) => property_id(property),
        Symbol::Parameter(parameter) => parameter_fragment(parameter),
        Symbol::GenericParameter(generic) => format!("``{}", generic.position),
    }
}

/// `T:` identity of a type reference.
pub fn type_id(ty: &TypeRef) -> String {
    let mut out = String::from(SymbolKind::Type.id_prefix());
    write_type(&mut out, ty);
    out
}

/// `M:` identity of a method, or of a constructor when `constructor` is set.
pub fn method_id(
    method: &MethodSymbol,
    constructor: bool,
) -> String {
    let mut out = String::from(SymbolKind::Method.id_prefix());
    write_type(&mut out, &method.declaring_type);
    out.push('.');
    out.push_str(if constructor {
        "#ctor"
    } else {
        &method.name
    });

    if method.is_generic() {
        // Counts generic-typed parameters, not the method's own arity.
        let generic_typed = method.parameters.iter().filter(|p| p.ty.is_generic_type()).count();
        out.push_str("``");
        out.push_str(&generic_typed.to_string());
    }

    write_parameter_list(&mut out, &method.parameters);
    out
}

pub fn field_id(field: &FieldSymbol) -> String {
    let mut out = String::from(SymbolKind::Field.id_prefix());
    write_type(&mut out, &field.declaring_type);
    out.push('.');
    out.push_str(&field.name);
    out
}

/// `P:` identity; indexers append their index parameter types.
pub fn property_id(property: &PropertySymbol) -> String {
    let mut out = String::from(SymbolKind::Property.id_prefix());
    write_type(&mut out, &property.declaring_type);
    out.push('.');
    out.push_str(&property.name);
    write_parameter_list(&mut out, &property.index_parameters);
    out
}

/// Bare type fragment, without a kind prefix.
pub fn type_fragment(ty: &TypeRef) -> String {
    let mut out = String::new();
    write_type(&mut out, ty);
    out
}

fn parameter_fragment(parameter: &ParameterSymbol) -> String {
    let mut out = type_fragment(&parameter.ty);
    out.push(' ');
    out.push_str(&parameter.name);
    out
}

fn write_parameter_list(
    out: &mut String,
    parameters: &[ParameterSymbol],
) {
    if parameters.is_empty() {
        return;
    }
    out.push('(');
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_type(out, &parameter.ty);
    }
    out.push(')');
}

fn write_type(
    out: &mut String,
    ty: &TypeRef,
) {
    match ty {
        TypeRef::Named(named) => {
            if let Some(declaring) = &named.declaring_type {
                write_type(out, declaring);
                out.push('.');
            } else if let Some(namespace) = &named.namespace {
                out.push_str(namespace);
                out.push('.');
            }
            out.push_str(&named.bare_name);

            if named.is_constructed() {
                out.push('{');
                for (i, argument) in named.generic_arguments.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    write_type(out, argument);
                }
                out.push('}');
            } else if named.arity > 0 {
                out.push('`');
                out.push_str(&named.arity.to_string());
            }
        },
        TypeRef::GenericParameter(generic) => {
            out.push_str("``");
            out.push_str(&generic.position.to_string());
        },
        TypeRef::Array {
            element,
            rank,
        } => {
            write_type(out, element);
            if *rank == 1 {
                out.push_str("[]");
            } else {
                out.push('[');
                for i in 0..*rank {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str("0:");
                }
                out.push(']');
            }
        },
        TypeRef::Pointer(element) => {
            write_type(out, element);
            out.push('*');
        },
        TypeRef::ByRef(element) => {
            write_type(out, element);
            out.push('@');
        },
    }
}

#[cfg(test)]
#[path = "../tests/src/identity_tests.rs"]
mod tests;
