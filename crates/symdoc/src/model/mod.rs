//! Symbol descriptor model.
//!
//! Raw reflected records ([`raw`]) are normalized once into immutable
//! descriptors ([`descriptor`]) shared by the identity encoder and the
//! signature renderer.

pub mod build;
pub mod descriptor;
pub mod names;
pub mod raw;
pub mod tables;

pub use self::{
    descriptor::{
        Accessibility, Accessor, FieldSymbol, GenericParameter, Literal, MemberModifiers, MethodSymbol, NamedType,
        Operator, ParameterPassing, ParameterSymbol, PropertySymbol, Symbol, SymbolKind, TypeCategory, TypeRef,
        TypeSymbol,
    },
    names::{anchor, identifier, split_arity},
    raw::{
        RawAccessor, RawAssembly, RawField, RawGenericParameter, RawMethod, RawParameter, RawProperty,
        RawTypeDefinition, RawTypeRef,
    },
    tables::{SymbolTables, operator_symbol},
};
