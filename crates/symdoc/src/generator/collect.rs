//! Walk of the raw symbol model.
//!
//! Each raw record is normalized on its own; a malformed record is logged,
//! recorded as a [`SymbolFailure`] and skipped, so one bad symbol never
//! takes its siblings down with it.

use tracing::{debug, warn};

use crate::annotations::AnnotationSource;
use crate::error::MalformedSymbolError;
use crate::model::{
    Accessibility, FieldSymbol, MethodSymbol, PropertySymbol, RawAssembly, RawTypeDefinition, Symbol, SymbolTables,
    TypeSymbol, identifier,
};
use crate::pages::{Documented, DocumentedType};

/// A symbol that could not be normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolFailure {
    /// `Namespace.Type` or `Namespace.Type.member` as written in the model.
    pub symbol: String,
    pub error: MalformedSymbolError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    pub include_protected: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            include_protected: true,
        }
    }
}

impl CollectOptions {
    fn admits(
        &self,
        access: Accessibility,
    ) -> bool {
        access.is_public() || (self.include_protected && access.is_family_like())
    }
}

#[derive(Debug, Default)]
pub struct Collection<'a> {
    pub types: Vec<DocumentedType<'a>>,
    pub failures: Vec<SymbolFailure>,
}

/// Normalize every exported type of `assembly` and its visible members.
pub fn collect<'a>(
    assembly: &RawAssembly,
    annotations: &'a dyn AnnotationSource,
    options: CollectOptions,
) -> Collection<'a> {
    let mut collection = Collection::default();

    for raw in &assembly.types {
        if !options.admits(raw.access) {
            debug!("Skipping non-exported type {}", qualified_raw_name(raw));
            continue;
        }

        let ty = match TypeSymbol::from_raw(raw) {
            Ok(ty) => ty,
            Err(error) => {
                record(&mut collection.failures, qualified_raw_name(raw), error);
                continue;
            },
        };

        let documented = collect_members(raw, ty, annotations, options, &mut collection.failures);
        collection.types.push(documented);
    }

    debug!(
        "Collected {} type(s) from {} with {} failure(s)",
        collection.types.len(),
        assembly.name,
        collection.failures.len()
    );
    collection
}

fn collect_members<'a>(
    raw: &RawTypeDefinition,
    ty: TypeSymbol,
    annotations: &'a dyn AnnotationSource,
    options: CollectOptions,
    failures: &mut Vec<SymbolFailure>,
) -> DocumentedType<'a> {
    let tables = SymbolTables::global();
    let owner_name = qualified_raw_name(raw);
    let declaring = ty.reference.clone();
    let mut documented = DocumentedType::new(ty, annotations);

    for ctor in raw.constructors.iter().filter(|c| options.admits(c.access) && !c.is_static) {
        match MethodSymbol::constructor_from_raw(ctor, &declaring) {
            Ok(symbol) => documented.constructors.push(Documented::new(symbol, Symbol::Constructor, annotations)),
            Err(error) => record(failures, format!("{owner_name}.#ctor"), error),
        }
    }

    for method in &raw.methods {
        if !options.admits(method.access) {
            continue;
        }
        // Accessors and event plumbing are special names; operators are too
        // but get pages of their own.
        if method.is_special_name && !tables.is_operator(identifier(&method.name)) {
            continue;
        }
        match MethodSymbol::from_raw(method, &declaring) {
            Ok(symbol) => documented.methods.push(Documented::new(symbol, Symbol::Method, annotations)),
            Err(error) => record(failures, format!("{owner_name}.{}", method.name), error),
        }
    }

    for property in &raw.properties {
        match PropertySymbol::from_raw(property, &declaring) {
            Ok(symbol) => {
                if symbol.reported_access().is_some_and(|access| options.admits(access)) {
                    documented.properties.push(Documented::new(symbol, Symbol::Property, annotations));
                }
            },
            Err(error) => record(failures, format!("{owner_name}.{}", property.name), error),
        }
    }

    for field in raw.fields.iter().filter(|f| options.admits(f.access) && !f.is_special_name) {
        match FieldSymbol::from_raw(field, &declaring) {
            Ok(symbol) => documented.fields.push(Documented::new(symbol, Symbol::Field, annotations)),
            Err(error) => record(failures, format!("{owner_name}.{}", field.name), error),
        }
    }

    documented
}

fn record(
    failures: &mut Vec<SymbolFailure>,
    symbol: String,
    error: MalformedSymbolError,
) {
    warn!("Skipping malformed symbol {symbol}: {error}");
    failures.push(SymbolFailure {
        symbol,
        error,
    });
}

fn qualified_raw_name(raw: &RawTypeDefinition) -> String {
    match raw.reference.namespace.as_deref().map(str::trim) {
        Some(namespace) if !namespace.is_empty() => format!("{namespace}.{}", raw.reference.name),
        _ => raw.reference.name.clone(),
    }
}
