use crate::model::{TypeCategory, TypeRef, TypeSymbol, identifier};
use crate::signature::SignatureRenderer;

/// `Foo<T> Class`, optionally followed by ` (Namespace)`.
pub fn type_title(
    renderer: &SignatureRenderer<'_>,
    ty: &TypeSymbol,
    include_namespace: bool,
) -> String {
    let mut title = format!("{} {}", renderer.definition_name(ty), ty.category.title());
    if include_namespace && !ty.namespace().is_empty() {
        title.push_str(&format!(" ({})", ty.namespace()));
    }
    title
}

/// File-name form of a type: `Foo-2` for a type with two generic parameters.
/// Nested types are prefixed with their declaring types.
pub fn url_title(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(named) => {
            let mut title = match named.declaring_type.as_deref() {
                Some(declaring) => format!("{}.", url_title(declaring)),
                None => String::new(),
            };
            title.push_str(identifier(&named.bare_name));
            let arity = named.arity.max(named.generic_arguments.len() as u32);
            if arity > 0 {
                title.push_str(&format!("-{arity}"));
            }
            title
        },
        other => other.innermost().as_named().map(|n| identifier(&n.bare_name).to_string()).unwrap_or_default(),
    }
}

/// Path of a type's page relative to the tree root: `N/Sub/Foo-2`.
pub fn type_path(ty: &TypeSymbol) -> String {
    let url = url_title(&ty.reference);
    if ty.namespace().is_empty() {
        url
    } else {
        format!("{}/{url}", ty.namespace().replace('.', "/"))
    }
}

/// `Object → Base → Foo`; empty for interfaces and `System.Object` itself.
pub fn inheritance_line(
    renderer: &SignatureRenderer<'_>,
    ty: &TypeSymbol,
) -> String {
    if ty.category == TypeCategory::Interface || (ty.namespace() == "System" && ty.name() == "Object") {
        return String::new();
    }

    let mut chain = vec!["Object".to_string()];
    chain.extend(
        ty.base_types
            .iter()
            .rev()
            .filter(|base| !matches!(base, TypeRef::Named(named) if named.namespace() == "System" && named.bare_name == "Object"))
            .map(|base| renderer.type_name(base)),
    );
    chain.push(renderer.definition_name(ty));
    chain.join(" \u{2192} ")
}
