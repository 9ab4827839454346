//! Single-file output: every type on one Markdown page.

use std::io;

use super::{CODE_LANG, DocumentedType, render_field, render_method, render_property, type_title, write_deprecation};
use crate::markdown::{DocWriter, escape, link};
use crate::model::{SymbolTables, anchor};
use crate::signature::{SignatureOptions, SignatureRenderer};

/// Types in slim order: by name, skipping names that start with `_`.
pub fn slim_order<'t, 'a>(types: &'t [DocumentedType<'a>]) -> Vec<&'t DocumentedType<'a>> {
    let mut ordered: Vec<_> = types.iter().filter(|t| !t.symbol().name().starts_with('_')).collect();
    ordered.sort_by(|a, b| a.symbol().name().cmp(b.symbol().name()).then_with(|| a.path.cmp(&b.path)));
    ordered
}

pub fn render_slim(
    title: &str,
    types: &[DocumentedType<'_>],
    writer: &mut dyn DocWriter,
) -> io::Result<()> {
    let renderer = SignatureRenderer::new(SymbolTables::global(), SignatureOptions::SHORT);
    let ordered = slim_order(types);
    let headings: Vec<String> = ordered.iter().map(|t| type_title(&renderer, t.symbol(), true)).collect();

    writer.header(1, title, true)?;
    writer.header(2, "Contents", false)?;
    for heading in &headings {
        writer.line(&format!("- {}", link(&escape(heading), &format!("#{}", anchor(heading)))))?;
    }
    writer.blank_line()?;

    for (ty, heading) in ordered.iter().zip(&headings) {
        render_slim_type(ty, heading, writer)?;
    }
    Ok(())
}

fn render_slim_type(
    owner: &DocumentedType<'_>,
    heading: &str,
    writer: &mut dyn DocWriter,
) -> io::Result<()> {
    let ty = owner.symbol();
    writer.header(2, heading, true)?;
    write_deprecation(ty.deprecated.as_deref(), writer)?;
    if !ty.namespace().is_empty() {
        writer.paragraph(&format!("**Namespace:** {}", ty.namespace()), false)?;
    }
    if !owner.inheritance.is_empty() {
        writer.paragraph(&format!("**Inheritance:** {}", owner.inheritance), true)?;
    }
    writer.paragraph(owner.ty.summary(), false)?;
    writer.code_block(CODE_LANG, &owner.ty.signature)?;

    if !owner.constructors.is_empty() {
        writer.header(3, "Constructors", false)?;
        for ctor in &owner.constructors {
            render_method(ctor, 4, writer)?;
        }
    }

    let mut properties: Vec<_> = owner.plain_properties().collect();
    properties.sort_by(|a, b| a.symbol.name.cmp(&b.symbol.name));
    if !properties.is_empty() {
        writer.header(3, "Properties", false)?;
        for property in properties {
            writer.header(4, &property.heading, true)?;
            render_property(property, 5, writer)?;
        }
    }

    let mut indexers: Vec<_> = owner.indexers().collect();
    indexers.sort_by_key(|p| p.symbol.index_parameters.len());
    if !indexers.is_empty() {
        writer.header(3, "Indexers", false)?;
        for indexer in indexers {
            writer.header(4, &indexer.heading, true)?;
            render_property(indexer, 5, writer)?;
        }
    }

    let mut fields: Vec<_> = owner.fields.iter().collect();
    fields.sort_by(|a, b| a.symbol.name.cmp(&b.symbol.name));
    if !fields.is_empty() {
        writer.header(3, "Fields", false)?;
        for field in fields {
            writer.header(4, &field.heading, true)?;
            render_field(field, 5, writer)?;
        }
    }

    let groups = owner.method_groups();
    if !groups.is_empty() {
        writer.header(3, "Methods", false)?;
        for method in groups.values().flatten() {
            render_method(method, 4, writer)?;
        }
    }

    Ok(())
}
