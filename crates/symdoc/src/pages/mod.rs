//! Page payloads and their Markdown rendering.
//!
//! A [`Page`] is what the generator stores in the path tree: a borrowed view
//! of one documented type plus which part of it the page covers. Rendering
//! only reads descriptors and annotations, so pages render independently.

pub mod slim;
mod titles;

use std::collections::BTreeMap;
use std::io;

use crate::annotations::{AnnotationRecord, AnnotationSource, NO_DESCRIPTION};
use crate::identity::encode_identity;
use crate::markdown::{DocWriter, link};
use crate::model::{
    FieldSymbol, GenericParameter, MethodSymbol, Operator, ParameterSymbol, PropertySymbol, Symbol, SymbolTables,
    TypeCategory, TypeSymbol,
};
use crate::signature::{SignatureOptions, SignatureRenderer};

pub use titles::{inheritance_line, type_path, type_title, url_title};

pub(crate) const CODE_LANG: &str = "csharp";

/// A symbol with its identity, rendered signatures and annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Documented<'a, S> {
    pub symbol: S,
    pub id: String,
    /// Short form used in headings and link text.
    pub heading: String,
    /// Declaration form used in code blocks.
    pub signature: String,
    pub annotation: Option<&'a AnnotationRecord>,
}

impl<'a, S: Clone> Documented<'a, S> {
    pub fn new(
        symbol: S,
        wrap: fn(S) -> Symbol,
        annotations: &'a dyn AnnotationSource,
    ) -> Self {
        let wrapped = wrap(symbol.clone());
        let tables = SymbolTables::global();
        let id = encode_identity(&wrapped);
        let heading = SignatureRenderer::new(tables, SignatureOptions::SHORT).render(&wrapped);
        let signature = SignatureRenderer::new(tables, SignatureOptions::FULL).render(&wrapped);
        let annotation = annotations.annotation_for(&id);
        Self {
            symbol,
            id,
            heading,
            signature,
            annotation,
        }
    }
}

impl<S> Documented<'_, S> {
    pub fn summary(&self) -> &str {
        self.annotation.map(AnnotationRecord::summary_or_placeholder).unwrap_or(NO_DESCRIPTION)
    }

    pub fn returns(&self) -> Option<&str> {
        self.annotation.and_then(AnnotationRecord::returns)
    }

    pub fn remarks(&self) -> Option<&str> {
        self.annotation.and_then(AnnotationRecord::remarks)
    }

    pub fn parameter_description(
        &self,
        name: &str,
    ) -> &str {
        self.annotation.map(|a| a.parameter(name)).unwrap_or(NO_DESCRIPTION)
    }

    pub fn type_parameter_description(
        &self,
        name: &str,
    ) -> &str {
        self.annotation.map(|a| a.type_parameter(name)).unwrap_or(NO_DESCRIPTION)
    }
}

/// A type together with its documented members.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentedType<'a> {
    pub ty: Documented<'a, TypeSymbol>,
    /// `Foo<T> Class`.
    pub title: String,
    pub url_title: String,
    pub path: String,
    pub inheritance: String,
    pub constructors: Vec<Documented<'a, MethodSymbol>>,
    pub methods: Vec<Documented<'a, MethodSymbol>>,
    pub properties: Vec<Documented<'a, PropertySymbol>>,
    pub fields: Vec<Documented<'a, FieldSymbol>>,
}

impl<'a> DocumentedType<'a> {
    pub fn new(
        ty: TypeSymbol,
        annotations: &'a dyn AnnotationSource,
    ) -> Self {
        let renderer = SignatureRenderer::new(SymbolTables::global(), SignatureOptions::SHORT);
        Self {
            title: type_title(&renderer, &ty, false),
            url_title: url_title(&ty.reference),
            path: type_path(&ty),
            inheritance: inheritance_line(&renderer, &ty),
            ty: Documented::new(ty, Symbol::Type, annotations),
            constructors: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &TypeSymbol {
        &self.ty.symbol
    }

    /// `Foo<T>`, the display name used in member page titles.
    pub fn display_name(&self) -> &str {
        &self.ty.heading
    }

    /// Methods grouped by name, each group ordered by parameter count.
    pub fn method_groups(&self) -> BTreeMap<&str, Vec<&Documented<'a, MethodSymbol>>> {
        let mut groups: BTreeMap<&str, Vec<&Documented<'a, MethodSymbol>>> = BTreeMap::new();
        for method in &self.methods {
            groups.entry(method.symbol.name.as_str()).or_default().push(method);
        }
        for overloads in groups.values_mut() {
            overloads.sort_by_key(|m| m.symbol.parameters.len());
        }
        groups
    }

    pub fn plain_properties(&self) -> impl Iterator<Item = &Documented<'a, PropertySymbol>> {
        self.properties.iter().filter(|p| !p.symbol.is_indexer())
    }

    /// Indexers in declaration order; page numbers are 1-based positions here.
    pub fn indexers(&self) -> impl Iterator<Item = &Documented<'a, PropertySymbol>> {
        self.properties.iter().filter(|p| p.symbol.is_indexer())
    }
}

/// Rendering switches that do not affect page placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageOptions {
    /// Visually separate overloads on constructor and method group pages.
    pub method_group_spacing: bool,
}

/// One output document.
#[derive(Debug, Clone, Copy)]
pub enum Page<'a> {
    Type(&'a DocumentedType<'a>),
    Constructors(&'a DocumentedType<'a>),
    MethodGroup {
        owner: &'a DocumentedType<'a>,
        name: &'a str,
    },
    Property {
        owner: &'a DocumentedType<'a>,
        property: &'a Documented<'a, PropertySymbol>,
    },
    Field {
        owner: &'a DocumentedType<'a>,
        field: &'a Documented<'a, FieldSymbol>,
    },
}

impl Page<'_> {
    pub fn title(&self) -> String {
        match self {
            Page::Type(owner) => owner.title.clone(),
            Page::Constructors(owner) => format!("{} constructors", owner.display_name()),
            Page::MethodGroup {
                owner,
                name,
            } => format!("{}.{} method", owner.display_name(), group_display_name(owner, name)),
            Page::Property {
                owner,
                property,
            } if property.symbol.is_indexer() => format!("{} indexer", owner.display_name()),
            Page::Property {
                owner,
                property,
            } => format!("{}.{} property", owner.display_name(), property.symbol.name),
            Page::Field {
                owner,
                field,
            } => format!("{}.{} field", owner.display_name(), field.symbol.name),
        }
    }

    pub fn render(
        &self,
        writer: &mut dyn DocWriter,
        options: PageOptions,
    ) -> io::Result<()> {
        writer.header(1, &self.title(), true)?;
        match *self {
            Page::Type(owner) => render_type(owner, writer),
            Page::Constructors(owner) => {
                for (index, ctor) in owner.constructors.iter().enumerate() {
                    if options.method_group_spacing && index > 0 {
                        write_spacer(writer)?;
                    }
                    render_method(ctor, 2, writer)?;
                }
                Ok(())
            },
            Page::MethodGroup {
                owner,
                name,
            } => {
                let groups = owner.method_groups();
                let overloads = groups.get(name).map(Vec::as_slice).unwrap_or(&[]);
                for (index, method) in overloads.iter().enumerate() {
                    if options.method_group_spacing && index > 0 {
                        write_spacer(writer)?;
                    }
                    render_method(method, 2, writer)?;
                }
                Ok(())
            },
            Page::Property {
                property, ..
            } => render_property(property, 2, writer),
            Page::Field {
                field, ..
            } => render_field(field, 2, writer),
        }
    }
}

/// Heading text for a method group: operators show their symbol.
fn group_display_name(
    owner: &DocumentedType<'_>,
    name: &str,
) -> String {
    let operator = owner.methods.iter().find(|m| m.symbol.name == name).and_then(|m| m.symbol.operator);
    match operator {
        Some(Operator::Implicit) => "implicit operator".to_string(),
        Some(Operator::Explicit) => "explicit operator".to_string(),
        Some(Operator::Symbolic(symbol)) => format!("operator {symbol}"),
        None => name.to_string(),
    }
}

fn write_spacer(writer: &mut dyn DocWriter) -> io::Result<()> {
    writer.blank_line()?;
    writer.line("<p>&nbsp;</p>")?;
    writer.line("<p>&nbsp;</p>")?;
    writer.line("<hr/>")?;
    writer.blank_line()
}

pub(crate) fn write_deprecation(
    deprecated: Option<&str>,
    writer: &mut dyn DocWriter,
) -> io::Result<()> {
    let Some(message) = deprecated else {
        return Ok(());
    };
    let message = message.trim();
    if message.is_empty() {
        writer.info_box("warning", "**This item is deprecated.**")
    } else {
        writer.info_box("warning", &format!("**This item is deprecated.**\n{message}"))
    }
}

fn write_type_parameters<S>(
    documented: &Documented<'_, S>,
    parameters: &[GenericParameter],
    level: usize,
    writer: &mut dyn DocWriter,
) -> io::Result<()> {
    if parameters.is_empty() {
        return Ok(());
    }
    writer.header(level, "Type Parameters", false)?;
    for parameter in parameters {
        writer.line(&format!(
            "- `{}`: {}",
            parameter.name,
            documented.type_parameter_description(&parameter.name)
        ))?;
    }
    writer.blank_line()
}

fn write_parameters<S>(
    documented: &Documented<'_, S>,
    parameters: &[ParameterSymbol],
    level: usize,
    writer: &mut dyn DocWriter,
) -> io::Result<()> {
    if parameters.is_empty() {
        return Ok(());
    }
    writer.header(level, "Parameters", false)?;
    for parameter in parameters {
        writer.line(&format!("- `{}`: {}", parameter.name, documented.parameter_description(&parameter.name)))?;
    }
    writer.blank_line()
}

fn write_returns_and_remarks<S>(
    documented: &Documented<'_, S>,
    level: usize,
    writer: &mut dyn DocWriter,
) -> io::Result<()> {
    if let Some(returns) = documented.returns() {
        writer.header(level, "Returns", false)?;
        writer.paragraph(returns, false)?;
    }
    if let Some(remarks) = documented.remarks() {
        writer.header(level, "Remarks", false)?;
        writer.paragraph(remarks, false)?;
    }
    Ok(())
}

/// Heading, summary, signature and detail sections of one method or constructor.
pub(crate) fn render_method(
    method: &Documented<'_, MethodSymbol>,
    level: usize,
    writer: &mut dyn DocWriter,
) -> io::Result<()> {
    writer.header(level, &method.heading, true)?;
    write_deprecation(method.symbol.deprecated.as_deref(), writer)?;
    writer.paragraph(method.summary(), false)?;
    writer.header(level + 1, "Signature", false)?;
    writer.code_block(CODE_LANG, &method.signature)?;
    write_type_parameters(method, &method.symbol.generic_parameters, level + 1, writer)?;
    write_parameters(method, &method.symbol.parameters, level + 1, writer)?;
    write_returns_and_remarks(method, level + 1, writer)
}

pub(crate) fn render_property(
    property: &Documented<'_, PropertySymbol>,
    level: usize,
    writer: &mut dyn DocWriter,
) -> io::Result<()> {
    write_deprecation(property.symbol.deprecated.as_deref(), writer)?;
    writer.paragraph(property.summary(), false)?;
    writer.header(level, "Signature", false)?;
    writer.code_block(CODE_LANG, &property.signature)?;
    write_parameters(property, &property.symbol.index_parameters, level, writer)?;
    write_returns_and_remarks(property, level, writer)
}

pub(crate) fn render_field(
    field: &Documented<'_, FieldSymbol>,
    level: usize,
    writer: &mut dyn DocWriter,
) -> io::Result<()> {
    write_deprecation(field.symbol.deprecated.as_deref(), writer)?;
    writer.paragraph(field.summary(), false)?;
    writer.header(level, "Signature", false)?;
    writer.code_block(CODE_LANG, &field.signature)?;
    write_returns_and_remarks(field, level, writer)
}

fn render_type(
    owner: &DocumentedType<'_>,
    writer: &mut dyn DocWriter,
) -> io::Result<()> {
    let ty = owner.symbol();
    let base = &owner.url_title;

    write_deprecation(ty.deprecated.as_deref(), writer)?;
    if !ty.namespace().is_empty() {
        writer.paragraph(&format!("**Namespace:** {}", ty.namespace()), false)?;
    }
    if !owner.inheritance.is_empty() {
        writer.paragraph(&format!("**Inheritance:** {}", owner.inheritance), true)?;
    }
    writer.paragraph(owner.ty.summary(), false)?;
    writer.header(2, "Signature", false)?;
    writer.code_block(CODE_LANG, &owner.ty.signature)?;
    write_type_parameters(&owner.ty, &ty.generic_parameters, 2, writer)?;
    if ty.category == TypeCategory::Delegate
        && let Some(invoke) = ty.delegate_invoke.as_deref()
    {
        write_parameters(&owner.ty, &invoke.parameters, 2, writer)?;
    }
    write_returns_and_remarks(&owner.ty, 2, writer)?;

    if !owner.constructors.is_empty() {
        writer.header(2, "Constructors", false)?;
        writer.line(&format!("- {}", link(&format!("{} constructors", ty.name()), &format!("{base}/ctors.md"))))?;
        writer.blank_line()?;
    }

    let groups = owner.method_groups();
    let mut methods = Vec::new();
    let mut operators = Vec::new();
    let mut conversions = Vec::new();
    for (name, overloads) in &groups {
        let first = overloads[0];
        let href = format!("{base}/{name}.md");
        match first.symbol.operator {
            Some(Operator::Implicit | Operator::Explicit) => {
                for conversion in overloads {
                    conversions.push(format!("- {}", link(&markdown_safe(&conversion.heading), &href)));
                }
            },
            Some(Operator::Symbolic(_)) => {
                operators.push(format!("- {}", link(&markdown_safe(&group_display_name(owner, name)), &href)));
            },
            None => {
                let mut line = format!("- {}", link(name, &href));
                if overloads.iter().all(|m| m.symbol.modifiers.is_static) {
                    line.push_str(" (static)");
                }
                methods.push(line);
            },
        }
    }
    write_link_section("Methods", &methods, writer)?;

    let mut properties: Vec<_> = owner.plain_properties().collect();
    properties.sort_by(|a, b| a.symbol.name.cmp(&b.symbol.name));
    let properties: Vec<String> = properties
        .iter()
        .map(|p| {
            let mut line = format!("- {}", link(&p.symbol.name, &format!("{base}/{}.md", p.symbol.name)));
            if p.symbol.is_static() {
                line.push_str(" (static)");
            }
            line
        })
        .collect();
    write_link_section("Properties", &properties, writer)?;

    let indexers: Vec<String> = owner
        .indexers()
        .enumerate()
        .map(|(i, p)| format!("- {}", link(&markdown_safe(&p.heading), &format!("{base}/this/{}.md", i + 1))))
        .collect();
    write_link_section("Indexers", &indexers, writer)?;

    let mut fields: Vec<_> = owner.fields.iter().collect();
    fields.sort_by(|a, b| a.symbol.name.cmp(&b.symbol.name));
    let fields: Vec<String> = fields
        .iter()
        .map(|f| {
            let mut line = format!("- {}", link(&f.symbol.name, &format!("{base}/{}.md", f.symbol.name)));
            if f.symbol.is_static && !f.symbol.is_const {
                line.push_str(" (static)");
            }
            line
        })
        .collect();
    write_link_section("Fields", &fields, writer)?;

    write_link_section("Operators", &operators, writer)?;
    write_link_section("Conversions", &conversions, writer)
}

fn write_link_section(
    header: &str,
    lines: &[String],
    writer: &mut dyn DocWriter,
) -> io::Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    writer.header(2, header, false)?;
    for line in lines {
        writer.line(line)?;
    }
    writer.blank_line()
}

/// Brackets in link text would end the link early.
fn markdown_safe(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]").replace('<', "\\<").replace('>', "\\>")
}

#[cfg(test)]
#[path = "../../tests/src/pages/pages_tests.rs"]
mod tests;
