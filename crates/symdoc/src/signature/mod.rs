//! Human-readable declaration signatures.
//!
//! Rendering is a pure function of the descriptor, the options and the
//! shared [`SymbolTables`]. Keyword derivation follows one fixed order:
//! accessibility, then `static`/`abstract`, then `override`/`virtual`.

mod literal;

pub use literal::format_literal;

use crate::model::{
    Accessibility, FieldSymbol, GenericParameter, MemberModifiers, MethodSymbol, Operator, ParameterPassing,
    ParameterSymbol, PropertySymbol, Symbol, SymbolTables, TypeCategory, TypeRef, TypeSymbol,
};

const BODY_INDENT: &str = "    ";

/// What a rendered signature includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignatureOptions {
    /// Accessibility and modifier keywords, return/property types.
    pub include_keywords: bool,
    /// Parameter names and default values, not just types.
    pub include_parameter_names: bool,
    /// Accessor block for properties.
    pub include_body: bool,
    /// Prefix top-level type names with their namespace.
    pub qualify_names: bool,
}

impl SignatureOptions {
    /// Heading form: `Add(int, int)`.
    pub const SHORT: SignatureOptions = SignatureOptions {
        include_keywords: false,
        include_parameter_names: false,
        include_body: false,
        qualify_names: false,
    };

    /// Declaration form used in code blocks.
    pub const FULL: SignatureOptions = SignatureOptions {
        include_keywords: true,
        include_parameter_names: true,
        include_body: true,
        qualify_names: false,
    };

    pub fn with_keywords(
        mut self,
        value: bool,
    ) -> Self {
        self.include_keywords = value;
        self
    }

    pub fn with_parameter_names(
        mut self,
        value: bool,
    ) -> Self {
        self.include_parameter_names = value;
        self
    }

    pub fn with_body(
        mut self,
        value: bool,
    ) -> Self {
        self.include_body = value;
        self
    }

    pub fn with_qualified_names(
        mut self,
        value: bool,
    ) -> Self {
        self.qualify_names = value;
        self
    }
}

/// Render a symbol's signature using the process-wide tables.
pub fn render_signature(
    symbol: &Symbol,
    options: SignatureOptions,
) -> String {
    SignatureRenderer::new(SymbolTables::global(), options).render(symbol)
}

pub struct SignatureRenderer<'t> {
    tables: &'t SymbolTables,
    options: SignatureOptions,
}

impl<'t> SignatureRenderer<'t> {
    pub fn new(
        tables: &'t SymbolTables,
        options: SignatureOptions,
    ) -> Self {
        Self {
            tables,
            options,
        }
    }

    pub fn render(
        &self,
        symbol: &Symbol,
    ) -> String {
        match symbol {
            Symbol::Type(ty) => self.type_declaration(ty),
            Symbol::Method(method) => self.method(method, false),
            Symbol::Constructor(ctor) => self.method(ctor, true),
            Symbol::Field(field) => self.field(field),
            Symbol::Property(property) => self.property(property),
            Symbol::Parameter(parameter) => self.parameter(parameter),
            Symbol::GenericParameter(generic) => generic.name.clone(),
        }
    }

    /// Display form of a type reference, e.g. `Dictionary<string, int>[,]`.
    pub fn type_name(
        &self,
        ty: &TypeRef,
    ) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty);
        out
    }

    /// Display name of a type definition with its generic parameters.
    pub fn definition_name(
        &self,
        ty: &TypeSymbol,
    ) -> String {
        let named = ty.named();
        if ty.generic_parameters.is_empty() {
            return self.type_name(&ty.reference);
        }
        let mut out = String::new();
        self.write_type_prefix(&mut out, named.declaring_type.as_deref(), named.namespace());
        out.push_str(&named.bare_name);
        write_generic_parameters(&mut out, &ty.generic_parameters);
        out
    }

    fn write_type(
        &self,
        out: &mut String,
        ty: &TypeRef,
    ) {
        match ty {
            TypeRef::Named(named) => {
                if named.declaring_type.is_none()
                    && !named.is_generic()
                    && let Some(alias) = self.tables.primitive_alias(named.namespace(), &named.bare_name)
                {
                    out.push_str(alias);
                    return;
                }
                self.write_type_prefix(out, named.declaring_type.as_deref(), named.namespace());
                out.push_str(&named.bare_name);
                if named.is_constructed() {
                    out.push('<');
                    for (i, argument) in named.generic_arguments.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.write_type(out, argument);
                    }
                    out.push('>');
                }
            },
            TypeRef::GenericParameter(generic) => out.push_str(&generic.name),
            TypeRef::Array {
                element,
                rank,
            } => {
                self.write_type(out, element);
                out.push('[');
                for _ in 1..*rank {
                    out.push(',');
                }
                out.push(']');
            },
            TypeRef::Pointer(element) => {
                self.write_type(out, element);
                out.push('*');
            },
            // `ref`/`out` come from the parameter, not the type.
            TypeRef::ByRef(element) => self.write_type(out, element),
        }
    }

    fn write_type_prefix(
        &self,
        out: &mut String,
        declaring: Option<&TypeRef>,
        namespace: &str,
    ) {
        if let Some(declaring) = declaring {
            self.write_type(out, declaring);
            out.push('.');
        } else if self.options.qualify_names && !namespace.is_empty() {
            out.push_str(namespace);
            out.push('.');
        }
    }

    fn type_declaration(
        &self,
        ty: &TypeSymbol,
    ) -> String {
        if !self.options.include_keywords {
            return self.definition_name(ty);
        }

        let mut out = String::new();
        push_access(&mut out, ty.access);

        if ty.category == TypeCategory::Delegate {
            out.push_str("delegate ");
            let invoke = ty.delegate_invoke.as_deref();
            match invoke.and_then(|m| m.return_type.as_ref()) {
                Some(ret) => self.write_type(&mut out, ret),
                None => out.push_str("void"),
            }
            out.push(' ');
            out.push_str(&ty.named().bare_name);
            write_generic_parameters(&mut out, &ty.generic_parameters);
            self.write_parameters(&mut out, '(', invoke.map(|m| m.parameters.as_slice()).unwrap_or(&[]), ')');
            out.push(';');
            return out;
        }

        if ty.category == TypeCategory::Class {
            if ty.is_static() {
                out.push_str("static ");
            } else if ty.is_sealed {
                out.push_str("sealed ");
            } else if ty.is_abstract {
                out.push_str("abstract ");
            }
        }

        out.push_str(ty.category.keyword());
        out.push(' ');
        out.push_str(&ty.named().bare_name);
        write_generic_parameters(&mut out, &ty.generic_parameters);

        if ty.category != TypeCategory::Enum {
            let base = ty.base_types.first().filter(|base| !is_object(base));
            let supertypes: Vec<String> = base.into_iter().chain(ty.interfaces.iter()).map(|t| self.type_name(t)).collect();
            if !supertypes.is_empty() {
                out.push_str(" : ");
                out.push_str(&supertypes.join(", "));
            }
        }

        out
    }

    fn method(
        &self,
        method: &MethodSymbol,
        constructor: bool,
    ) -> String {
        let mut out = String::new();

        if self.options.include_keywords {
            push_access(&mut out, method.access);
            push_modifiers(&mut out, method.modifiers, method.is_override());
            if !constructor && !method.is_conversion() {
                match &method.return_type {
                    Some(ret) => self.write_type(&mut out, ret),
                    None => out.push_str("void"),
                }
                out.push(' ');
            }
        }

        if constructor {
            match method.declaring_type.innermost() {
                TypeRef::Named(named) => out.push_str(&named.bare_name),
                other => self.write_type(&mut out, other),
            }
        } else {
            self.write_method_name(&mut out, method);
        }

        write_generic_parameters(&mut out, &method.generic_parameters);
        self.write_parameters(&mut out, '(', &method.parameters, ')');
        out
    }

    fn write_method_name(
        &self,
        out: &mut String,
        method: &MethodSymbol,
    ) {
        match method.operator {
            Some(Operator::Implicit) => {
                out.push_str("implicit operator ");
                self.write_return_type(out, method);
            },
            Some(Operator::Explicit) => {
                out.push_str("explicit operator ");
                self.write_return_type(out, method);
            },
            Some(Operator::Symbolic(symbol)) => {
                out.push_str("operator ");
                out.push_str(symbol);
            },
            None => out.push_str(&method.name),
        }
    }

    fn write_return_type(
        &self,
        out: &mut String,
        method: &MethodSymbol,
    ) {
        match &method.return_type {
            Some(ret) => self.write_type(out, ret),
            None => out.push_str("void"),
        }
    }

    fn property(
        &self,
        property: &PropertySymbol,
    ) -> String {
        let mut out = String::new();
        let reported = property.reported_access();

        if self.options.include_keywords {
            if let Some(access) = reported {
                push_access(&mut out, access);
            }
            let modifiers = MemberModifiers {
                is_static: property.is_static(),
                is_abstract: property.is_abstract(),
                is_virtual: property.is_virtual(),
            };
            push_modifiers(&mut out, modifiers, property.is_override());
            self.write_type(&mut out, &property.ty);
            out.push(' ');
        }

        if property.is_indexer() {
            out.push_str("this");
            self.write_parameters(&mut out, '[', &property.index_parameters, ']');
        } else {
            out.push_str(&property.name);
        }

        if self.options.include_body {
            out.push_str("\n{\n");
            if let Some(getter) = &property.getter {
                write_accessor(&mut out, "get", getter.access, reported);
            }
            if let Some(setter) = &property.setter {
                write_accessor(&mut out, "set", setter.access, reported);
            }
            out.push('}');
        }

        out
    }

    fn field(
        &self,
        field: &FieldSymbol,
    ) -> String {
        if !self.options.include_keywords {
            return field.name.clone();
        }

        let mut out = String::new();
        push_access(&mut out, field.access);
        if field.is_const {
            out.push_str("const ");
        } else {
            if field.is_static {
                out.push_str("static ");
            }
            if field.is_read_only {
                out.push_str("readonly ");
            }
        }
        self.write_type(&mut out, &field.ty);
        out.push(' ');
        out.push_str(&field.name);
        if field.is_const
            && let Some(value) = &field.constant_value
        {
            out.push_str(" = ");
            out.push_str(&format_literal(value));
        }
        out.push(';');
        out
    }

    fn parameter(
        &self,
        parameter: &ParameterSymbol,
    ) -> String {
        let mut out = String::new();
        self.write_parameter(&mut out, parameter);
        out
    }

    fn write_parameters(
        &self,
        out: &mut String,
        open: char,
        parameters: &[ParameterSymbol],
        close: char,
    ) {
        out.push(open);
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_parameter(out, parameter);
        }
        out.push(close);
    }

    fn write_parameter(
        &self,
        out: &mut String,
        parameter: &ParameterSymbol,
    ) {
        match parameter.passing {
            ParameterPassing::Out => out.push_str("out "),
            ParameterPassing::Ref => out.push_str("ref "),
            ParameterPassing::Params => out.push_str("params "),
            ParameterPassing::Value => {},
        }
        self.write_type(out, &parameter.ty);

        if self.options.include_parameter_names {
            out.push(' ');
            out.push_str(&parameter.name);
            if let Some(value) = &parameter.default_value {
                out.push_str(" = ");
                out.push_str(&format_literal(value));
            }
        }
    }
}

fn push_access(
    out: &mut String,
    access: Accessibility,
) {
    if access.is_public() {
        out.push_str("public ");
    } else if access.is_family_like() {
        out.push_str("protected ");
    }
}

fn push_modifiers(
    out: &mut String,
    modifiers: MemberModifiers,
    is_override: bool,
) {
    if modifiers.is_static {
        out.push_str("static ");
    } else if modifiers.is_abstract {
        out.push_str("abstract ");
    }

    if is_override {
        out.push_str("override ");
    } else if modifiers.is_virtual {
        out.push_str("virtual ");
    }
}

fn write_accessor(
    out: &mut String,
    keyword: &str,
    access: Accessibility,
    reported: Option<Accessibility>,
) {
    out.push_str(BODY_INDENT);
    let same_level = match reported {
        Some(Accessibility::Public) => access.is_public(),
        Some(Accessibility::Protected) => access.is_family_like(),
        Some(other) => other == access,
        None => true,
    };
    if !same_level {
        out.push_str(access.keyword());
        out.push(' ');
    }
    out.push_str(keyword);
    out.push_str(";\n");
}

fn write_generic_parameters(
    out: &mut String,
    parameters: &[GenericParameter],
) {
    if parameters.is_empty() {
        return;
    }
    out.push('<');
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&parameter.name);
    }
    out.push('>');
}

fn is_object(ty: &TypeRef) -> bool {
    matches!(ty, TypeRef::Named(named) if named.namespace() == "System" && named.bare_name == "Object")
}

#[cfg(test)]
#[path = "../../tests/src/signature/signature_tests.rs"]
mod tests;
