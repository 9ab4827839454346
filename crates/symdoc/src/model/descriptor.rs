use serde::Deserialize;

/// Closed set of documentable symbol kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Type,
    Method,
    Constructor,
    Field,
    Property,
    Parameter,
    GenericParameter,
}

impl SymbolKind {
    /// Kind prefix of a canonical identity; empty for kinds that only appear
    /// as fragments inside another identity.
    pub fn id_prefix(self) -> &'static str {
        match self {
            SymbolKind::Type => "T:",
            SymbolKind::Method | SymbolKind::Constructor => "M:",
            SymbolKind::Field => "F:",
            SymbolKind::Property => "P:",
            SymbolKind::Parameter | SymbolKind::GenericParameter => "",
        }
    }
}

/// A normalized program symbol.
///
/// Descriptors are built once from raw records and never mutated. They only
/// point at already-built descriptors (declaring types, generic arguments),
/// so ownership is strictly tree-shaped.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Type(TypeSymbol),
    Method(MethodSymbol),
    Constructor(MethodSymbol),
    Field(FieldSymbol),
    Property(PropertySymbol),
    Parameter(ParameterSymbol),
    GenericParameter(GenericParameter),
}

impl Symbol {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Type(_) => SymbolKind::Type,
            Symbol::Method(_) => SymbolKind::Method,
            Symbol::Constructor(_) => SymbolKind::Constructor,
            Symbol::Field(_) => SymbolKind::Field,
            Symbol::Property(_) => SymbolKind::Property,
            Symbol::Parameter(_) => SymbolKind::Parameter,
            Symbol::GenericParameter(_) => SymbolKind::GenericParameter,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Symbol::Type(ty) => ty.name(),
            Symbol::Method(m) | Symbol::Constructor(m) => &m.name,
            Symbol::Field(f) => &f.name,
            Symbol::Property(p) => &p.name,
            Symbol::Parameter(p) => &p.name,
            Symbol::GenericParameter(g) => &g.name,
        }
    }
}

/// A reference to a type, with its outermost modifier made explicit.
///
/// Array, pointer and by-ref wrap exactly one element descriptor, so a
/// reference like `int*[]` is `Array(Pointer(Named(Int32)))`.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Named(NamedType),
    GenericParameter(GenericParameter),
    Array {
        element: Box<TypeRef>,
        rank: u32,
    },
    Pointer(Box<TypeRef>),
    ByRef(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(
        namespace: &str,
        bare_name: &str,
    ) -> Self {
        TypeRef::Named(NamedType {
            namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
            bare_name: bare_name.to_string(),
            arity: 0,
            generic_arguments: Vec::new(),
            declaring_type: None,
        })
    }

    pub fn generic_parameter(
        name: &str,
        position: u32,
    ) -> Self {
        TypeRef::GenericParameter(GenericParameter {
            name: name.to_string(),
            position,
        })
    }

    pub fn array_of(
        element: TypeRef,
        rank: u32,
    ) -> Self {
        TypeRef::Array {
            element: Box::new(element),
            rank,
        }
    }

    pub fn pointer_to(element: TypeRef) -> Self {
        TypeRef::Pointer(Box::new(element))
    }

    pub fn by_ref(element: TypeRef) -> Self {
        TypeRef::ByRef(Box::new(element))
    }

    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            TypeRef::Named(named) => Some(named),
            _ => None,
        }
    }

    /// Whether this reference is itself a generic type (constructed or not).
    ///
    /// Arrays, pointers and references to generic types are not.
    pub fn is_generic_type(&self) -> bool {
        matches!(self, TypeRef::Named(named) if named.is_generic())
    }

    /// The innermost element type after stripping array/pointer/by-ref.
    pub fn innermost(&self) -> &TypeRef {
        match self {
            TypeRef::Array {
                element,
                ..
            }
            | TypeRef::Pointer(element)
            | TypeRef::ByRef(element) => element.innermost(),
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedType {
    pub namespace: Option<String>,
    /// Name without any generic arity marker.
    pub bare_name: String,
    /// Arity taken from the stripped `` `N `` marker, 0 if there was none.
    pub arity: u32,
    /// Bound arguments of a constructed generic type, empty otherwise.
    pub generic_arguments: Vec<TypeRef>,
    pub declaring_type: Option<Box<TypeRef>>,
}

impl NamedType {
    pub fn is_generic(&self) -> bool {
        self.arity > 0 || !self.generic_arguments.is_empty()
    }

    pub fn is_constructed(&self) -> bool {
        !self.generic_arguments.is_empty()
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenericParameter {
    pub name: String,
    pub position: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeCategory {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

impl TypeCategory {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeCategory::Class => "class",
            TypeCategory::Struct => "struct",
            TypeCategory::Interface => "interface",
            TypeCategory::Enum => "enum",
            TypeCategory::Delegate => "delegate",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TypeCategory::Class => "Class",
            TypeCategory::Struct => "Struct",
            TypeCategory::Interface => "Interface",
            TypeCategory::Enum => "Enum",
            TypeCategory::Delegate => "Delegate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accessibility {
    #[default]
    Public,
    Protected,
    ProtectedInternal,
    Internal,
    PrivateProtected,
    Private,
}

impl Accessibility {
    pub fn is_public(self) -> bool {
        matches!(self, Accessibility::Public)
    }

    /// Family access: visible to derived types outside the assembly.
    pub fn is_family_like(self) -> bool {
        matches!(self, Accessibility::Protected | Accessibility::ProtectedInternal)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Protected => "protected",
            Accessibility::ProtectedInternal => "protected internal",
            Accessibility::Internal => "internal",
            Accessibility::PrivateProtected => "private protected",
            Accessibility::Private => "private",
        }
    }
}

/// A type definition being documented.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSymbol {
    /// Always [`TypeRef::Named`]; only [`TypeSymbol::from_raw`] sets it.
    pub(crate) reference: TypeRef,
    pub category: TypeCategory,
    pub access: Accessibility,
    pub is_sealed: bool,
    pub is_abstract: bool,
    pub base_types: Vec<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub generic_parameters: Vec<GenericParameter>,
    pub delegate_invoke: Option<Box<MethodSymbol>>,
    pub deprecated: Option<String>,
}

impl TypeSymbol {
    pub fn reference(&self) -> &TypeRef {
        &self.reference
    }

    pub fn named(&self) -> &NamedType {
        match &self.reference {
            TypeRef::Named(named) => named,
            _ => unreachable!("type definitions are always named"),
        }
    }

    pub fn name(&self) -> &str {
        &self.named().bare_name
    }

    pub fn namespace(&self) -> &str {
        self.named().namespace()
    }

    pub fn is_static(&self) -> bool {
        self.is_sealed && self.is_abstract
    }
}

/// Static/abstract/virtual flags shared by members and accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberModifiers {
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_virtual: bool,
}

/// Operator recognized from a symbolic method name such as `op_Addition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Implicit,
    Explicit,
    Symbolic(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodSymbol {
    pub declaring_type: TypeRef,
    /// Raw method name with any arity marker stripped (`op_Addition`, `Add`).
    pub name: String,
    pub access: Accessibility,
    pub modifiers: MemberModifiers,
    /// Type that introduced the slot this method fills, when known.
    pub introducing_type: Option<TypeRef>,
    pub generic_parameters: Vec<GenericParameter>,
    pub parameters: Vec<ParameterSymbol>,
    /// `None` for constructors and `void` methods.
    pub return_type: Option<TypeRef>,
    pub operator: Option<Operator>,
    pub deprecated: Option<String>,
}

impl MethodSymbol {
    pub fn is_generic(&self) -> bool {
        !self.generic_parameters.is_empty()
    }

    pub fn is_override(&self) -> bool {
        self.introducing_type
            .as_ref()
            .is_some_and(|introducing| introducing != &self.declaring_type)
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self.operator, Some(Operator::Implicit | Operator::Explicit))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterPassing {
    Value,
    Ref,
    Out,
    Params,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSymbol {
    pub name: String,
    pub ty: TypeRef,
    pub passing: ParameterPassing,
    pub default_value: Option<Literal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessor {
    pub access: Accessibility,
    pub modifiers: MemberModifiers,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySymbol {
    pub declaring_type: TypeRef,
    pub name: String,
    pub ty: TypeRef,
    pub getter: Option<Accessor>,
    pub setter: Option<Accessor>,
    /// Non-empty only for indexers.
    pub index_parameters: Vec<ParameterSymbol>,
    pub introducing_type: Option<TypeRef>,
    pub deprecated: Option<String>,
}

impl PropertySymbol {
    pub fn is_indexer(&self) -> bool {
        !self.index_parameters.is_empty()
    }

    pub fn accessors(&self) -> impl Iterator<Item = &Accessor> {
        self.getter.iter().chain(self.setter.iter())
    }

    /// Public if any accessor is public.
    pub fn has_public_accessor(&self) -> bool {
        self.accessors().any(|a| a.access.is_public())
    }

    /// Protected if no accessor is public but one is family-like.
    pub fn is_protected(&self) -> bool {
        !self.has_public_accessor() && self.accessors().any(|a| a.access.is_family_like())
    }

    /// Accessibility reported for the property as a whole.
    pub fn reported_access(&self) -> Option<Accessibility> {
        if self.has_public_accessor() {
            Some(Accessibility::Public)
        } else if self.is_protected() {
            Some(Accessibility::Protected)
        } else {
            None
        }
    }

    pub fn is_static(&self) -> bool {
        self.accessors().any(|a| a.modifiers.is_static)
    }

    pub fn is_abstract(&self) -> bool {
        self.accessors().any(|a| a.modifiers.is_abstract)
    }

    pub fn is_virtual(&self) -> bool {
        self.accessors().any(|a| a.modifiers.is_virtual)
    }

    pub fn is_override(&self) -> bool {
        self.introducing_type
            .as_ref()
            .is_some_and(|introducing| introducing != &self.declaring_type)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSymbol {
    pub declaring_type: TypeRef,
    pub name: String,
    pub ty: TypeRef,
    pub access: Accessibility,
    pub is_static: bool,
    pub is_const: bool,
    pub is_read_only: bool,
    pub constant_value: Option<Literal>,
    pub deprecated: Option<String>,
}

/// A constant or default value as written in a declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Literal {
    Null,
    String(String),
    Char(char),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f32),
    Double(f64),
    Decimal(String),
}
