use expect_test::expect;

use super::*;
use crate::model::{Accessor, Literal, NamedType, RawMethod, RawParameter, RawTypeRef};

fn int() -> TypeRef {
    TypeRef::named("System", "Int32")
}

fn string() -> TypeRef {
    TypeRef::named("System", "String")
}

fn vector() -> TypeRef {
    TypeRef::named("Acme.Math", "Vector")
}

fn constructed(
    namespace: &str,
    name: &str,
    arguments: Vec<TypeRef>,
) -> TypeRef {
    TypeRef::Named(NamedType {
        namespace: Some(namespace.to_string()),
        bare_name: name.to_string(),
        arity: arguments.len() as u32,
        generic_arguments: arguments,
        declaring_type: None,
    })
}

fn generic(
    name: &str,
    position: u32,
) -> GenericParameter {
    GenericParameter {
        name: name.to_string(),
        position,
    }
}

fn param(
    name: &str,
    ty: TypeRef,
) -> ParameterSymbol {
    ParameterSymbol {
        name: name.to_string(),
        ty,
        passing: ParameterPassing::Value,
        default_value: None,
    }
}

fn method(
    name: &str,
    return_type: Option<TypeRef>,
    parameters: Vec<ParameterSymbol>,
) -> MethodSymbol {
    MethodSymbol {
        declaring_type: vector(),
        name: name.to_string(),
        access: Accessibility::Public,
        modifiers: MemberModifiers::default(),
        introducing_type: None,
        generic_parameters: Vec::new(),
        parameters,
        return_type,
        operator: None,
        deprecated: None,
    }
}

fn accessor(access: Accessibility) -> Accessor {
    Accessor {
        access,
        modifiers: MemberModifiers::default(),
    }
}

fn property(
    name: &str,
    ty: TypeRef,
    getter: Option<Accessibility>,
    setter: Option<Accessibility>,
) -> PropertySymbol {
    PropertySymbol {
        declaring_type: vector(),
        name: name.to_string(),
        ty,
        getter: getter.map(accessor),
        setter: setter.map(accessor),
        index_parameters: Vec::new(),
        introducing_type: None,
        deprecated: None,
    }
}

fn field(
    name: &str,
    ty: TypeRef,
) -> FieldSymbol {
    FieldSymbol {
        declaring_type: vector(),
        name: name.to_string(),
        ty,
        access: Accessibility::Public,
        is_static: false,
        is_const: false,
        is_read_only: false,
        constant_value: None,
        deprecated: None,
    }
}

fn class(reference: TypeRef) -> TypeSymbol {
    TypeSymbol {
        reference,
        category: TypeCategory::Class,
        access: Accessibility::Public,
        is_sealed: false,
        is_abstract: false,
        base_types: Vec::new(),
        interfaces: Vec::new(),
        generic_parameters: Vec::new(),
        delegate_invoke: None,
        deprecated: None,
    }
}

fn full(symbol: &Symbol) -> String {
    render_signature(symbol, SignatureOptions::FULL)
}

fn short(symbol: &Symbol) -> String {
    render_signature(symbol, SignatureOptions::SHORT)
}

fn display(ty: &TypeRef) -> String {
    SignatureRenderer::new(SymbolTables::global(), SignatureOptions::SHORT).type_name(ty)
}

#[test]
fn primitive_types_use_keyword_aliases() {
    assert_eq!(display(&int()), "int");
    assert_eq!(display(&TypeRef::named("System", "Object")), "object");
    assert_eq!(display(&TypeRef::named("System", "Guid")), "Guid");
    assert_eq!(display(&TypeRef::named("Acme", "Int32")), "Int32");
}

#[test]
fn arrays_pointers_and_references() {
    assert_eq!(display(&TypeRef::array_of(int(), 1)), "int[]");
    assert_eq!(display(&TypeRef::array_of(int(), 2)), "int[,]");
    assert_eq!(display(&TypeRef::array_of(TypeRef::array_of(int(), 1), 1)), "int[][]");
    assert_eq!(display(&TypeRef::pointer_to(int())), "int*");
    assert_eq!(display(&TypeRef::by_ref(int())), "int");
}

#[test]
fn constructed_generics_render_their_arguments() {
    let dictionary = constructed("System.Collections.Generic", "Dictionary", vec![string(), TypeRef::array_of(vector(), 2)]);
    assert_eq!(display(&dictionary), "Dictionary<string, Vector[,]>");
}

#[test]
fn qualification_applies_to_top_level_names_only() {
    let renderer = SignatureRenderer::new(SymbolTables::global(), SignatureOptions::SHORT.with_qualified_names(true));
    let list = constructed("System.Collections.Generic", "List", vec![vector(), int()]);
    assert_eq!(renderer.type_name(&list), "System.Collections.Generic.List<Acme.Math.Vector, int>");

    let inner = TypeRef::Named(NamedType {
        namespace: Some("Acme".to_string()),
        bare_name: "Inner".to_string(),
        arity: 0,
        generic_arguments: Vec::new(),
        declaring_type: Some(Box::new(TypeRef::named("Acme", "Outer"))),
    });
    assert_eq!(renderer.type_name(&inner), "Acme.Outer.Inner");
    assert_eq!(display(&inner), "Outer.Inner");
}

#[test]
fn method_full_and_short_forms() {
    let mut add = method("Add", Some(int()), vec![param("a", int()), ParameterSymbol {
        default_value: Some(Literal::Int(3)),
        ..param("b", int())
    }]);
    add.modifiers.is_static = true;
    let symbol = Symbol::Method(add);

    assert_eq!(full(&symbol), "public static int Add(int a, int b = 3)");
    assert_eq!(short(&symbol), "Add(int, int)");
}

#[test]
fn void_methods_and_generic_parameters() {
    let mut convert = method("Convert", Some(TypeRef::generic_parameter("T", 0)), vec![param(
        "items",
        constructed("System.Collections.Generic", "List", vec![TypeRef::generic_parameter("T", 0)]),
    )]);
    convert.generic_parameters = vec![generic("T", 0)];
    assert_eq!(short(&Symbol::Method(convert.clone())), "Convert<T>(List<T>)");
    assert_eq!(full(&Symbol::Method(convert)), "public T Convert<T>(List<T> items)");

    let clear = method("Clear", None, Vec::new());
    assert_eq!(full(&Symbol::Method(clear)), "public void Clear()");
}

#[test]
fn keywords_follow_a_fixed_order() {
    let mut to_string = method("ToString", Some(string()), Vec::new());
    to_string.modifiers.is_virtual = true;
    to_string.introducing_type = Some(TypeRef::named("System", "Object"));
    assert_eq!(full(&Symbol::Method(to_string.clone())), "public override string ToString()");

    to_string.introducing_type = Some(vector());
    assert_eq!(full(&Symbol::Method(to_string)), "public virtual string ToString()");

    let mut run = method("Run", None, Vec::new());
    run.access = Accessibility::ProtectedInternal;
    run.modifiers.is_abstract = true;
    assert_eq!(full(&Symbol::Method(run)), "protected abstract void Run()");

    let mut hidden = method("Reset", None, Vec::new());
    hidden.access = Accessibility::Internal;
    assert_eq!(full(&Symbol::Method(hidden)), "void Reset()");
}

#[test]
fn operators_and_conversions() {
    let mut add = method("op_Addition", Some(vector()), vec![param("a", vector()), param("b", vector())]);
    add.modifiers.is_static = true;
    add.operator = Some(Operator::Symbolic("+"));
    assert_eq!(full(&Symbol::Method(add.clone())), "public static Vector operator +(Vector a, Vector b)");
    assert_eq!(short(&Symbol::Method(add)), "operator +(Vector, Vector)");

    let mut implicit = method("op_Implicit", Some(vector()), vec![param("values", TypeRef::array_of(
        TypeRef::named("System", "Double"),
        1,
    ))]);
    implicit.modifiers.is_static = true;
    implicit.operator = Some(Operator::Implicit);
    assert_eq!(full(&Symbol::Method(implicit)), "public static implicit operator Vector(double[] values)");

    let mut explicit = method("op_Explicit", Some(int()), vec![param("v", vector())]);
    explicit.operator = Some(Operator::Explicit);
    assert_eq!(short(&Symbol::Method(explicit)), "explicit operator int(Vector)");
}

#[test]
fn shift_operators_render_their_table_symbol() {
    let shift = |name: &str| {
        let raw = RawMethod {
            name: name.to_string(),
            is_static: true,
            is_special_name: true,
            parameters: vec![
                RawParameter {
                    name: "a".to_string(),
                    parameter_type: RawTypeRef::named("Acme.Math", "Vector"),
                    ..RawParameter::default()
                },
                RawParameter {
                    name: "b".to_string(),
                    parameter_type: RawTypeRef::named("System", "Int32"),
                    ..RawParameter::default()
                },
            ],
            return_type: Some(RawTypeRef::named("Acme.Math", "Vector")),
            ..RawMethod::default()
        };
        Symbol::Method(MethodSymbol::from_raw(&raw, &vector()).unwrap())
    };

    let unsigned = shift("op_UnsignedRightShift");
    assert_eq!(full(&unsigned), "public static Vector operator >>>(Vector a, int b)");
    assert_eq!(short(&unsigned), "operator >>>(Vector, int)");

    let signed = shift("op_SignedRightShift");
    assert_eq!(full(&signed), "public static Vector operator >>(Vector a, int b)");
}

#[test]
fn parameter_passing_prefixes_and_defaults() {
    let parse = method("Parse", None, vec![
        ParameterSymbol {
            default_value: Some(Literal::String("x".to_string())),
            ..param("text", string())
        },
        ParameterSymbol {
            passing: ParameterPassing::Out,
            ..param("result", TypeRef::by_ref(int()))
        },
        ParameterSymbol {
            passing: ParameterPassing::Ref,
            ..param("cursor", TypeRef::by_ref(int()))
        },
        ParameterSymbol {
            passing: ParameterPassing::Params,
            ..param("rest", TypeRef::array_of(TypeRef::named("System", "Object"), 1))
        },
    ]);
    let symbol = Symbol::Method(parse);

    assert_eq!(
        full(&symbol),
        "public void Parse(string text = \"x\", out int result, ref int cursor, params object[] rest)"
    );
    assert_eq!(short(&symbol), "Parse(string, out int, ref int, params object[])");
}

#[test]
fn literals_format_by_kind() {
    assert_eq!(format_literal(&Literal::Null), "null");
    assert_eq!(format_literal(&Literal::Char('a')), "'a'");
    assert_eq!(format_literal(&Literal::Bool(true)), "true");
    assert_eq!(format_literal(&Literal::Float(1.5)), "1.5f");
    assert_eq!(format_literal(&Literal::Double(2.25)), "2.25d");
    assert_eq!(format_literal(&Literal::Decimal("9.99".to_string())), "9.99");
}

#[test]
fn constructor_uses_bare_type_name() {
    let mut ctor = method(".ctor", None, vec![param("capacity", int())]);
    ctor.declaring_type = constructed("Acme", "Pool", vec![TypeRef::generic_parameter("T", 0)]);
    let symbol = Symbol::Constructor(ctor);

    assert_eq!(full(&symbol), "public Pool(int capacity)");
    assert_eq!(short(&symbol), "Pool(int)");
}

#[test]
fn property_with_narrower_setter() {
    let name = Symbol::Property(property("Name", string(), Some(Accessibility::Public), Some(Accessibility::Protected)));
    expect![[r#"
        public string Name
        {
            get;
            protected set;
        }"#]]
    .assert_eq(&full(&name));
    assert_eq!(short(&name), "Name");
}

#[test]
fn protected_property_does_not_repeat_family_access() {
    let count = Symbol::Property(property(
        "Count",
        int(),
        Some(Accessibility::Protected),
        Some(Accessibility::ProtectedInternal),
    ));
    assert_eq!(full(&count), "protected int Count\n{\n    get;\n    set;\n}");
}

#[test]
fn property_modifiers_come_from_accessors() {
    let mut length = property("Length", TypeRef::named("System", "Double"), Some(Accessibility::Public), None);
    if let Some(getter) = length.getter.as_mut() {
        getter.modifiers.is_virtual = true;
    }
    let renderer = SignatureRenderer::new(SymbolTables::global(), SignatureOptions::FULL.with_body(false));
    assert_eq!(renderer.render(&Symbol::Property(length.clone())), "public virtual double Length");

    length.introducing_type = Some(TypeRef::named("Acme.Math", "Shape"));
    assert_eq!(renderer.render(&Symbol::Property(length)), "public override double Length");
}

#[test]
fn indexer_renders_as_this() {
    let indexer = PropertySymbol {
        index_parameters: vec![param("row", int()), param("column", int())],
        ..property("Item", TypeRef::named("System", "Double"), Some(Accessibility::Public), None)
    };
    let symbol = Symbol::Property(indexer);

    assert_eq!(full(&symbol), "public double this[int row, int column]\n{\n    get;\n}");
    assert_eq!(short(&symbol), "this[int, int]");
}

#[test]
fn field_keywords() {
    let max = FieldSymbol {
        is_static: true,
        is_const: true,
        constant_value: Some(Literal::Int(10)),
        ..field("Max", int())
    };
    assert_eq!(full(&Symbol::Field(max.clone())), "public const int Max = 10;");
    assert_eq!(short(&Symbol::Field(max)), "Max");

    let empty = FieldSymbol {
        is_static: true,
        is_read_only: true,
        ..field("Empty", string())
    };
    assert_eq!(full(&Symbol::Field(empty)), "public static readonly string Empty;");

    let mut x = field("X", TypeRef::named("System", "Single"));
    x.access = Accessibility::Protected;
    assert_eq!(full(&Symbol::Field(x)), "protected float X;");
}

#[test]
fn class_declarations() {
    let mut util = class(TypeRef::named("Acme", "Util"));
    util.is_sealed = true;
    util.is_abstract = true;
    assert_eq!(full(&Symbol::Type(util)), "public static class Util");

    let mut circle = class(constructed("Acme", "Circle", Vec::new()));
    if let TypeRef::Named(named) = &mut circle.reference {
        named.arity = 1;
    }
    circle.is_sealed = true;
    circle.generic_parameters = vec![generic("T", 0)];
    circle.base_types = vec![TypeRef::named("Acme", "Shape"), TypeRef::named("System", "Object")];
    circle.interfaces = vec![TypeRef::named("System", "IDisposable")];
    assert_eq!(full(&Symbol::Type(circle.clone())), "public sealed class Circle<T> : Shape, IDisposable");
    assert_eq!(short(&Symbol::Type(circle)), "Circle<T>");

    let mut plain = class(TypeRef::named("Acme", "Plain"));
    plain.base_types = vec![TypeRef::named("System", "Object")];
    assert_eq!(full(&Symbol::Type(plain)), "public class Plain");
}

#[test]
fn other_type_categories() {
    let mut color = class(TypeRef::named("Acme", "Color"));
    color.category = TypeCategory::Enum;
    color.is_sealed = true;
    color.base_types = vec![TypeRef::named("System", "Enum")];
    assert_eq!(full(&Symbol::Type(color)), "public enum Color");

    let mut shape = class(TypeRef::named("Acme", "IShape"));
    shape.category = TypeCategory::Interface;
    shape.is_abstract = true;
    shape.interfaces = vec![TypeRef::named("System", "IDisposable")];
    assert_eq!(full(&Symbol::Type(shape)), "public interface IShape : IDisposable");

    let mut point = class(TypeRef::named("Acme", "Point"));
    point.category = TypeCategory::Struct;
    point.is_sealed = true;
    point.base_types = vec![TypeRef::named("System", "ValueType")];
    assert_eq!(full(&Symbol::Type(point)), "public struct Point : ValueType");
}

#[test]
fn delegate_declaration_uses_invoke_signature() {
    let mut predicate = class(TypeRef::Named(NamedType {
        namespace: Some("Acme".to_string()),
        bare_name: "Predicate".to_string(),
        arity: 1,
        generic_arguments: Vec::new(),
        declaring_type: None,
    }));
    predicate.category = TypeCategory::Delegate;
    predicate.generic_parameters = vec![generic("T", 0)];
    predicate.delegate_invoke = Some(Box::new(method("Invoke", Some(TypeRef::named("System", "Boolean")), vec![
        param("item", TypeRef::generic_parameter("T", 0)),
    ])));

    expect!["public delegate bool Predicate<T>(T item);"].assert_eq(&full(&Symbol::Type(predicate.clone())));

    predicate.delegate_invoke = None;
    assert_eq!(full(&Symbol::Type(predicate)), "public delegate void Predicate<T>();");
}

#[test]
fn nested_definition_name_goes_through_declaring_type() {
    let mut node = class(TypeRef::Named(NamedType {
        namespace: Some("Acme".to_string()),
        bare_name: "Node".to_string(),
        arity: 1,
        generic_arguments: Vec::new(),
        declaring_type: Some(Box::new(TypeRef::named("Acme", "Graph"))),
    }));
    node.generic_parameters = vec![generic("TValue", 0)];
    let renderer = SignatureRenderer::new(SymbolTables::global(), SignatureOptions::SHORT);
    assert_eq!(renderer.definition_name(&node), "Graph.Node<TValue>");
}

#[test]
fn parameters_and_generic_parameters_render_alone() {
    let count = ParameterSymbol {
        passing: ParameterPassing::Ref,
        ..param("count", TypeRef::by_ref(int()))
    };
    assert_eq!(full(&Symbol::Parameter(count.clone())), "ref int count");
    assert_eq!(short(&Symbol::Parameter(count)), "ref int");
    assert_eq!(full(&Symbol::GenericParameter(generic("TKey", 0))), "TKey");
}

#[test]
fn rendering_is_deterministic() {
    let mut add = method("Add", Some(int()), vec![param("a", int())]);
    add.generic_parameters = vec![generic("T", 0)];
    let symbol = Symbol::Method(add);
    assert_eq!(full(&symbol), full(&symbol.clone()));
}
