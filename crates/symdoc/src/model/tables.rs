use std::collections::HashMap;
use std::sync::OnceLock;

/// Keyword aliases for framework primitive types, keyed by qualified name.
const PRIMITIVE_ALIASES: &[(&str, &str)] = &[
    ("System.Char", "char"),
    ("System.String", "string"),
    ("System.Boolean", "bool"),
    ("System.Int32", "int"),
    ("System.Int64", "long"),
    ("System.Single", "float"),
    ("System.Double", "double"),
    ("System.Byte", "byte"),
    ("System.SByte", "sbyte"),
    ("System.Decimal", "decimal"),
    ("System.Int16", "short"),
    ("System.UInt32", "uint"),
    ("System.UInt64", "ulong"),
    ("System.UInt16", "ushort"),
    ("System.Object", "object"),
    ("System.Void", "void"),
];

/// Symbolic method names and the operator they declare.
///
/// Conversions map to an empty symbol; they render as
/// `implicit operator T` / `explicit operator T` instead.
const OPERATOR_SYMBOLS: &[(&str, &str)] = &[
    ("op_Implicit", ""),
    ("op_Explicit", ""),
    ("op_Addition", "+"),
    ("op_Subtraction", "-"),
    ("op_Multiply", "*"),
    ("op_Division", "/"),
    ("op_Modulus", "%"),
    ("op_ExclusiveOr", "^"),
    ("op_BitwiseAnd", "&"),
    ("op_BitwiseOr", "|"),
    ("op_LogicalAnd", "&&"),
    ("op_LogicalOr", "||"),
    ("op_LogicalNot", "!"),
    ("op_Assign", "="),
    ("op_LeftShift", "<<"),
    ("op_RightShift", ">>"),
    ("op_SignedRightShift", ">>"),
    ("op_UnsignedRightShift", ">>>"),
    ("op_Equality", "=="),
    ("op_GreaterThan", ">"),
    ("op_LessThan", "<"),
    ("op_Inequality", "!="),
    ("op_GreaterThanOrEqual", ">="),
    ("op_LessThanOrEqual", "<="),
    ("op_MultiplicationAssignment", "*="),
    ("op_SubtractionAssignment", "-="),
    ("op_ExclusiveOrAssignment", "^="),
    ("op_LeftShiftAssignment", "<<="),
    ("op_ModulusAssignment", "%="),
    ("op_AdditionAssignment", "+="),
    ("op_BitwiseAndAssignment", "&="),
    ("op_BitwiseOrAssignment", "|="),
    ("op_Comma", ","),
    ("op_DivisionAssignment", "/="),
    ("op_Decrement", "--"),
    ("op_Increment", "++"),
    ("op_UnaryNegation", "-"),
    ("op_UnaryPlus", "+"),
    ("op_OnesComplement", "~"),
    ("op_True", "true"),
    ("op_False", "false"),
];

static TABLES: OnceLock<SymbolTables> = OnceLock::new();

/// Process-wide lookup tables shared by descriptor construction and the
/// signature renderer. Built once on first use, read-only afterwards.
#[derive(Debug)]
pub struct SymbolTables {
    primitives: HashMap<&'static str, &'static str>,
    operators: HashMap<&'static str, &'static str>,
}

impl SymbolTables {
    pub fn global() -> &'static SymbolTables {
        TABLES.get_or_init(|| SymbolTables {
            primitives: PRIMITIVE_ALIASES.iter().copied().collect(),
            operators: OPERATOR_SYMBOLS.iter().copied().collect(),
        })
    }

    /// Keyword alias for a qualified type name, e.g. `System.Int32` -> `int`.
    pub fn primitive_alias(
        &self,
        namespace: &str,
        bare_name: &str,
    ) -> Option<&'static str> {
        if namespace != "System" {
            return None;
        }
        let mut qualified = String::with_capacity(7 + bare_name.len());
        qualified.push_str("System.");
        qualified.push_str(bare_name);
        self.primitives.get(qualified.as_str()).copied()
    }

    /// Whether `name` is a known operator method name.
    pub fn is_operator(
        &self,
        name: &str,
    ) -> bool {
        self.operators.contains_key(name)
    }

    /// Display symbol for an operator method name; empty when unknown.
    pub fn operator_symbol(
        &self,
        name: &str,
    ) -> &'static str {
        self.operators.get(name).copied().unwrap_or("")
    }
}

/// Display symbol for an operator method name; empty when unknown.
pub fn operator_symbol(name: &str) -> &'static str {
    SymbolTables::global().operator_symbol(name)
}
