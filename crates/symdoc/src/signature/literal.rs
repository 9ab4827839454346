use crate::model::Literal;

/// Format a constant as it would appear in source.
pub fn format_literal(value: &Literal) -> String {
    match value {
        Literal::Null => "null".to_string(),
        Literal::String(s) => format!("\"{s}\""),
        Literal::Char(c) => format!("'{c}'"),
        Literal::Bool(b) => b.to_string(),
        Literal::Int(v) => v.to_string(),
        Literal::UInt(v) => v.to_string(),
        Literal::Float(v) => format!("{v}f"),
        Literal::Double(v) => format!("{v}d"),
        Literal::Decimal(v) => v.clone(),
    }
}
