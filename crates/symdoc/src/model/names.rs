use regex::Regex;
use std::sync::OnceLock;

use crate::error::MalformedSymbolError;

static ANCHOR_STRIP: OnceLock<Regex> = OnceLock::new();

/// Split a raw name like ``Dictionary`2`` into its bare name and arity.
///
/// The marker is stripped exactly once, at the first backtick; everything
/// after it must be a decimal count.
pub fn split_arity(raw: &str) -> Result<(&str, u32), MalformedSymbolError> {
    let Some((bare, suffix)) = raw.split_once('`') else {
        return non_empty(raw).map(|bare| (bare, 0));
    };
    let bare = non_empty(bare)?;
    if suffix.is_empty() {
        return Err(MalformedSymbolError::MissingArity {
            name: raw.to_string(),
        });
    }
    if !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MalformedSymbolError::InvalidArity {
            name: raw.to_string(),
            suffix: suffix.to_string(),
        });
    }
    let arity = suffix.parse::<u32>().map_err(|_| MalformedSymbolError::InvalidArity {
        name: raw.to_string(),
        suffix: suffix.to_string(),
    })?;
    Ok((bare, arity))
}

fn non_empty(name: &str) -> Result<&str, MalformedSymbolError> {
    if name.trim().is_empty() {
        Err(MalformedSymbolError::EmptyName)
    } else {
        Ok(name)
    }
}

/// Name with everything from the first backtick removed. Lenient: never fails.
pub fn identifier(value: &str) -> &str {
    match value.find('`') {
        Some(index) => &value[..index],
        None => value,
    }
}

/// Markdown heading anchor: lower-case, punctuation dropped, spaces to `-`.
pub fn anchor(value: &str) -> String {
    let re = ANCHOR_STRIP.get_or_init(|| Regex::new(r"[^\w\s-]").expect("anchor pattern is valid"));
    let lowered = value.to_lowercase();
    re.replace_all(&lowered, "").trim_end().replace(' ', "-")
}

#[cfg(test)]
#[path = "../../tests/src/model/names_tests.rs"]
mod tests;
