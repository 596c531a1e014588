//! Display formatting for raw attribute values and attribute keys.
//!
//! The same rules back the common value and every exception entry, so a
//! field that matches the common value always renders identically to it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::RawValue;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

/// First signed decimal number anywhere in a string ("12-14 ft" -> 12).
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?(?:\d+(?:\.\d*)?|\.\d+)").unwrap());

/// Feet unit hints: ft/feet/foot not embedded in a word, or an apostrophe.
static FEET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|[\d\s.(\-])(?:ft|feet|foot)\b|['’]").unwrap());

const TRUE_TOKENS: &[&str] = &["yes", "y", "true", "t", "1", "on"];
const FALSE_TOKENS: &[&str] = &["no", "n", "false", "f", "0", "off"];

/// Trim, collapse internal whitespace and lowercase.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Interpret text as a boolean token, if it is one.
pub fn parse_bool_token(text: &str) -> Option<bool> {
    let normalized = normalize(text);
    if TRUE_TOKENS.contains(&normalized.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&normalized.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Whether the text carries a feet unit hint.
pub fn has_feet_hint(text: &str) -> bool {
    FEET_PATTERN.is_match(text)
}

/// Extract the number a value contributes to numeric classification.
///
/// Booleans, including boolean-like values such as "1", `0` or "off",
/// never extract: the formatter shows them as Yes/No.
pub fn extract_number(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(n) if n.is_finite() && number_bool(*n).is_none() => Some(*n),
        RawValue::Text(text) => extract_text_number(text),
        _ => None,
    }
}

fn extract_text_number(text: &str) -> Option<f64> {
    if parse_bool_token(text).is_some() {
        return None;
    }
    NUMBER_PATTERN
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Render a number, in feet (integer) or as a plain number rounded to two
/// decimals with trailing zeros dropped.
pub fn format_number(value: f64, feet: bool) -> String {
    if feet {
        return format!("{} ft", trim_number(&format!("{:.0}", value.round())));
    }
    trim_number(&format!("{:.2}", value))
}

fn trim_number(rendered: &str) -> String {
    let trimmed = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered
    };
    // Avoid "-0" from tiny negatives
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Display string for one raw value.
///
/// Absent values are filtered before formatting; they render empty here.
pub fn format_value(value: &RawValue) -> String {
    match value {
        RawValue::Absent => String::new(),
        RawValue::Bool(b) => yes_no(*b).to_string(),
        RawValue::Number(n) => match number_bool(*n) {
            Some(b) => yes_no(b).to_string(),
            None => format_number(*n, false),
        },
        RawValue::Text(text) => format_text(text),
    }
}

/// A number whose plain text form is a boolean token (`1` or `0`).
fn number_bool(value: f64) -> Option<bool> {
    parse_bool_token(&value.to_string())
}

fn format_text(text: &str) -> String {
    if let Some(b) = parse_bool_token(text) {
        return yes_no(b).to_string();
    }

    if let Some(number) = extract_text_number(text) {
        return format_number(number, has_feet_hint(text));
    }

    title_case(text)
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Capitalize the first letter of each word, keeping the rest of the word
/// and a standalone "ft" as-is.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            if word.eq_ignore_ascii_case("ft") {
                return "ft".to_string();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turn an attribute key into a display title.
///
/// Splits on camelCase boundaries, underscores, hyphens and whitespace:
/// `leftFieldDistance` -> "Left Field Distance".
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        let boundary = ch.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        current.push(ch);
        prev = Some(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
