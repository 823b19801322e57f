//! Label sanitization.
//!
//! Turns arbitrary text into a lowercase `[a-z0-9_]` slug, then applies the
//! reserved-word and shape checks that decide whether a leading underscore
//! is needed. The step order matters: tags are stripped before
//! transliteration, and entities after it.

use crate::reserved::is_reserved;
use crate::translit::transliterate;

const SEPARATOR: char = '-';

/// Sanitize `value` and apply the validity prefix.
pub fn sanitize(value: &str) -> String {
    apply_validity_prefix(slugify(value))
}

/// Lowercase, strip markup, transliterate and collapse separators to `_`.
///
/// No validity prefix is applied, so the result may be empty, reserved or
/// start with a digit.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let untagged = strip_tags(&lowered);
    let ascii = transliterate(&untagged);
    let unentitied = replace_entities(&ascii);

    let restricted: String = unentitied
        .chars()
        .map(|c| if is_slug_char(c) { c } else { SEPARATOR })
        .collect();

    collapse_separators(restricted.trim())
}

/// Prefix `name` with `_` if it is reserved or not shaped like an identifier.
///
/// The reserved check runs first; at most one underscore is added.
pub fn apply_validity_prefix(name: String) -> String {
    if is_reserved(&name) || !has_identifier_shape(&name) {
        format!("_{name}")
    } else {
        name
    }
}

/// Returns true if `name` matches `[a-z_][a-z0-9_]*`.
pub fn has_identifier_shape(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first == '_' => {
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        _ => false,
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, ' ' | '_' | '-')
}

/// Remove `<...>` runs with at least one character between the brackets.
fn strip_tags(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) if close > 0 => {
                out.push_str(&rest[..open]);
                rest = &after[close + 1..];
            }
            _ => {
                out.push_str(&rest[..=open]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Replace `&...;` entities with a separator.
///
/// An entity body is one or more characters other than a newline, matched
/// lazily up to the first `;` that follows it.
fn replace_entities(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(amp) = rest.find('&') {
        let after = &rest[amp + 1..];
        match entity_end(after) {
            Some(end) => {
                out.push_str(&rest[..amp]);
                out.push(SEPARATOR);
                rest = &after[end..];
            }
            None => {
                out.push_str(&rest[..=amp]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Byte offset just past the `;` closing an entity body at the start of `s`.
fn entity_end(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;
    if first == '\n' {
        return None;
    }
    for (idx, c) in chars {
        match c {
            ';' => return Some(idx + 1),
            '\n' => return None,
            _ => {}
        }
    }
    None
}

/// Collapse whitespace and hyphen runs and convert them to `_`.
///
/// Underscores already present are kept as-is.
fn collapse_separators(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_separator = false;
    for c in value.chars() {
        if c.is_whitespace() || c == SEPARATOR {
            if !in_separator {
                out.push('_');
                in_separator = true;
            }
        } else {
            out.push(c);
            in_separator = false;
        }
    }
    out
}
