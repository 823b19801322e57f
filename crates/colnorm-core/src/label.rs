//! Raw labels and their canonical text rendering.

use std::borrow::Cow;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// A user-supplied label, before normalization.
///
/// Deserializes from any JSON scalar, so a header row read as JSON can be
/// passed in directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawLabel {
    /// Missing label.
    Null,
    /// Boolean label, rendered as `True` / `False`.
    Bool(bool),
    /// Integer label, e.g. a positional column index.
    Integer(i64),
    /// Integer too large for `i64`.
    Unsigned(u64),
    /// Floating-point label.
    Float(f64),
    /// Text label.
    Text(String),
}

impl RawLabel {
    /// Canonical text form, or `None` for a null label.
    pub fn render(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => None,
            Self::Bool(true) => Some(Cow::Borrowed("True")),
            Self::Bool(false) => Some(Cow::Borrowed("False")),
            Self::Integer(value) => Some(Cow::Owned(value.to_string())),
            Self::Unsigned(value) => Some(Cow::Owned(value.to_string())),
            Self::Float(value) => Some(Cow::Owned(render_float(*value))),
            Self::Text(text) => Some(Cow::Borrowed(text)),
        }
    }
}

impl From<&str> for RawLabel {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawLabel {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for RawLabel {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for RawLabel {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u64> for RawLabel {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Unsigned(value), Self::Integer)
    }
}

impl From<i32> for RawLabel {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for RawLabel {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for RawLabel {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<RawLabel>> From<Option<T>> for RawLabel {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Render a float with shortest round-trip digits.
///
/// Integral values keep a `.0` suffix. Magnitudes outside `[1e-4, 1e16)`
/// use a signed, two-digit exponent (`1e+20`, `1e-05`).
pub fn render_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{value:e}");
        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return formatted;
        };
        let exponent: i32 = exponent.parse().unwrap_or_default();
        let sign = if exponent < 0 { '-' } else { '+' };
        let mut out = String::with_capacity(formatted.len() + 2);
        let _ = write!(out, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
        return out;
    }

    let mut out = value.to_string();
    if !out.contains('.') {
        out.push_str(".0");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scalars() {
        assert_eq!(RawLabel::from(1_i64).render().as_deref(), Some("1"));
        assert_eq!(RawLabel::from(-7_i64).render().as_deref(), Some("-7"));
        assert_eq!(RawLabel::from(true).render().as_deref(), Some("True"));
        assert_eq!(RawLabel::from("x").render().as_deref(), Some("x"));
        assert_eq!(RawLabel::Null.render(), None);
        assert_eq!(RawLabel::from(None::<&str>), RawLabel::Null);
    }

    #[test]
    fn test_render_float_plain() {
        assert_eq!(render_float(1.0), "1.0");
        assert_eq!(render_float(0.0), "0.0");
        assert_eq!(render_float(-0.0), "-0.0");
        assert_eq!(render_float(0.1), "0.1");
        assert_eq!(render_float(2.5), "2.5");
        assert_eq!(render_float(1e15), "1000000000000000.0");
        assert_eq!(render_float(0.0001), "0.0001");
    }

    #[test]
    fn test_render_float_scientific() {
        assert_eq!(render_float(1e16), "1e+16");
        assert_eq!(render_float(1e20), "1e+20");
        assert_eq!(render_float(1.5e20), "1.5e+20");
        assert_eq!(render_float(1e-5), "1e-05");
        assert_eq!(render_float(-2.5e-7), "-2.5e-07");
        assert_eq!(render_float(1e300), "1e+300");
    }

    #[test]
    fn test_render_float_special() {
        assert_eq!(render_float(f64::NAN), "nan");
        assert_eq!(render_float(f64::INFINITY), "inf");
        assert_eq!(render_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_deserialize_mixed_json() {
        let labels: Vec<RawLabel> =
            serde_json::from_str(r#"["a", 1, 1.5, true, null]"#).expect("parse labels");
        assert_eq!(
            labels,
            vec![
                RawLabel::Text("a".to_string()),
                RawLabel::Integer(1),
                RawLabel::Float(1.5),
                RawLabel::Bool(true),
                RawLabel::Null,
            ]
        );
    }

    #[test]
    fn test_deserialize_large_integer_keeps_digits() {
        let labels: Vec<RawLabel> =
            serde_json::from_str("[18446744073709551615, 9223372036854775807, -1]")
                .expect("parse labels");
        assert_eq!(
            labels,
            vec![
                RawLabel::Unsigned(u64::MAX),
                RawLabel::Integer(i64::MAX),
                RawLabel::Integer(-1),
            ]
        );
        assert_eq!(labels[0].render().as_deref(), Some("18446744073709551615"));
        assert_eq!(RawLabel::from(7_u64), RawLabel::Integer(7));
    }
}
