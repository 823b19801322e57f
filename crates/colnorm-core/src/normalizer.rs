//! Batch normalization.
//!
//! Each label goes through sanitize, truncate and collision resolution in
//! that order. Labels in one batch are processed strictly in sequence,
//! since later labels must avoid the names earlier ones received.

use std::borrow::Cow;

use serde::Serialize;

use crate::collision::CollisionAccumulator;
use crate::error::{NormalizeError, Result};
use crate::identifier::Identifier;
use crate::label::RawLabel;
use crate::options::NormalizeOptions;
use crate::reserved::is_reserved;
use crate::sanitize::sanitize;
use crate::truncate::truncate;

/// Stateful normalizer for one batch of labels.
///
/// # Example
///
/// ```
/// use colnorm_core::Normalizer;
///
/// let mut normalizer = Normalizer::default().with_forbidden(["cartodb_id"]);
/// assert_eq!(normalizer.push("CartoDB ID").unwrap().as_str(), "cartodb_id_1");
/// assert_eq!(normalizer.push("Name").unwrap().as_str(), "name");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
    accumulator: CollisionAccumulator,
    assigned: Vec<Identifier>,
}

impl Normalizer {
    /// Create a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            accumulator: CollisionAccumulator::new(),
            assigned: Vec::new(),
        })
    }

    /// Reserve `names` so that no produced identifier equals any of them.
    ///
    /// Forbidden names are not reported by [`Normalizer::assigned`].
    #[must_use]
    pub fn with_forbidden<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.accumulator.reserve(name);
        }
        self
    }

    /// Identifiers produced so far, in input order.
    pub fn assigned(&self) -> &[Identifier] {
        &self.assigned
    }

    /// Normalize the next label in the batch.
    ///
    /// The error index is the label's position within this normalizer. A
    /// label that can no longer be made unique within `max_length` fails
    /// with [`NormalizeError::CollisionSpaceExhausted`].
    pub fn push(&mut self, label: impl Into<RawLabel>) -> Result<Identifier> {
        let index = self.assigned.len();
        let label = label.into();
        let text = match label.render() {
            Some(text) if !text.is_empty() => text,
            _ => {
                tracing::warn!(index, "Rejected empty or null label");
                return Err(NormalizeError::invalid_input(index));
            }
        };

        let candidate = self.candidate(&text);
        let resolved = self.accumulator.resolve(candidate, &self.options)?;
        tracing::trace!(index, label = %text, identifier = %resolved, "Normalized label");

        let identifier = Identifier::from_normalized(resolved, self.options.max_length);
        self.assigned.push(identifier.clone());
        Ok(identifier)
    }

    /// Consume the normalizer and return every identifier it produced.
    pub fn into_assigned(self) -> Vec<Identifier> {
        self.assigned
    }

    /// Sanitized and truncated name, before collision resolution.
    fn candidate(&self, text: &str) -> String {
        let sanitized = sanitize(text);
        let cut = truncate(&sanitized, self.options.max_length);
        // Short custom limits can cut a longer name down to a keyword.
        if is_reserved(cut) {
            let prefixed = format!("_{cut}");
            return truncate(&prefixed, self.options.max_length).to_string();
        }
        cut.to_string()
    }
}

/// Original label paired with the identifier it was normalized to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRename {
    /// Rendered text of the original label.
    pub original: String,
    /// Normalized identifier.
    pub identifier: Identifier,
    /// Whether the identifier differs from the original text.
    pub changed: bool,
}

/// Normalize a single label.
///
/// Equivalent to a batch of one.
///
/// ```
/// assert_eq!(colnorm_core::normalize("Field: 2").unwrap().as_str(), "field_2");
/// ```
pub fn normalize(label: impl Into<RawLabel>) -> Result<Identifier> {
    Normalizer::default().push(label)
}

/// Normalize an ordered batch of labels with default options.
///
/// Output has the same length and order as the input, and all identifiers
/// are distinct. The whole call fails on the first empty or null label.
pub fn normalize_batch<I, L>(labels: I) -> Result<Vec<Identifier>>
where
    I: IntoIterator<Item = L>,
    L: Into<RawLabel>,
{
    normalize_batch_with(labels, &NormalizeOptions::default())
}

/// Normalize an ordered batch of labels with explicit options.
pub fn normalize_batch_with<I, L>(labels: I, options: &NormalizeOptions) -> Result<Vec<Identifier>>
where
    I: IntoIterator<Item = L>,
    L: Into<RawLabel>,
{
    let mut normalizer = Normalizer::new(*options)?;
    for label in labels {
        normalizer.push(label)?;
    }
    Ok(normalizer.into_assigned())
}

/// Normalize a batch and pair each identifier with its original label.
pub fn normalize_renames<I, L>(labels: I) -> Result<Vec<ColumnRename>>
where
    I: IntoIterator<Item = L>,
    L: Into<RawLabel>,
{
    renames_with(Normalizer::default(), labels)
}

/// Like [`normalize_renames`], using a preconfigured normalizer.
pub fn renames_with<I, L>(mut normalizer: Normalizer, labels: I) -> Result<Vec<ColumnRename>>
where
    I: IntoIterator<Item = L>,
    L: Into<RawLabel>,
{
    let mut renames = Vec::new();
    for label in labels {
        let label = label.into();
        let original = label.render().map(Cow::into_owned).unwrap_or_default();
        let identifier = normalizer.push(label)?;
        renames.push(ColumnRename {
            changed: identifier.as_str() != original,
            original,
            identifier,
        });
    }
    Ok(renames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_reports_index_of_invalid_label() {
        let mut normalizer = Normalizer::default();
        assert!(normalizer.push("a").is_ok());
        assert_eq!(
            normalizer.push(""),
            Err(NormalizeError::InvalidInput { index: 1 })
        );
        assert_eq!(
            normalizer.push(RawLabel::Null),
            Err(NormalizeError::InvalidInput { index: 1 })
        );
        assert_eq!(normalizer.assigned().len(), 1);
    }

    #[test]
    fn test_forbidden_names_are_avoided_but_not_assigned() {
        let mut normalizer = Normalizer::default().with_forbidden(["the_geom", "cartodb_id"]);
        assert_eq!(normalizer.push("the_geom").expect("label"), "the_geom_1");
        assert_eq!(normalizer.push("The Geom").expect("label"), "the_geom_2");
        assert_eq!(normalizer.assigned().len(), 2);
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let options = NormalizeOptions::new().with_max_length(3);
        assert!(Normalizer::new(options).is_err());
    }

    #[test]
    fn test_short_limit_never_yields_reserved_word() {
        let options = NormalizeOptions::new()
            .with_max_length(6)
            .with_collision_reserve(2);
        let ids = normalize_batch_with(["selection", "tablespace"], &options).expect("batch");
        assert_eq!(ids, vec!["_selec", "tables"]);
    }

    #[test]
    fn test_renames_flag_changes() {
        let labels = [RawLabel::from("name"), "Name".into(), 1_i64.into()];
        let renames = normalize_renames(labels).expect("renames");
        assert!(!renames[0].changed);
        assert_eq!(renames[1].identifier, "name_1");
        assert!(renames[1].changed);
        assert_eq!(renames[2].original, "1");
        assert_eq!(renames[2].identifier, "_1");
    }

    #[test]
    fn test_tiny_limit_runs_out_of_suffixes() {
        let options = NormalizeOptions::new()
            .with_max_length(3)
            .with_collision_reserve(0);
        let result = normalize_batch_with(std::iter::repeat_n("a", 102), &options);
        assert_eq!(
            result,
            Err(NormalizeError::CollisionSpaceExhausted {
                candidate: "a".to_string(),
                max_length: 3,
            })
        );

        let ids = normalize_batch_with(std::iter::repeat_n("a", 10), &options).expect("batch");
        assert_eq!(ids.last().map(Identifier::as_str), Some("a_9"));
        assert!(ids.iter().all(|id| id.len() <= 3));
    }

    #[test]
    fn test_cli_sized_limit_never_exceeds_max_length() {
        let options = NormalizeOptions::new().with_max_length(5);
        let mut normalizer = Normalizer::new(options).expect("options");
        for _ in 0..1000 {
            normalizer.push("a").expect("label");
        }
        assert_eq!(normalizer.assigned()[999], "a_999");
        assert!(normalizer.assigned().iter().all(|id| id.len() <= 5));
        assert!(matches!(
            normalizer.push("a"),
            Err(NormalizeError::CollisionSpaceExhausted { max_length: 5, .. })
        ));
    }
}
