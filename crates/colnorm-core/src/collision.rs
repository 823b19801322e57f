//! Per-batch collision resolution.

use std::collections::HashSet;

use crate::error::{NormalizeError, Result};
use crate::options::NormalizeOptions;
use crate::truncate::truncate;

/// Identifiers already handed out in the current batch.
///
/// Owned by a single batch; earlier entries win the unsuffixed name.
#[derive(Debug, Clone, Default)]
pub struct CollisionAccumulator {
    taken: HashSet<String>,
}

impl CollisionAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator that already holds `names`.
    pub fn with_taken<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark `name` as taken without producing it.
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.taken.insert(name.into());
    }

    /// Returns true if `name` has already been handed out.
    pub fn contains(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    /// Number of names recorded.
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    /// Returns true if no names are recorded.
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    /// Return a name derived from `candidate` that is not yet taken, and
    /// record it.
    ///
    /// Unused candidates are returned unchanged. Otherwise `_1`, `_2`, ...
    /// is appended to the candidate cut to the collision length.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::CollisionSpaceExhausted`] once the suffix
    /// alone would leave no room for the base within `max_length`.
    pub fn resolve(&mut self, candidate: String, options: &NormalizeOptions) -> Result<String> {
        if !self.taken.contains(&candidate) {
            self.taken.insert(candidate.clone());
            return Ok(candidate);
        }

        let mut counter: usize = 1;
        let resolved = loop {
            let suffix = format!("_{counter}");
            if suffix.len() >= options.max_length {
                tracing::warn!(
                    candidate = %candidate,
                    max_length = options.max_length,
                    "Ran out of collision suffixes"
                );
                return Err(NormalizeError::CollisionSpaceExhausted {
                    candidate,
                    max_length: options.max_length,
                });
            }
            // Long suffixes eat into the base so the result stays in bounds.
            let base_len = options
                .collision_length()
                .min(options.max_length - suffix.len());
            let attempt = format!("{}{}", truncate(&candidate, base_len), suffix);
            if !self.taken.contains(&attempt) {
                break attempt;
            }
            counter += 1;
        };

        tracing::debug!(
            candidate = %candidate,
            resolved = %resolved,
            suffix = counter,
            "Resolved identifier collision"
        );
        self.taken.insert(resolved.clone());
        Ok(resolved)
    }
}
