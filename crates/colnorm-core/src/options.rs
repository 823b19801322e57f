//! Normalization options.

use crate::error::{NormalizeError, Result};

/// Maximum identifier length accepted by the target storage system.
pub const MAX_LENGTH: usize = 63;

/// Characters kept free for a `_N` suffix when resolving collisions.
pub const COLLISION_RESERVE: usize = 4;

/// Base length used when a collision suffix is appended.
pub const MAX_COLLISION_LENGTH: usize = MAX_LENGTH - COLLISION_RESERVE;

/// Options controlling identifier length limits.
///
/// | Setting | Default |
/// |---------|---------|
/// | Maximum identifier length | 63 chars |
/// | Collision suffix reserve | 4 chars |
/// | Collision base length | 59 chars |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Maximum identifier length in characters.
    pub max_length: usize,
    /// Characters reserved for the collision suffix.
    pub collision_reserve: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_length: MAX_LENGTH,
            collision_reserve: COLLISION_RESERVE,
        }
    }
}

impl NormalizeOptions {
    /// Create options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum identifier length.
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the number of characters reserved for collision suffixes.
    #[must_use]
    pub fn with_collision_reserve(mut self, reserve: usize) -> Self {
        self.collision_reserve = reserve;
        self
    }

    /// Length the base name is cut to before a collision suffix is appended.
    #[must_use]
    pub const fn collision_length(&self) -> usize {
        self.max_length.saturating_sub(self.collision_reserve)
    }

    /// Check that a collision suffix still fits under the maximum length.
    pub fn validate(&self) -> Result<()> {
        // Need at least one base character plus "_1".
        if self.max_length <= self.collision_reserve || self.max_length < 3 {
            return Err(NormalizeError::InvalidMaxLength {
                max_length: self.max_length,
                reserve: self.collision_reserve,
            });
        }
        Ok(())
    }
}
