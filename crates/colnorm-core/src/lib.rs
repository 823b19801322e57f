//! Column label to SQL identifier normalization.
//!
//! Turns arbitrary labels (dataframe column names, spreadsheet headers,
//! Unicode text, numbers) into identifiers that a PostgreSQL-backed store
//! accepts as column or table names.
//!
//! # Guarantees
//!
//! - Every identifier matches `[a-z_][a-z0-9_]*`
//! - At most 63 characters
//! - Never a reserved word
//! - Unique within one batch
//! - Deterministic for a given input order
//!
//! # Example
//!
//! ```
//! use colnorm_core::normalize_batch;
//!
//! let names = normalize_batch(["Field: 2", "2 Items", "SELECT", "à", "à"]).unwrap();
//! let names: Vec<&str> = names.iter().map(|id| id.as_str()).collect();
//! assert_eq!(names, ["field_2", "_2_items", "_select", "a", "a_1"]);
//! ```
//!
//! # Pipeline
//!
//! Each label is lowercased, stripped of markup, transliterated to ASCII,
//! reduced to `[a-z0-9_]`, checked against the reserved words, truncated and
//! finally made unique against the names already produced in the batch.

mod collision;
mod error;
mod identifier;
mod label;
mod normalizer;
mod options;

pub mod reserved;
pub mod sanitize;
pub mod translit;
pub mod truncate;

// Re-export error types
pub use error::{NormalizeError, Result};

// Re-export core types
pub use collision::CollisionAccumulator;
pub use identifier::{Identifier, check_identifier, is_valid_identifier};
pub use label::{RawLabel, render_float};
pub use options::{COLLISION_RESERVE, MAX_COLLISION_LENGTH, MAX_LENGTH, NormalizeOptions};

// Re-export batch operations
pub use normalizer::{
    ColumnRename, Normalizer, normalize, normalize_batch, normalize_batch_with, normalize_renames,
    renames_with,
};
