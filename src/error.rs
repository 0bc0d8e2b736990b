//! Typed errors for spec loading.
//!
//! These are carried inside `anyhow::Error` so callers can keep using `?`
//! and context chains, while tests can still downcast to assert on the
//! specific failure.

use thiserror::Error;

/// Errors produced while decoding and validating the export spec.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Structurally malformed entry (missing field, wrong shape).
    #[error("spec format error: {0}")]
    Format(String),

    /// A view declared a dtype outside the supported set {f64, i32}.
    #[error("view '{view}' has unsupported dtype '{dtype}' (expected f64 or i32)")]
    UnsupportedDtype { view: String, dtype: String },

    /// A name that would not survive as a C identifier fragment.
    #[error("'{name}' is not a valid export name (want [A-Za-z_][A-Za-z0-9_]*)")]
    BadName { name: String },

    /// Two views/dims share a name; the emitted C would fail to link.
    #[error("duplicate export name '{name}' across views/dims")]
    DuplicateName { name: String },
}
