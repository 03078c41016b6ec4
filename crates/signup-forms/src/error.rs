// File: src/error.rs
// Purpose: Errors raised by the form container API

use crate::field_array::EntryId;
use crate::path::{FieldKind, FieldPath};

/// Misuse of the form container API
///
/// Validation failures are not errors; they are reported through
/// [`ValidationErrors`](crate::ValidationErrors).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A write carried a value of the wrong kind for the field
    #[error("field `{path}` expects a {expected} value")]
    TypeMismatch { path: FieldPath, expected: FieldKind },

    /// The path names a sequence, not a single value
    #[error("field `{0}` is not a scalar field")]
    NotScalar(FieldPath),

    /// No array entry carries this identifier
    #[error("no array entry with id {0}")]
    UnknownEntry(EntryId),

    /// An index-qualified path points past the end of the array
    #[error("no array entry at `{0}`")]
    IndexOutOfRange(FieldPath),

    /// The validated record could not be converted to its typed snapshot
    #[error("validated record rejected while building snapshot: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
