use crate::value::ValueKind;

/// Failure to rebuild a record from its positional sequence.
///
/// Both variants mean the payload is bad input: the caller must surface
/// them, decoding never pads or coerces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The sequence carries fewer elements than the record has fields.
    #[error("malformed {record}: expected {expected} elements, got {actual}")]
    MalformedRecord {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An element's type tag does not match its field.
    #[error("type mismatch at index {index} ({field}): expected {expected}, got {actual}")]
    TypeMismatch {
        index: usize,
        field: String,
        expected: String,
        actual: ValueKind,
    },
}

impl DecodeError {
    /// Index of the offending element, if the error is element-specific.
    pub fn index(&self) -> Option<usize> {
        match self {
            DecodeError::MalformedRecord { .. } => None,
            DecodeError::TypeMismatch { index, .. } => Some(*index),
        }
    }
}

/// Error from a [`FormatSerializer`](crate::format::FormatSerializer).
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level payload is not an array.
    #[error("expected a sequence, got {0}")]
    NotASequence(&'static str),

    /// The value cannot be represented in the target format.
    #[error("{format} cannot represent {kind}: {reason}")]
    Unsupported {
        format: &'static str,
        kind: ValueKind,
        reason: &'static str,
    },
}
