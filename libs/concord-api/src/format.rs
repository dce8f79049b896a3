use crate::error::FormatError;
use crate::value::Sequence;

/// Runtime serializer — performs `bytes ↔ Sequence`.
///
/// Formats only move values around; record-level checks (arity, type tags)
/// happen in [`WireRecord::from_sequence`](crate::record::WireRecord::from_sequence).
pub trait FormatSerializer: Send + Sync {
    /// Short format name (for logs and CLI output).
    fn name(&self) -> &'static str;
    fn serialize(&self, seq: &Sequence) -> Result<Vec<u8>, FormatError>;
    fn deserialize(&self, bytes: &[u8]) -> Result<Sequence, FormatError>;
}
