use crate::error::DecodeError;
use crate::schema::Schema;
use crate::value::{Sequence, Value};

/// A record with a fixed positional wire shape.
///
/// - `to_sequence()` — always yields `schema().arity()` values, in schema order.
/// - `from_sequence()` — rebuilds the record; fails on short input or on a
///   type tag that does not match its field. Never pads with defaults.
///
/// `Self::from_sequence(r.to_sequence()) == Ok(r)` for every record `r`.
pub trait WireRecord: Sized {
    /// Record name (for diagnostics).
    const NAME: &'static str;

    fn schema() -> &'static Schema;
    fn to_sequence(&self) -> Sequence;
    fn from_sequence(seq: Sequence) -> Result<Self, DecodeError>;
}

/// Reads a sequence front to back against a schema.
///
/// Construction checks arity; each `next_*` call consumes one element and
/// checks its type tag. Elements past the schema's arity are ignored.
pub struct FieldReader {
    schema: &'static Schema,
    record: &'static str,
    values: std::vec::IntoIter<Value>,
    index: usize,
}

impl FieldReader {
    pub fn new(
        record: &'static str,
        schema: &'static Schema,
        seq: Sequence,
    ) -> Result<Self, DecodeError> {
        let expected = schema.arity();
        if seq.len() < expected {
            return Err(DecodeError::MalformedRecord { record, expected, actual: seq.len() });
        }
        Ok(Self { schema, record, values: seq.into_inner().into_iter(), index: 0 })
    }

    /// Next element, checked against its schema field.
    ///
    /// Elements past the schema's arity have no field and are returned as-is.
    pub fn next_value(&mut self) -> Result<Value, DecodeError> {
        let index = self.index;
        let value = self.values.next().ok_or(DecodeError::MalformedRecord {
            record: self.record,
            expected: index + 1,
            actual: index,
        })?;
        self.index += 1;

        match self.schema.field(index) {
            Some(field) if !field.accepts(&value) => Err(DecodeError::TypeMismatch {
                index,
                field: field.name.clone(),
                expected: field.expected(),
                actual: value.kind(),
            }),
            _ => Ok(value),
        }
    }

    /// Next element as optional text: `String` → `Some`, `Null` → `None`.
    ///
    /// Schema check first; a non-text value the schema accepts is still a mismatch.
    pub fn next_text(&mut self) -> Result<Option<String>, DecodeError> {
        let index = self.index;
        match self.next_value()? {
            Value::String(s) => Ok(Some(s)),
            Value::Null => Ok(None),
            other => Err(DecodeError::TypeMismatch {
                index,
                field: self
                    .schema
                    .field(index)
                    .map_or_else(|| format!("#{index}"), |f| f.name.clone()),
                expected: "string or null".to_owned(),
                actual: other.kind(),
            }),
        }
    }
}
