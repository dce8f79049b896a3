use crate::value::{Value, ValueKind};

/// A single positional field of a record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Field {
    pub name: String,
    pub field_type: ValueKind,
    /// `true` → `Value::Null` is accepted as "absent".
    #[serde(default)]
    pub nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: ValueKind) -> Self {
        Self { name: name.into(), field_type, nullable: false }
    }

    pub fn nullable(name: impl Into<String>, field_type: ValueKind) -> Self {
        Self { name: name.into(), field_type, nullable: true }
    }

    /// Whether `value` satisfies this field's type tag.
    pub fn accepts(&self, value: &Value) -> bool {
        match value {
            Value::Null => self.nullable,
            other => other.kind() == self.field_type,
        }
    }

    /// Human-readable expected kind, e.g. `"string or null"`.
    pub fn expected(&self) -> String {
        if self.nullable {
            format!("{} or null", self.field_type)
        } else {
            self.field_type.to_string()
        }
    }
}

/// Positional description of a record.
///
/// Field position in `fields` determines its index — position in
/// `Sequence(Vec<Value>)` after `to_sequence()`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Schema {
    /// Record name (for diagnostics).
    pub name: String,
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self { name: name.into(), fields }
    }

    /// Number of elements a well-formed sequence carries.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }
}
