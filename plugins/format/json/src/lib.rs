use concord_api::{FormatError, FormatSerializer, Sequence, Value, ValueKind};

const FORMAT: &str = "json";

/// Renders a [`Sequence`] as a JSON array. The absent marker is `null`.
///
/// `Map` entries keep their order (`preserve_order`); duplicate keys are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl FormatSerializer for JsonFormat {
    fn name(&self) -> &'static str {
        FORMAT
    }

    fn serialize(&self, seq: &Sequence) -> Result<Vec<u8>, FormatError> {
        let array = seq.iter().map(to_json).collect::<Result<Vec<_>, _>>()?;
        let array = serde_json::Value::Array(array);
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&array)?
        } else {
            serde_json::to_vec(&array)?
        };
        tracing::debug!(elements = seq.len(), bytes = bytes.len(), "serialized sequence");
        Ok(bytes)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Sequence, FormatError> {
        let items = match serde_json::from_slice::<serde_json::Value>(bytes)? {
            serde_json::Value::Array(items) => items,
            other => return Err(FormatError::NotASequence(json_kind(&other))),
        };
        tracing::debug!(elements = items.len(), bytes = bytes.len(), "deserialized sequence");
        items.into_iter().map(from_json).collect()
    }
}

// ---- Value → JSON ----

fn to_json(value: &Value) -> Result<serde_json::Value, FormatError> {
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int64(n) => serde_json::Value::from(*n),
        Value::Float64(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or_else(|| unsupported(ValueKind::Float64, "non-finite number"))?,
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Bytes(_) => return Err(unsupported(ValueKind::Bytes, "no binary type")),
        Value::List(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect::<Result<_, _>>()?)
        }
        Value::Map(entries) => {
            let mut object = serde_json::Map::with_capacity(entries.len());
            for (key, val) in entries {
                let Value::String(key) = key else {
                    return Err(unsupported(ValueKind::Map, "object keys must be strings"));
                };
                if object.insert(key.clone(), to_json(val)?).is_some() {
                    return Err(unsupported(ValueKind::Map, "duplicate object key"));
                }
            }
            serde_json::Value::Object(object)
        }
    })
}

fn unsupported(kind: ValueKind, reason: &'static str) -> FormatError {
    FormatError::Unsupported { format: FORMAT, kind, reason }
}

// ---- JSON → Value ----

fn from_json(value: serde_json::Value) -> Result<Value, FormatError> {
    Ok(match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int64(i)
            } else if n.is_u64() {
                return Err(unsupported(ValueKind::Int64, "integer above i64::MAX"));
            } else {
                // without arbitrary_precision every non-integer number is an f64
                let f = n.as_f64().ok_or_else(|| unsupported(ValueKind::Float64, "out of range"))?;
                Value::Float64(f)
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::List(items.into_iter().map(from_json).collect::<Result<_, _>>()?)
        }
        serde_json::Value::Object(object) => Value::Map(
            object
                .into_iter()
                .map(|(k, v)| from_json(v).map(|v| (Value::String(k), v)))
                .collect::<Result<_, _>>()?,
        ),
    })
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
