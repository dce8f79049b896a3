use std::sync::LazyLock;

use crate::error::DecodeError;
use crate::record::{FieldReader, WireRecord};
use crate::schema::{Field, Schema};
use crate::value::{Sequence, Value, ValueKind};

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(
        UserDetails::NAME,
        vec![
            Field::nullable("name", ValueKind::String),
            Field::nullable("email", ValueKind::String),
        ],
    )
});

/// User details exchanged across the platform boundary.
///
/// Wire shape: `[name, email]`, each text or `Null`. Absence is kept
/// distinct from an empty string in every direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct UserDetails {
    name: Option<String>,
    email: Option<String>,
}

impl UserDetails {
    /// Both fields absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> UserDetailsBuilder {
        UserDetailsBuilder::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }
}

impl WireRecord for UserDetails {
    const NAME: &'static str = "UserDetails";

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn to_sequence(&self) -> Sequence {
        Sequence(vec![Value::from(self.name.clone()), Value::from(self.email.clone())])
    }

    fn from_sequence(seq: Sequence) -> Result<Self, DecodeError> {
        let mut reader = FieldReader::new(Self::NAME, Self::schema(), seq)?;
        let name = reader.next_text()?;
        let email = reader.next_text()?;
        Ok(Self { name, email })
    }
}

/// Accumulates fields for a [`UserDetails`]. Last call per field wins.
#[derive(Debug, Clone, Default)]
pub struct UserDetailsBuilder {
    name: Option<String>,
    email: Option<String>,
}

impl UserDetailsBuilder {
    pub fn with_name<S: Into<String>>(mut self, name: Option<S>) -> Self {
        self.name = name.map(Into::into);
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: Option<S>) -> Self {
        self.email = email.map(Into::into);
        self
    }

    /// Can be called repeatedly; each call yields an independent record.
    pub fn build(&self) -> UserDetails {
        UserDetails { name: self.name.clone(), email: self.email.clone() }
    }
}
