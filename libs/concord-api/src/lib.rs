pub mod error;
pub mod format;
pub mod record;
pub mod schema;
pub mod user_details;
pub mod value;

pub use error::{DecodeError, FormatError};
pub use format::FormatSerializer;
pub use record::{FieldReader, WireRecord};
pub use schema::{Field, Schema};
pub use user_details::{UserDetails, UserDetailsBuilder};
pub use value::{Sequence, Value, ValueKind};
