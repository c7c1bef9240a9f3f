//! Schema-driven record projection.

pub mod error;
pub mod projection;
pub mod schema;

pub use error::{FieldError, ValidationError};
pub use projection::{Record, dropped_fields, project};
pub use schema::{FieldKind, FieldSpec, Schema};
