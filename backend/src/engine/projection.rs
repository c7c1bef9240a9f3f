//! Record projection.
//!
//! A projection keeps the fields a [`Schema`] declares, checks each of them
//! against its [`FieldKind`], and drops everything else. Undeclared keys are
//! never an error: that is how sensitive internal fields are filtered out of
//! responses. Declared fields that are missing or malformed always are.

use chrono::DateTime;
use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::engine::error::{FieldError, ValidationError};
use crate::engine::schema::{FieldKind, FieldSpec, Schema};

/// Field name to value, in insertion order.
pub type Record = Map<String, Value>;

/// Project `record` onto `schema`.
///
/// The result holds exactly the schema's fields in schema order (optional
/// fields without a default are left out when absent). Every offending
/// field is reported, not just the first.
pub fn project(record: &Record, schema: &Schema) -> Result<Record, ValidationError> {
    let mut out = Record::new();
    let mut errors = Vec::new();

    for spec in &schema.fields {
        match record.get(spec.name) {
            Some(Value::Null) if !spec.required => {
                out.insert(spec.name.to_string(), Value::Null);
            }
            Some(value) => match check(spec, value) {
                Ok(()) => {
                    out.insert(spec.name.to_string(), value.clone());
                }
                Err(e) => errors.push(e),
            },
            None if spec.required => errors.push(FieldError::missing(spec.name)),
            None => {
                if let Some(default) = &spec.default {
                    out.insert(spec.name.to_string(), default.clone());
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(out)
    } else {
        Err(ValidationError {
            schema: schema.name,
            errors,
        })
    }
}

/// Keys of `record` that `schema` would drop, in record order.
pub fn dropped_fields<'a>(record: &'a Record, schema: &Schema) -> Vec<&'a str> {
    record
        .keys()
        .map(String::as_str)
        .filter(|key| !schema.declares(key))
        .collect()
}

fn check(spec: &FieldSpec, value: &Value) -> Result<(), FieldError> {
    let Some(s) = value.as_str() else {
        return Err(FieldError::invalid_type(spec.name, "string", json_type(value)));
    };

    match spec.kind {
        FieldKind::String => Ok(()),
        FieldKind::Email => {
            if s.validate_email() {
                Ok(())
            } else {
                Err(FieldError::invalid_format(
                    spec.name,
                    "value is not a valid email address",
                ))
            }
        }
        FieldKind::Timestamp => DateTime::parse_from_rfc3339(s)
            .map(|_| ())
            .map_err(|e| FieldError::invalid_format(spec.name, format!("invalid timestamp: {e}"))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
