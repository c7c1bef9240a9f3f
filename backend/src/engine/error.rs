use thiserror::Error;

/// A single field that did not satisfy its descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field}: field required")]
    Missing { field: String },

    #[error("{field}: expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{field}: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl FieldError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    pub fn invalid_type(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
            actual,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            FieldError::Missing { field }
            | FieldError::InvalidType { field, .. }
            | FieldError::InvalidFormat { field, .. } => field,
        }
    }

    /// Stable machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldError::Missing { .. } => "missing",
            FieldError::InvalidType { .. } => "invalid_type",
            FieldError::InvalidFormat { .. } => "invalid_format",
        }
    }
}

/// A record failed to project onto a schema.
///
/// `errors` is never empty and follows schema field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{schema} validation failed on {} field(s)", .errors.len())]
pub struct ValidationError {
    pub schema: &'static str,
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(FieldError::field)
    }
}
