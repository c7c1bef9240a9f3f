use serde_json::Value;
use std::sync::LazyLock;

/// The value shape a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// A string that also has to look like an email address.
    Email,
    /// An RFC 3339 timestamp string.
    Timestamp,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Email => "email",
            FieldKind::Timestamp => "timestamp",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Substituted when an optional field is absent. `None` leaves it out.
    pub default: Option<Value>,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind, default: Option<Value>) -> Self {
        Self {
            name,
            kind,
            required: false,
            default,
        }
    }
}

/// An ordered set of field descriptors.
///
/// Field order is the order fields come out of [`crate::engine::project`].
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }
}

static USER_CREATE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("UserCreate")
        .field(FieldSpec::required("username", FieldKind::String))
        .field(FieldSpec::required("email", FieldKind::Email))
        .field(FieldSpec::optional("full_name", FieldKind::String, Some(Value::Null)))
        .field(FieldSpec::required("password", FieldKind::String))
});

static USER_OUT: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("UserOut")
        .field(FieldSpec::required("username", FieldKind::String))
        .field(FieldSpec::required("email", FieldKind::Email))
        .field(FieldSpec::optional("full_name", FieldKind::String, Some(Value::Null)))
        .field(FieldSpec::required("join_date", FieldKind::Timestamp))
});

/// Input contract for `POST /users/`.
pub fn user_create() -> &'static Schema {
    &USER_CREATE
}

/// The exhaustive shape of every user returned to a caller.
pub fn user_out() -> &'static Schema {
    &USER_OUT
}
