use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::engine::Record;

/// A creation request that already passed the `UserCreate` schema.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub password: String,
}

/// Everything the server keeps about a user, secrets included.
///
/// Never serialize this straight into a response; go through
/// [`crate::engine::project`] with the `UserOut` schema.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredUser {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub join_date: DateTime<Utc>,
    pub password: String,
    pub hashed_password: String,
    pub internal_id: String,
    pub api_key: String,
}

impl StoredUser {
    pub fn from_new(new: NewUser, now: DateTime<Utc>) -> Self {
        // Not a real hash.
        let hashed_password = format!("hashed_{}", new.password);

        Self {
            username: new.username,
            email: new.email,
            full_name: new.full_name,
            join_date: now,
            password: new.password,
            hashed_password,
            internal_id: format!("secret_{}", Uuid::new_v4().simple()),
            api_key: format!("key_{}", Uuid::new_v4().simple()),
        }
    }

    /// The full, unfiltered record.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("username".into(), Value::from(self.username.as_str()));
        record.insert("email".into(), Value::from(self.email.as_str()));
        record.insert(
            "full_name".into(),
            self.full_name.as_deref().map_or(Value::Null, Value::from),
        );
        record.insert(
            "join_date".into(),
            Value::from(self.join_date.to_rfc3339_opts(SecondsFormat::Micros, true)),
        );
        record.insert("password".into(), Value::from(self.password.as_str()));
        record.insert("hashed_password".into(), Value::from(self.hashed_password.as_str()));
        record.insert("internal_id".into(), Value::from(self.internal_id.as_str()));
        record.insert("api_key".into(), Value::from(self.api_key.as_str()));
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_user() -> NewUser {
        NewUser {
            username: "johndoe".to_string(),
            email: "john@example.com".to_string(),
            full_name: Some("John Doe".to_string()),
            password: "securepassword123".to_string(),
        }
    }

    #[test]
    fn derives_server_fields() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        let user = StoredUser::from_new(new_user(), now);

        assert_eq!(user.join_date, now);
        assert_eq!(user.hashed_password, "hashed_securepassword123");
        assert!(user.internal_id.starts_with("secret_"));
        assert!(user.api_key.starts_with("key_"));
    }

    #[test]
    fn record_keeps_every_field_in_order() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        let record = StoredUser::from_new(new_user(), now).to_record();

        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "username",
                "email",
                "full_name",
                "join_date",
                "password",
                "hashed_password",
                "internal_id",
                "api_key",
            ]
        );
        assert_eq!(record["join_date"], "2026-10-19T08:30:00.000000Z");
    }

    #[test]
    fn missing_full_name_is_null() {
        let mut new = new_user();
        new.full_name = None;
        let record = StoredUser::from_new(new, Utc::now()).to_record();
        assert_eq!(record["full_name"], Value::Null);
    }
}
