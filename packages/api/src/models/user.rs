//! # User records as exchanged with the remote users collection
//!
//! ## [`UserRecord`]
//!
//! One element of `GET /users`, or the echo of `POST /users`. Only `id`, `name`
//! and `email` drive the UI. `phone` is carried along because the client overwrites
//! it on every write, and every other field the server sends (`username`,
//! `address`, `company`, ...) is kept verbatim in [`UserRecord::extra`] so that a
//! shallow merge after `PUT` leaves it untouched.
//!
//! ## [`UserPayload`]
//!
//! The body of both `POST /users` and `PUT /users/{id}`: `{name, email, phone}`.
//! [`UserRecord::merge`] applies one onto an existing record in place.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user as known to the remote service and mirrored locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Server-assigned identifier.
    pub id: i64,
    /// Full name, `"first last"`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Fields the client never reads but must not drop.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: None,
            extra: Map::new(),
        }
    }

    /// Build the record a server would echo back for `payload` under `id`.
    pub fn from_payload(id: i64, payload: &UserPayload) -> Self {
        let mut record = Self::new(id, "", "");
        record.merge(payload);
        record
    }

    /// Shallow-merge a write payload over this record. Only `name`, `email`
    /// and `phone` change; `id` and `extra` are kept.
    pub fn merge(&mut self, payload: &UserPayload) {
        self.name = payload.name.clone();
        self.email = payload.email.clone();
        self.phone = Some(payload.phone.clone());
    }
}

/// Request body for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "address": { "city": "Gwenborough" }
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "Leanne Graham");
        assert_eq!(record.email, "Sincere@april.biz");
        assert_eq!(record.extra.get("username"), Some(&Value::from("Bret")));
        assert!(record.extra.contains_key("address"));
    }

    #[test]
    fn test_record_tolerates_missing_optional_fields() {
        let record: UserRecord = serde_json::from_str(r#"{"id": 11}"#).unwrap();
        assert_eq!(record, UserRecord::new(11, "", ""));
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut record: UserRecord = serde_json::from_str(
            r#"{"id": 3, "name": "Clementine Bauch", "email": "c@b.net", "username": "Samantha"}"#,
        )
        .unwrap();
        record.merge(&UserPayload {
            name: "Clem Bauch".to_string(),
            email: "clem@b.net".to_string(),
            phone: "123-456-7890".to_string(),
        });

        assert_eq!(record.id, 3);
        assert_eq!(record.name, "Clem Bauch");
        assert_eq!(record.email, "clem@b.net");
        assert_eq!(record.phone.as_deref(), Some("123-456-7890"));
        assert_eq!(record.extra.get("username"), Some(&Value::from("Samantha")));
    }
}
