use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ModelError;
use crate::notification::Notification;

/// A tutor record as stored in the tutors document.
///
/// Only `id` and `notifications` are distinguished fields; everything
/// else the client sent at registration is kept verbatim in `fields`
/// and flattened back on serialization.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TutorProfile {
    pub id: String,
    /// Server-managed, append-only. Defaults to empty so records that
    /// predate the field (or were edited by hand) still read and
    /// accept appends.
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// The public view of a tutor returned by the listing endpoint:
/// the full profile minus `notifications`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TutorListing {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl TutorProfile {
    /// Build a profile from a raw registration body. Requires a
    /// non-empty string `id`; any client-supplied `notifications`
    /// value is discarded and the history starts empty.
    pub fn from_registration(mut body: Map<String, Value>) -> Result<Self, ModelError> {
        let id = require_id(&body)?;
        body.remove("id");
        body.remove("notifications");
        Ok(Self { id, notifications: Vec::new(), fields: body })
    }

    pub fn listing(&self) -> TutorListing {
        TutorListing { id: self.id.clone(), fields: self.fields.clone() }
    }
}

/// Extract the `id` field from a registration body, rejecting absent,
/// non-string, and empty values alike.
pub(crate) fn require_id(body: &Map<String, Value>) -> Result<String, ModelError> {
    match body.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(ModelError::MissingId),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: Value) -> Map<String, Value> {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn registration_keeps_opaque_fields_and_resets_notifications() {
        let profile = TutorProfile::from_registration(body(json!({
            "id": "t1",
            "name": "Jane",
            "specializations": ["Math", "Physics"],
            "rate_hourly": 25,
            "notifications": [{"student_id": "sneaky", "message": "x", "timestamp": "2024-01-01T00:00:00Z"}],
        })))
        .unwrap();

        assert_eq!(profile.id, "t1");
        assert!(profile.notifications.is_empty());
        assert_eq!(profile.fields["name"], json!("Jane"));
        assert_eq!(profile.fields["rate_hourly"], json!(25));
        assert!(!profile.fields.contains_key("id"));
        assert!(!profile.fields.contains_key("notifications"));
    }

    #[test]
    fn registration_rejects_missing_or_empty_id() {
        assert!(TutorProfile::from_registration(body(json!({"name": "Jane"}))).is_err());
        assert!(TutorProfile::from_registration(body(json!({"id": ""}))).is_err());
        assert!(TutorProfile::from_registration(body(json!({"id": 7}))).is_err());
    }

    #[test]
    fn serialization_flattens_fields_to_top_level() {
        let profile = TutorProfile::from_registration(body(json!({
            "id": "t1",
            "name": "Jane",
        })))
        .unwrap();
        let v = serde_json::to_value(&profile).unwrap();
        assert_eq!(v["id"], json!("t1"));
        assert_eq!(v["name"], json!("Jane"));
        assert_eq!(v["notifications"], json!([]));
    }

    #[test]
    fn deserialization_defaults_missing_notifications() {
        let profile: TutorProfile =
            serde_json::from_value(json!({"id": "t1", "name": "Jane"})).unwrap();
        assert!(profile.notifications.is_empty());
    }

    #[test]
    fn listing_strips_notifications() {
        let mut profile = TutorProfile::from_registration(body(json!({
            "id": "t1",
            "name": "Jane",
        })))
        .unwrap();
        profile.notifications.push(crate::notification::Notification::interest("s1"));

        let v = serde_json::to_value(profile.listing()).unwrap();
        assert_eq!(v["id"], json!("t1"));
        assert_eq!(v["name"], json!("Jane"));
        assert!(v.get("notifications").is_none());
    }
}
