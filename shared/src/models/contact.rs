//! Contact Message Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Triage state of a contact message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Unread,
    Read,
    Replied,
}

/// Contact message entity
///
/// Unlike orders, timestamps come from mongoose `timestamps` and are
/// ISO-8601 strings on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// Contact submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_decodes_wire_shape() {
        let json = r#"{
            "_id": "664b00000000000000000009",
            "name": "Grace",
            "email": "grace@example.com",
            "message": "Where is my order?",
            "status": "read",
            "createdAt": "2026-08-01T10:30:00.000Z"
        }"#;

        let msg: ContactMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.status, ContactStatus::Read);
        assert!(msg.subject.is_none());
        assert_eq!(msg.created_at.timestamp(), 1_785_580_200);
    }
}
