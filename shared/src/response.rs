//! API Response envelope
//!
//! Every endpoint answers with the same JSON shape:
//!
//! ```json
//! { "success": true, "message": "...", "<payloadKey>": { ... } }
//! ```
//!
//! The payload key varies per endpoint ("orders", "order", "user", ...),
//! so each endpoint pairs the [`ApiStatus`] header with a named payload
//! struct from this module. Clients decode the status first and only
//! look for a payload when `success` is true.

use crate::client::UserInfo;
use crate::models::{ContactMessage, Order};
use serde::{Deserialize, Serialize};

/// Outcome header present on every response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStatus {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiStatus {
    /// Server message, with a generic fallback for responses that omit it
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or("request failed")
    }

    /// Convert the header into a result carrying the server message on
    /// failure
    pub fn into_result(self) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            let msg = self.message_or_default().to_string();
            Err(msg)
        }
    }
}

/// Payload of `GET /api/order/list` and `GET /api/order/my-orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersPayload {
    pub orders: Vec<Order>,
}

/// Payload of `POST /api/order/place`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    pub order: Order,
}

/// Payload of `GET /api/user/profile` and `PUT /api/user/profile`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub user: UserInfo,
}

/// Payload of `POST /api/user/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: UserInfo,
}

/// Payload of the contact listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactsPayload {
    pub contacts: Vec<ContactMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_decodes() {
        let json = r#"{"success": true, "orders": []}"#;

        let status: ApiStatus = serde_json::from_str(json).unwrap();
        assert!(status.success);
        assert!(status.into_result().is_ok());

        let payload: OrdersPayload = serde_json::from_str(json).unwrap();
        assert!(payload.orders.is_empty());
    }

    #[test]
    fn test_failure_envelope_carries_message() {
        let json = r#"{"success": false, "message": "Not Authorized"}"#;

        let status: ApiStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.into_result().unwrap_err(), "Not Authorized");
    }

    #[test]
    fn test_failure_envelope_without_message() {
        let json = r#"{"success": false}"#;

        let status: ApiStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.message_or_default(), "request failed");
    }
}
