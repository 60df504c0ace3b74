//! Serializable result envelopes crossing the bridge boundary.

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Success acknowledgement for present and clear-all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AckPayload {
    /// Always `true` on the resolve path.
    pub success: bool,
    /// Human-readable confirmation message.
    pub message: String,
}

impl AckPayload {
    /// Builds a success acknowledgement with a confirmation message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Echoed badge-count result for the badge stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgePayload {
    /// Always `true` on the resolve path.
    pub success: bool,
    /// The requested count, echoed back unchanged.
    pub badge_count: i64,
}

/// Deep-link payload returned when the launch context carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepLinkPayload {
    /// The opaque deep-link string carried by the activating notification tap.
    pub deep_link: String,
}

/// Serialized rejection body carrying the stable code and host-derived message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// Stable operation-scoped rejection code.
    pub code: String,
    /// Human-readable failure message.
    pub message: String,
}

impl From<&BridgeError> for ErrorEnvelope {
    fn from(error: &BridgeError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ack_payload_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(AckPayload::ok("Notification shown successfully"))
            .expect("serialize");
        assert_eq!(
            value,
            json!({"success": true, "message": "Notification shown successfully"})
        );
    }

    #[test]
    fn badge_payload_serializes_badge_count_key() {
        let value = serde_json::to_value(BadgePayload {
            success: true,
            badge_count: 5,
        })
        .expect("serialize");
        assert_eq!(value, json!({"success": true, "badgeCount": 5}));
    }

    #[test]
    fn deep_link_payload_serializes_deep_link_key() {
        let value = serde_json::to_value(DeepLinkPayload {
            deep_link: "notifyapp://chat/chatId=12".to_string(),
        })
        .expect("serialize");
        assert_eq!(value, json!({"deepLink": "notifyapp://chat/chatId=12"}));
    }

    #[test]
    fn error_envelope_carries_code_and_message() {
        let envelope = ErrorEnvelope::from(&BridgeError::Clear("tray busy".to_string()));
        assert_eq!(
            serde_json::to_value(&envelope).expect("serialize"),
            json!({"code": "CLEAR_ERROR", "message": "Failed to clear notifications: tray busy"})
        );
    }
}
