//! Bridge configuration-map models for the present operation.

use serde::{Deserialize, Serialize};

/// Title applied when the configuration map omits `title`.
pub const DEFAULT_TITLE: &str = "New Message";

/// Body applied when the configuration map omits `message`.
pub const DEFAULT_BODY: &str = "You have a new message";

/// One tagged quick-action request from the bridge configuration map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    /// User-visible action label.
    pub label: String,
    /// Action-kind tag such as `reply` or `mark_read`.
    pub kind: String,
}

/// Configuration map accepted by the present operation.
///
/// All fields are optional; missing title/body fall back to the stated defaults and a missing
/// `actions` list means no quick actions are attached. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationRequest {
    /// Optional notification title.
    pub title: Option<String>,
    /// Optional notification body text.
    pub message: Option<String>,
    /// Optional opaque deep-link payload carried by the tap target.
    pub deep_link: Option<String>,
    /// Optional quick-action requests.
    pub actions: Vec<ActionRequest>,
}

impl NotificationRequest {
    /// Returns the effective title after applying the default.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Returns the effective body text after applying the default.
    pub fn body(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_BODY)
    }
}
