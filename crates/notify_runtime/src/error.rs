//! Typed bridge errors with stable operation-scoped codes.

use thiserror::Error;

/// Failure of one bridge operation, carrying the underlying host message.
///
/// Every operation is attempted exactly once; a failure is terminal for that call and is always
/// delivered as a rejected result, never as a panic across the bridge boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The present operation failed during composition or posting.
    #[error("Failed to show notification: {0}")]
    Notification(String),
    /// The clear-all operation failed in the host tray call.
    #[error("Failed to clear notifications: {0}")]
    Clear(String),
    /// The badge-count operation failed.
    #[error("Failed to set badge count: {0}")]
    Badge(String),
    /// Deep-link retrieval failed in the host launch-context call.
    #[error("Failed to get deep link: {0}")]
    DeepLink(String),
}

impl BridgeError {
    /// Returns the stable bridge rejection code for this error.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Notification(_) => "NOTIFICATION_ERROR",
            Self::Clear(_) => "CLEAR_ERROR",
            Self::Badge(_) => "BADGE_ERROR",
            Self::DeepLink(_) => "DEEPLINK_ERROR",
        }
    }
}
