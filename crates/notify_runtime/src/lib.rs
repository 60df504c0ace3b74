//! Presenter runtime for the local notification bridge.
//!
//! This crate owns the operation semantics behind the bridge surface: composing the rich message
//! notification, posting it under the fixed singleton slot, clearing the tray, the badge-count
//! echo stub, and deep-link retrieval. Host access goes through the injected `notify_host`
//! service traits; concrete adapters live in `notify_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod compose;
pub mod envelope;
pub mod error;
pub mod presenter;

pub use compose::{
    compose_tray_notification, MARK_READ_ACTION_LABEL, MARK_READ_ACTION_TAG, REPLY_ACTION_LABEL,
    REPLY_ACTION_TAG,
};
pub use envelope::{AckPayload, BadgePayload, DeepLinkPayload, ErrorEnvelope};
pub use error::BridgeError;
pub use presenter::NotificationPresenter;
