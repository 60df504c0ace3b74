//! Typed host-domain contracts and shared models for local notification presentation.
//!
//! This crate is the API-first boundary for notification host services. It exposes the
//! channel/request/tray data models, the capability traits a presenter is wired with, and pure
//! deep-link helpers, while concrete browser adapters live in `notify_host_web` and operation
//! semantics live in `notify_runtime`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod channel;
pub mod deep_link;
pub mod launch;
pub mod request;
pub mod tray;

pub use channel::{
    message_channel, ChannelSpec, Importance, MESSAGE_CHANNEL_ID, MESSAGE_LIGHT_COLOR_ARGB,
    MESSAGE_VIBRATION_PATTERN_MS,
};
pub use deep_link::{generate_deep_link, parse_deep_link, DeepLinkTarget, DEEP_LINK_SCHEME};
pub use launch::{
    LaunchContextFuture, LaunchContextService, LaunchExtras, MemoryLaunchContext,
    NoopLaunchContext,
};
pub use request::{ActionRequest, NotificationRequest, DEFAULT_BODY, DEFAULT_TITLE};
pub use tray::{
    Category, LightCue, MemoryNotificationTray, NoopNotificationTray, NotificationTrayFuture,
    NotificationTrayService, Priority, QuickAction, SoundCue, TapTarget, TrayNotification,
    SINGLETON_NOTIFICATION_ID,
};
