//! Browser (`wasm32`) implementations of `notify_host` service contracts and the JS-facing
//! bridge surface.
//!
//! This crate is the concrete browser-side host wiring layer for the notification presenter:
//! tray delivery through the Web Notifications API, launch-context retrieval from the window
//! location, compile-time host-strategy selection, and wasm-bindgen promise exports consumed by
//! the JavaScript layer. Non-`wasm32` builds keep the same surface with no-op parity behavior.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod bridge;
pub mod launch;
pub mod notifications;

pub use adapters::{
    bridge_presenter, host_strategy_name, launch_context, notification_tray,
    selected_host_strategy, HostStrategy, LaunchContextAdapter, NotificationTrayAdapter,
};
pub use launch::WebLaunchContext;
pub use notifications::WebNotificationTray;
