//! Notification tray contracts, rich-notification models, and no-op/in-memory adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::channel::ChannelSpec;

/// Object-safe boxed future used by [`NotificationTrayService`] async methods.
pub type NotificationTrayFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Fixed tray slot for the presented notification.
///
/// At most one instance of the presented notification exists at a time; posting under this id
/// replaces any currently displayed instance.
pub const SINGLETON_NOTIFICATION_ID: u32 = 1001;

/// Delivery priority requested for a posted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Host-default delivery priority.
    Default,
    /// Interruptive heads-up delivery.
    High,
}

/// Semantic category hint for a posted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Incoming direct message.
    Message,
}

/// Sound cue requested for a posted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    /// No audible cue.
    Silent,
    /// Host-default notification sound.
    Default,
}

/// Colored light cue requested for a posted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightCue {
    /// ARGB light color.
    pub color_argb: u32,
    /// Light on-duration in milliseconds.
    pub on_ms: u32,
    /// Light off-duration in milliseconds.
    pub off_ms: u32,
}

/// Tap target that relaunches the application's main entry surface.
///
/// The target optionally carries a deep-link payload and/or an action tag as contextual data that
/// the relaunched surface exposes through its launch context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapTarget {
    /// Request code distinguishing this target from other targets of the same notification.
    pub request_code: u32,
    /// Optional opaque deep-link payload delivered to the relaunched surface.
    pub deep_link: Option<String>,
    /// Optional action tag delivered to the relaunched surface.
    pub action_tag: Option<String>,
}

impl TapTarget {
    /// Creates a tap target for the main entry surface with no contextual data.
    pub fn main_entry(request_code: u32) -> Self {
        Self {
            request_code,
            deep_link: None,
            action_tag: None,
        }
    }

    /// Attaches a deep-link payload to the target.
    pub fn with_deep_link(mut self, deep_link: impl Into<String>) -> Self {
        self.deep_link = Some(deep_link.into());
        self
    }

    /// Attaches an action tag to the target.
    pub fn with_action_tag(mut self, action_tag: impl Into<String>) -> Self {
        self.action_tag = Some(action_tag.into());
        self
    }
}

/// One quick action rendered on a posted notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    /// User-visible action label.
    pub label: String,
    /// Tap target invoked when the action is pressed.
    pub tap: TapTarget,
}

/// Fully-composed rich notification handed to the host tray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrayNotification {
    /// Tray slot id; posting under an occupied id replaces the prior instance.
    pub id: u32,
    /// Channel the notification is delivered on.
    pub channel_id: String,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub body: String,
    /// Requested delivery priority.
    pub priority: Priority,
    /// Semantic category hint.
    pub category: Category,
    /// Whether tapping the notification dismisses it.
    pub auto_cancel: bool,
    /// Requested sound cue.
    pub sound: SoundCue,
    /// Vibration on/off pattern in milliseconds.
    pub vibration_pattern_ms: Vec<u64>,
    /// Optional colored light cue.
    pub lights: Option<LightCue>,
    /// Whether the host should use full-screen presentation for urgent delivery.
    pub full_screen: bool,
    /// Tap target for the notification surface itself.
    pub content_tap: TapTarget,
    /// Quick actions rendered below the notification content.
    pub actions: Vec<QuickAction>,
}

/// Host tray service for channel registration, posting, and bulk cancellation.
pub trait NotificationTrayService {
    /// Registers (or idempotently re-registers) a notification channel.
    fn register_channel<'a>(
        &'a self,
        channel: &'a ChannelSpec,
    ) -> NotificationTrayFuture<'a, Result<(), String>>;

    /// Posts a notification under its tray slot id, replacing any prior occupant.
    fn post<'a>(
        &'a self,
        notification: &'a TrayNotification,
    ) -> NotificationTrayFuture<'a, Result<(), String>>;

    /// Cancels every notification owned by this application.
    fn cancel_all<'a>(&'a self) -> NotificationTrayFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op tray service for unsupported targets and baseline tests.
pub struct NoopNotificationTray;

impl NotificationTrayService for NoopNotificationTray {
    fn register_channel<'a>(
        &'a self,
        _channel: &'a ChannelSpec,
    ) -> NotificationTrayFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn post<'a>(
        &'a self,
        _notification: &'a TrayNotification,
    ) -> NotificationTrayFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn cancel_all<'a>(&'a self) -> NotificationTrayFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Default)]
struct MemoryTrayState {
    channels: HashMap<String, ChannelSpec>,
    visible: HashMap<u32, TrayNotification>,
}

#[derive(Debug, Clone, Default)]
/// In-memory tray service with inspectable channel and visibility state.
pub struct MemoryNotificationTray {
    inner: Rc<RefCell<MemoryTrayState>>,
}

impl MemoryNotificationTray {
    /// Returns the number of distinct registered channels.
    pub fn channel_count(&self) -> usize {
        self.inner.borrow().channels.len()
    }

    /// Returns the registered definition for a channel id.
    pub fn channel(&self, id: &str) -> Option<ChannelSpec> {
        self.inner.borrow().channels.get(id).cloned()
    }

    /// Returns the number of currently visible notifications.
    pub fn visible_count(&self) -> usize {
        self.inner.borrow().visible.len()
    }

    /// Returns the currently visible notification in a tray slot.
    pub fn visible(&self, id: u32) -> Option<TrayNotification> {
        self.inner.borrow().visible.get(&id).cloned()
    }
}

impl NotificationTrayService for MemoryNotificationTray {
    fn register_channel<'a>(
        &'a self,
        channel: &'a ChannelSpec,
    ) -> NotificationTrayFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .channels
                .insert(channel.id.clone(), channel.clone());
            Ok(())
        })
    }

    fn post<'a>(
        &'a self,
        notification: &'a TrayNotification,
    ) -> NotificationTrayFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .visible
                .insert(notification.id, notification.clone());
            Ok(())
        })
    }

    fn cancel_all<'a>(&'a self) -> NotificationTrayFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().visible.clear();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::channel::message_channel;

    fn sample_notification(id: u32, title: &str) -> TrayNotification {
        TrayNotification {
            id,
            channel_id: message_channel().id,
            title: title.to_string(),
            body: "body".to_string(),
            priority: Priority::High,
            category: Category::Message,
            auto_cancel: true,
            sound: SoundCue::Default,
            vibration_pattern_ms: vec![1000; 5],
            lights: None,
            full_screen: true,
            content_tap: TapTarget::main_entry(0),
            actions: Vec::new(),
        }
    }

    #[test]
    fn memory_tray_replaces_notifications_posted_under_the_same_slot() {
        let tray = MemoryNotificationTray::default();
        let tray_obj: &dyn NotificationTrayService = &tray;

        block_on(tray_obj.post(&sample_notification(SINGLETON_NOTIFICATION_ID, "first")))
            .expect("post first");
        block_on(tray_obj.post(&sample_notification(SINGLETON_NOTIFICATION_ID, "second")))
            .expect("post second");

        assert_eq!(tray.visible_count(), 1);
        assert_eq!(
            tray.visible(SINGLETON_NOTIFICATION_ID).expect("visible").title,
            "second"
        );
    }

    #[test]
    fn memory_tray_channel_registration_is_idempotent() {
        let tray = MemoryNotificationTray::default();
        let tray_obj: &dyn NotificationTrayService = &tray;
        let channel = message_channel();

        block_on(tray_obj.register_channel(&channel)).expect("register");
        block_on(tray_obj.register_channel(&channel)).expect("re-register");

        assert_eq!(tray.channel_count(), 1);
        assert_eq!(tray.channel(&channel.id), Some(channel));
    }

    #[test]
    fn memory_tray_cancel_all_clears_every_slot_and_succeeds_when_empty() {
        let tray = MemoryNotificationTray::default();
        let tray_obj: &dyn NotificationTrayService = &tray;

        block_on(tray_obj.cancel_all()).expect("cancel empty tray");

        block_on(tray_obj.post(&sample_notification(1, "a"))).expect("post a");
        block_on(tray_obj.post(&sample_notification(2, "b"))).expect("post b");
        assert_eq!(tray.visible_count(), 2);

        block_on(tray_obj.cancel_all()).expect("cancel");
        assert_eq!(tray.visible_count(), 0);
    }

    #[test]
    fn noop_tray_accepts_every_operation() {
        let tray = NoopNotificationTray;
        let tray_obj: &dyn NotificationTrayService = &tray;

        block_on(tray_obj.register_channel(&message_channel())).expect("register");
        block_on(tray_obj.post(&sample_notification(1, "a"))).expect("post");
        block_on(tray_obj.cancel_all()).expect("cancel");
    }
}
