//! Rich-notification composition from bridge requests.

use notify_host::{
    message_channel, Category, LightCue, NotificationRequest, Priority, QuickAction, SoundCue,
    TapTarget, TrayNotification, MESSAGE_LIGHT_COLOR_ARGB, MESSAGE_VIBRATION_PATTERN_MS,
    SINGLETON_NOTIFICATION_ID,
};

/// Label of the fixed reply quick action.
pub const REPLY_ACTION_LABEL: &str = "Reply";

/// Action tag carried by the reply quick action's tap target.
pub const REPLY_ACTION_TAG: &str = "reply";

/// Label of the fixed mark-as-read quick action.
pub const MARK_READ_ACTION_LABEL: &str = "Mark as Read";

/// Action tag carried by the mark-as-read quick action's tap target.
pub const MARK_READ_ACTION_TAG: &str = "mark_read";

/// Light cue on/off duration in milliseconds.
const LIGHT_CUE_CYCLE_MS: u32 = 3000;

/// Request codes distinguishing the content tap from the two quick-action taps.
const CONTENT_REQUEST_CODE: u32 = 0;
const REPLY_REQUEST_CODE: u32 = 1;
const MARK_READ_REQUEST_CODE: u32 = 2;

/// Composes the rich message notification for a bridge request.
///
/// The result is always addressed to the fixed singleton slot: high priority, message category,
/// auto-dismiss-on-tap, default sound, the channel's vibration pattern, a green light cue, and
/// full-screen presentation for urgent delivery. A non-empty `actions` list attaches exactly two
/// fixed quick actions regardless of the entries' content; arbitrary action lists are not mapped
/// to buttons beyond these two.
pub fn compose_tray_notification(request: &NotificationRequest) -> TrayNotification {
    let mut content_tap = TapTarget::main_entry(CONTENT_REQUEST_CODE);
    if let Some(deep_link) = &request.deep_link {
        content_tap = content_tap.with_deep_link(deep_link.clone());
    }

    let actions = if request.actions.is_empty() {
        Vec::new()
    } else {
        vec![
            QuickAction {
                label: REPLY_ACTION_LABEL.to_string(),
                tap: TapTarget::main_entry(REPLY_REQUEST_CODE).with_action_tag(REPLY_ACTION_TAG),
            },
            QuickAction {
                label: MARK_READ_ACTION_LABEL.to_string(),
                tap: TapTarget::main_entry(MARK_READ_REQUEST_CODE)
                    .with_action_tag(MARK_READ_ACTION_TAG),
            },
        ]
    };

    TrayNotification {
        id: SINGLETON_NOTIFICATION_ID,
        channel_id: message_channel().id,
        title: request.title().to_string(),
        body: request.body().to_string(),
        priority: Priority::High,
        category: Category::Message,
        auto_cancel: true,
        sound: SoundCue::Default,
        vibration_pattern_ms: MESSAGE_VIBRATION_PATTERN_MS.to_vec(),
        lights: Some(LightCue {
            color_argb: MESSAGE_LIGHT_COLOR_ARGB,
            on_ms: LIGHT_CUE_CYCLE_MS,
            off_ms: LIGHT_CUE_CYCLE_MS,
        }),
        full_screen: true,
        content_tap,
        actions,
    }
}
