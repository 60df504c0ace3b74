//! Notification channel definitions shared by the presenter and host adapters.

use serde::{Deserialize, Serialize};

/// Identifier of the process-wide message channel.
pub const MESSAGE_CHANNEL_ID: &str = "incoming_messages";

/// Vibration pattern applied to message notifications (five 1000 ms pulses).
pub const MESSAGE_VIBRATION_PATTERN_MS: [u64; 5] = [1000, 1000, 1000, 1000, 1000];

/// ARGB light color used as the message channel's light cue (green).
pub const MESSAGE_LIGHT_COLOR_ARGB: u32 = 0xFF00_FF00;

/// Relative importance of a channel on hosts that support channel categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    /// Quiet delivery without interruption.
    Low,
    /// Host-default delivery behavior.
    Default,
    /// Interruptive delivery with sound and heads-up presentation.
    High,
}

/// Declarative channel definition registered once at presenter construction.
///
/// Registration is idempotent: re-registering the same id with an identical definition must not
/// fail and must not duplicate the channel on the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    /// Stable channel identifier.
    pub id: String,
    /// User-visible channel name.
    pub display_name: String,
    /// User-visible channel description.
    pub description: String,
    /// Channel importance level.
    pub importance: Importance,
    /// Whether notifications on this channel drive the device light.
    pub lights_enabled: bool,
    /// ARGB light color when lights are enabled.
    pub light_color_argb: u32,
    /// Whether notifications on this channel vibrate.
    pub vibration_enabled: bool,
    /// Vibration on/off pattern in milliseconds.
    pub vibration_pattern_ms: Vec<u64>,
}

/// Returns the fixed message channel owned by this module.
pub fn message_channel() -> ChannelSpec {
    ChannelSpec {
        id: MESSAGE_CHANNEL_ID.to_string(),
        display_name: "Incoming Messages".to_string(),
        description: "Incoming message alerts".to_string(),
        importance: Importance::High,
        lights_enabled: true,
        light_color_argb: MESSAGE_LIGHT_COLOR_ARGB,
        vibration_enabled: true,
        vibration_pattern_ms: MESSAGE_VIBRATION_PATTERN_MS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_channel_is_high_importance_with_fixed_cues() {
        let channel = message_channel();
        assert_eq!(channel.id, MESSAGE_CHANNEL_ID);
        assert_eq!(channel.importance, Importance::High);
        assert!(channel.lights_enabled);
        assert_eq!(channel.light_color_argb, MESSAGE_LIGHT_COLOR_ARGB);
        assert!(channel.vibration_enabled);
        assert_eq!(channel.vibration_pattern_ms, vec![1000; 5]);
    }

    #[test]
    fn message_channel_definition_is_stable_across_calls() {
        assert_eq!(message_channel(), message_channel());
    }
}
