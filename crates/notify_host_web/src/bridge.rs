//! JavaScript-facing promise-style bridge surface.
//!
//! Each export mirrors one presenter operation: it accepts a configuration value from the JS
//! layer, runs the host call behind an asynchronous completion, and resolves with a serialized
//! result envelope or rejects with a `{code, message}` envelope. Failures are always delivered
//! through the rejection path, never as unhandled exceptions.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use notify_host::{deep_link, NotificationRequest};
use notify_runtime::{BridgeError, ErrorEnvelope};

use crate::adapters::bridge_presenter;

fn rejection(error: &BridgeError) -> JsValue {
    serde_wasm_bindgen::to_value(&ErrorEnvelope::from(error))
        .unwrap_or_else(|_| JsValue::from_str(error.code()))
}

fn resolution<T: serde::Serialize>(
    payload: &T,
    operation: fn(String) -> BridgeError,
) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(payload).map_err(|err| rejection(&operation(err.to_string())))
}

/// Presents the rich message notification described by `options`.
///
/// `options` may be `null`/`undefined` or an object with optional `title`, `message`,
/// `deepLink`, and `actions` keys. Resolves with `{success, message}`; rejects with code
/// `NOTIFICATION_ERROR`.
#[wasm_bindgen(js_name = presentNotification)]
pub fn present_notification(options: JsValue) -> Promise {
    future_to_promise(async move {
        let request: NotificationRequest = if options.is_null() || options.is_undefined() {
            NotificationRequest::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|err| rejection(&BridgeError::Notification(err.to_string())))?
        };
        let presenter = bridge_presenter().await;
        let ack = presenter
            .present(&request)
            .await
            .map_err(|err| rejection(&err))?;
        resolution(&ack, BridgeError::Notification)
    })
}

/// Cancels every notification owned by this application.
///
/// Resolves with `{success, message}`; rejects with code `CLEAR_ERROR`.
#[wasm_bindgen(js_name = clearAllNotifications)]
pub fn clear_all_notifications() -> Promise {
    future_to_promise(async move {
        let presenter = bridge_presenter().await;
        let ack = presenter.clear_all().await.map_err(|err| rejection(&err))?;
        resolution(&ack, BridgeError::Clear)
    })
}

/// Echoes the requested badge count back without any host-level badge mutation.
///
/// Resolves with `{success, badgeCount}`; rejects with code `BADGE_ERROR`.
#[wasm_bindgen(js_name = setBadgeCount)]
pub fn set_badge_count(count: i32) -> Promise {
    future_to_promise(async move {
        let presenter = bridge_presenter().await;
        let payload = presenter
            .set_badge_count(i64::from(count))
            .await
            .map_err(|err| rejection(&err))?;
        resolution(&payload, BridgeError::Badge)
    })
}

/// Returns the deep link carried by the activation of the main entry surface.
///
/// Resolves with `{deepLink}` when the activation carried one, or `null` otherwise; rejects with
/// code `DEEPLINK_ERROR` only on host-layer faults.
#[wasm_bindgen(js_name = getDeepLinkFromNotification)]
pub fn get_deep_link_from_notification() -> Promise {
    future_to_promise(async move {
        let presenter = bridge_presenter().await;
        match presenter
            .deep_link_from_notification()
            .await
            .map_err(|err| rejection(&err))?
        {
            Some(payload) => resolution(&payload, BridgeError::DeepLink),
            None => Ok(JsValue::NULL),
        }
    })
}

/// Parses a deep-link string into `{screen, params}`.
///
/// Returns `null` for empty input, scheme-only input, and foreign schemes. The bridge otherwise
/// treats deep links as opaque; this helper is a convenience for the JS navigation layer.
#[wasm_bindgen(js_name = parseDeepLink)]
pub fn parse_deep_link(url: &str) -> JsValue {
    match deep_link::parse_deep_link(url) {
        Some(target) => serde_wasm_bindgen::to_value(&target).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}
