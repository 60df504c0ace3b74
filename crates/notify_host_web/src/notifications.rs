//! Notification tray adapter for browser contexts.

use std::{cell::RefCell, rc::Rc};

use notify_host::{
    ChannelSpec, NotificationTrayFuture, NotificationTrayService, TrayNotification,
};

#[derive(Clone, Default)]
/// Browser tray adapter backed by the Web Notifications API.
///
/// The tray slot id becomes the Web Notification `tag`, so the browser replaces a same-slot
/// notification natively. The live handle is retained so cancel-all can close it; browsers offer
/// no way to enumerate notifications posted by earlier page loads.
pub struct WebNotificationTray {
    displayed: Rc<RefCell<Option<web_sys::Notification>>>,
}

thread_local! {
    static SHARED_TRAY: WebNotificationTray = WebNotificationTray::default();
}

impl WebNotificationTray {
    /// Returns the tray instance shared by all bridge calls on this thread.
    ///
    /// The live notification handle outlives any single bridge call; a per-call tray would drop
    /// the handle cancel-all needs to close.
    pub fn shared() -> Self {
        SHARED_TRAY.with(Clone::clone)
    }

    /// Returns whether two trays operate on the same live-handle slot.
    pub fn shares_handle_state_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.displayed, &other.displayed)
    }
}

impl NotificationTrayService for WebNotificationTray {
    fn register_channel<'a>(
        &'a self,
        _channel: &'a ChannelSpec,
    ) -> NotificationTrayFuture<'a, Result<(), String>> {
        // Browsers have no channel categorization; registration takes the unsupported-host
        // no-op path.
        Box::pin(async { Ok(()) })
    }

    fn post<'a>(
        &'a self,
        notification: &'a TrayNotification,
    ) -> NotificationTrayFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::JsValue;
                let options = web_sys::NotificationOptions::new();
                options.set_body(&notification.body);
                options.set_tag(&notification.id.to_string());
                options.set_require_interaction(notification.full_screen);
                let handle =
                    web_sys::Notification::new_with_options(&notification.title, &options)
                        .map_err(|err: JsValue| {
                            format!("notification dispatch failed: {err:?}")
                        })?;
                if let Some(previous) = self.displayed.borrow_mut().replace(handle) {
                    previous.close();
                }
                return Ok(());
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = notification;
                Ok(())
            }
        })
    }

    fn cancel_all<'a>(&'a self) -> NotificationTrayFuture<'a, Result<(), String>> {
        Box::pin(async move {
            // Off-wasm the slot is never populated, so this is the parity no-op.
            if let Some(displayed) = self.displayed.borrow_mut().take() {
                displayed.close();
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use notify_host::{message_channel, SINGLETON_NOTIFICATION_ID};

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn web_tray_operations_have_non_wasm_parity() {
        let tray = WebNotificationTray::default();
        let tray_obj: &dyn NotificationTrayService = &tray;

        block_on(tray_obj.register_channel(&message_channel())).expect("register");
        let notification = notify_runtime::compose_tray_notification(&Default::default());
        assert_eq!(notification.id, SINGLETON_NOTIFICATION_ID);
        block_on(tray_obj.post(&notification)).expect("post");
        block_on(tray_obj.cancel_all()).expect("cancel");
    }

    #[test]
    fn shared_trays_reuse_one_handle_slot() {
        let first = WebNotificationTray::shared();
        let second = WebNotificationTray::shared();
        assert!(first.shares_handle_state_with(&second));
        assert!(first.shares_handle_state_with(&first.clone()));

        // A freshly built tray owns its own slot; only `shared()` spans bridge calls.
        let detached = WebNotificationTray::default();
        assert!(!detached.shares_handle_state_with(&first));
    }
}
