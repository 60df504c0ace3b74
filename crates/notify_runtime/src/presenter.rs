//! The notification presenter component behind the bridge surface.

use std::rc::Rc;

use notify_host::{
    message_channel, LaunchContextService, NotificationRequest, NotificationTrayService,
};

use crate::{
    compose::compose_tray_notification,
    envelope::{AckPayload, BadgePayload, DeepLinkPayload},
    error::BridgeError,
};

/// Presenter over injected host services for the four bridge operations.
///
/// All operations run on the single-threaded bridge dispatch path; the presenter performs no
/// internal threading or locking, and every operation is attempted exactly once.
#[derive(Clone)]
pub struct NotificationPresenter {
    tray: Rc<dyn NotificationTrayService>,
    launch: Rc<dyn LaunchContextService>,
}

impl NotificationPresenter {
    /// Creates a presenter and registers the message channel with the host tray.
    ///
    /// Registration failure is not surfaced: on hosts without channel support it is
    /// indistinguishable from the feature being absent, and presentation stays enabled.
    /// Re-construction over the same tray is idempotent.
    pub async fn new(
        tray: Rc<dyn NotificationTrayService>,
        launch: Rc<dyn LaunchContextService>,
    ) -> Self {
        let _ = tray.register_channel(&message_channel()).await;
        Self { tray, launch }
    }

    /// Returns whether two presenters are wired to the same host service instances.
    ///
    /// Clones share services; independently constructed presenters do not, even over equivalent
    /// hosts.
    pub fn shares_services_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tray, &other.tray) && Rc::ptr_eq(&self.launch, &other.launch)
    }

    /// Composes and posts the rich message notification under the fixed singleton slot.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Notification`] when the host tray rejects the post.
    pub async fn present(
        &self,
        request: &NotificationRequest,
    ) -> Result<AckPayload, BridgeError> {
        let notification = compose_tray_notification(request);
        self.tray
            .post(&notification)
            .await
            .map_err(BridgeError::Notification)?;
        Ok(AckPayload::ok("Notification shown successfully"))
    }

    /// Cancels every notification owned by this application.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Clear`] when the host tray call fails.
    pub async fn clear_all(&self) -> Result<AckPayload, BridgeError> {
        self.tray.cancel_all().await.map_err(BridgeError::Clear)?;
        Ok(AckPayload::ok("All notifications cleared"))
    }

    /// Echoes the requested badge count without touching the host.
    ///
    /// Launcher badge integration is intentionally absent; only the call-and-echo shape of this
    /// operation is contractual.
    ///
    /// # Errors
    ///
    /// Currently infallible; the signature reserves [`BridgeError::Badge`] for a real
    /// launcher-backed implementation.
    pub async fn set_badge_count(&self, count: i64) -> Result<BadgePayload, BridgeError> {
        Ok(BadgePayload {
            success: true,
            badge_count: count,
        })
    }

    /// Returns the deep link carried by the activation of the main entry surface, if any.
    ///
    /// An activation without a deep link resolves to `None`; it is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::DeepLink`] when the host launch-context call fails.
    pub async fn deep_link_from_notification(
        &self,
    ) -> Result<Option<DeepLinkPayload>, BridgeError> {
        let extras = self
            .launch
            .launch_extras()
            .await
            .map_err(BridgeError::DeepLink)?;
        Ok(extras
            .and_then(|extras| extras.deep_link)
            .map(|deep_link| DeepLinkPayload { deep_link }))
    }
}
