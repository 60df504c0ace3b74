//! Compile-time host-strategy selection and concrete adapter factories for bridge wiring.

use std::{cell::RefCell, rc::Rc};

use notify_host::{
    ChannelSpec, LaunchContextFuture, LaunchContextService, LaunchExtras, NoopLaunchContext,
    NoopNotificationTray, NotificationTrayFuture, NotificationTrayService, TrayNotification,
};
use notify_runtime::NotificationPresenter;

use crate::{WebLaunchContext, WebNotificationTray};

/// Compile-time selected host strategy for `notify_host_web` adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed adapters from this crate.
    Browser,
    /// Placeholder no-op adapters for hosts without notification support.
    HostStub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::HostStub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::HostStub => "host-stub",
    }
}

/// Adapter enum that erases the concrete tray backend behind [`NotificationTrayService`].
#[derive(Clone)]
pub enum NotificationTrayAdapter {
    /// Web Notifications API-backed tray delivery.
    Browser(WebNotificationTray),
    /// No-op fallback used when host notification support is intentionally stubbed.
    HostStub(NoopNotificationTray),
}

impl NotificationTrayService for NotificationTrayAdapter {
    fn register_channel<'a>(
        &'a self,
        channel: &'a ChannelSpec,
    ) -> NotificationTrayFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(tray) => tray.register_channel(channel),
            Self::HostStub(tray) => tray.register_channel(channel),
        }
    }

    fn post<'a>(
        &'a self,
        notification: &'a TrayNotification,
    ) -> NotificationTrayFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(tray) => tray.post(notification),
            Self::HostStub(tray) => tray.post(notification),
        }
    }

    fn cancel_all<'a>(&'a self) -> NotificationTrayFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(tray) => tray.cancel_all(),
            Self::HostStub(tray) => tray.cancel_all(),
        }
    }
}

/// Adapter enum that erases the concrete launch-context backend behind
/// [`LaunchContextService`].
#[derive(Debug, Clone, Copy)]
pub enum LaunchContextAdapter {
    /// Browser location/query-backed launch context.
    Browser(WebLaunchContext),
    /// No-op fallback reporting no activation extras.
    HostStub(NoopLaunchContext),
}

impl LaunchContextService for LaunchContextAdapter {
    fn launch_extras<'a>(
        &'a self,
    ) -> LaunchContextFuture<'a, Result<Option<LaunchExtras>, String>> {
        match self {
            Self::Browser(launch) => launch.launch_extras(),
            Self::HostStub(launch) => launch.launch_extras(),
        }
    }
}

/// Builds the tray adapter for the compile-time selected host strategy.
///
/// The browser strategy hands out the shared tray so the live notification handle spans bridge
/// calls.
pub fn notification_tray() -> NotificationTrayAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => NotificationTrayAdapter::Browser(WebNotificationTray::shared()),
        HostStrategy::HostStub => NotificationTrayAdapter::HostStub(NoopNotificationTray),
    }
}

/// Builds the launch-context adapter for the compile-time selected host strategy.
pub fn launch_context() -> LaunchContextAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => LaunchContextAdapter::Browser(WebLaunchContext),
        HostStrategy::HostStub => LaunchContextAdapter::HostStub(NoopLaunchContext),
    }
}

thread_local! {
    static SHARED_PRESENTER: RefCell<Option<NotificationPresenter>> = RefCell::new(None);
}

/// Returns the presenter shared by all bridge calls on this thread.
///
/// The presenter is composed over the selected adapters on first use, which registers the
/// message channel exactly once; later calls reuse the same service wiring.
pub async fn bridge_presenter() -> NotificationPresenter {
    if let Some(presenter) = SHARED_PRESENTER.with(|cell| cell.borrow().clone()) {
        return presenter;
    }
    let presenter =
        NotificationPresenter::new(Rc::new(notification_tray()), Rc::new(launch_context())).await;
    SHARED_PRESENTER.with(|cell| *cell.borrow_mut() = Some(presenter.clone()));
    presenter
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use notify_host::NotificationRequest;

    use super::*;

    #[test]
    fn strategy_name_tokens_are_stable() {
        match selected_host_strategy() {
            HostStrategy::Browser => assert_eq!(host_strategy_name(), "browser"),
            HostStrategy::HostStub => assert_eq!(host_strategy_name(), "host-stub"),
        }
    }

    #[cfg(not(feature = "host-stub"))]
    #[test]
    fn default_build_selects_the_browser_strategy() {
        assert_eq!(selected_host_strategy(), HostStrategy::Browser);
        assert!(matches!(
            notification_tray(),
            NotificationTrayAdapter::Browser(_)
        ));
        assert!(matches!(launch_context(), LaunchContextAdapter::Browser(_)));
    }

    #[cfg(feature = "host-stub")]
    #[test]
    fn stub_build_selects_the_host_stub_strategy() {
        assert_eq!(selected_host_strategy(), HostStrategy::HostStub);
        assert!(matches!(
            notification_tray(),
            NotificationTrayAdapter::HostStub(_)
        ));
        assert!(matches!(launch_context(), LaunchContextAdapter::HostStub(_)));
    }

    #[cfg(not(feature = "host-stub"))]
    #[test]
    fn notification_tray_factory_hands_out_the_shared_tray() {
        match (notification_tray(), notification_tray()) {
            (NotificationTrayAdapter::Browser(first), NotificationTrayAdapter::Browser(second)) => {
                assert!(first.shares_handle_state_with(&second));
            }
            _ => panic!("default build should select browser trays"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn bridge_presenter_is_reused_across_bridge_calls() {
        let first = block_on(bridge_presenter());
        let second = block_on(bridge_presenter());
        assert!(first.shares_services_with(&second));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn bridge_presenter_operations_have_non_wasm_parity() {
        let presenter = block_on(bridge_presenter());
        block_on(presenter.present(&NotificationRequest::default())).expect("present");
        block_on(presenter.clear_all()).expect("clear");
        assert_eq!(
            block_on(presenter.deep_link_from_notification()).expect("deep link"),
            None
        );
    }
}
