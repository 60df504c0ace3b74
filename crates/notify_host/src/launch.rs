//! Launch-context contracts exposing the activation payload of the main entry surface.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`LaunchContextService`].
pub type LaunchContextFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Contextual data carried by the activation that most recently opened the main entry surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchExtras {
    /// Opaque deep-link payload carried by a notification tap, if any.
    pub deep_link: Option<String>,
    /// Action tag carried by a quick-action tap, if any.
    pub action: Option<String>,
}

/// Host service exposing the launch context of the main entry surface.
pub trait LaunchContextService {
    /// Returns the extras carried by the most recent activation, or `None` when the surface was
    /// opened without contextual data.
    fn launch_extras<'a>(
        &'a self,
    ) -> LaunchContextFuture<'a, Result<Option<LaunchExtras>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op launch context for unsupported targets and baseline tests.
pub struct NoopLaunchContext;

impl LaunchContextService for NoopLaunchContext {
    fn launch_extras<'a>(
        &'a self,
    ) -> LaunchContextFuture<'a, Result<Option<LaunchExtras>, String>> {
        Box::pin(async { Ok(None) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory launch context with settable extras.
pub struct MemoryLaunchContext {
    inner: Rc<RefCell<Option<LaunchExtras>>>,
}

impl MemoryLaunchContext {
    /// Replaces the extras returned by subsequent [`LaunchContextService::launch_extras`] calls.
    pub fn set_extras(&self, extras: LaunchExtras) {
        *self.inner.borrow_mut() = Some(extras);
    }

    /// Clears any stored extras.
    pub fn clear(&self) {
        *self.inner.borrow_mut() = None;
    }
}

impl LaunchContextService for MemoryLaunchContext {
    fn launch_extras<'a>(
        &'a self,
    ) -> LaunchContextFuture<'a, Result<Option<LaunchExtras>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().clone()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn noop_launch_context_reports_no_extras() {
        let launch = NoopLaunchContext;
        let launch_obj: &dyn LaunchContextService = &launch;
        assert_eq!(block_on(launch_obj.launch_extras()).expect("extras"), None);
    }

    #[test]
    fn memory_launch_context_round_trips_and_clears_extras() {
        let launch = MemoryLaunchContext::default();
        let launch_obj: &dyn LaunchContextService = &launch;

        assert_eq!(block_on(launch_obj.launch_extras()).expect("extras"), None);

        launch.set_extras(LaunchExtras {
            deep_link: Some("notifyapp://chat/chatId=12".to_string()),
            action: Some("reply".to_string()),
        });
        let extras = block_on(launch_obj.launch_extras())
            .expect("extras")
            .expect("set extras");
        assert_eq!(extras.deep_link.as_deref(), Some("notifyapp://chat/chatId=12"));
        assert_eq!(extras.action.as_deref(), Some("reply"));

        launch.clear();
        assert_eq!(block_on(launch_obj.launch_extras()).expect("extras"), None);
    }
}
