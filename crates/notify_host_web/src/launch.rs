//! Launch-context adapter for browser contexts.

use notify_host::{LaunchContextFuture, LaunchContextService, LaunchExtras};

#[derive(Debug, Clone, Copy, Default)]
/// Browser launch-context adapter reading `deepLink`/`action` query parameters.
///
/// The window location query string is the browser analog of the intent extras a notification
/// tap attaches when it reopens the main entry surface.
pub struct WebLaunchContext;

impl LaunchContextService for WebLaunchContext {
    fn launch_extras<'a>(
        &'a self,
    ) -> LaunchContextFuture<'a, Result<Option<LaunchExtras>, String>> {
        Box::pin(async {
            #[cfg(target_arch = "wasm32")]
            {
                let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
                let search = window
                    .location()
                    .search()
                    .map_err(|err| format!("location query read failed: {err:?}"))?;
                let query = search.trim_start_matches('?');
                if query.is_empty() {
                    return Ok(None);
                }
                let params = web_sys::UrlSearchParams::new_with_str(query)
                    .map_err(|err| format!("query parse failed: {err:?}"))?;
                let extras = LaunchExtras {
                    deep_link: params.get("deepLink"),
                    action: params.get("action"),
                };
                if extras == LaunchExtras::default() {
                    return Ok(None);
                }
                return Ok(Some(extras));
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Ok(None)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn web_launch_context_has_non_wasm_parity() {
        let launch = WebLaunchContext;
        let launch_obj: &dyn LaunchContextService = &launch;
        assert_eq!(block_on(launch_obj.launch_extras()).expect("extras"), None);
    }
}
