//! Full page navigation.

/// Leaves the current page. Anything the client side router holds is dropped.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Sets `window.location.href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!("Navigating to {path}");
        let Some(window) = web_sys::window() else {
            tracing::warn!("No window to navigate");
            return;
        };
        if let Err(err) = window.location().set_href(path) {
            tracing::warn!("Failed to navigate to {path}: {err:?}");
        }
    }
}
