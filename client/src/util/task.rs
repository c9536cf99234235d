//! Browser task spawning.

use std::future::Future;

/// Run `fut` on the browser event loop.
///
/// Server rendering never drives client work, so outside the browser the
/// future is dropped without being polled.
pub fn spawn_browser(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
