//! Browser task spawning.
//!
//! Pages kick off REST calls from event handlers and effects. Those futures
//! only make sense in the browser, so under SSR they are dropped unpolled.

use std::future::Future;

/// Spawn `future` on the browser event loop; no-op outside `hydrate`.
pub fn spawn_browser<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(future);
    #[cfg(not(feature = "hydrate"))]
    drop(future);
}
