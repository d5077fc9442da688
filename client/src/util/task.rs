//! Detached task spawning that works both in the browser and natively.

use std::future::Future;

/// Run `fut` without waiting for it.
///
/// In the browser the future is queued on the event loop. Elsewhere there is
/// no event loop to hand it to, so it runs to completion before returning.
pub fn spawn_detached<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    futures::executor::block_on(fut);
}
