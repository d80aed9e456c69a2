//! The runtime parts used by the other crates.
//!
//! Everything that spawns or waits goes through this module,
//! so the rest of the workspace doesn't depend on `tokio` directly.

pub use tokio::sync::{mpsc, watch};
pub use tokio::task::{JoinError, JoinHandle};

use std::future::Future;

/// Spawns a future that settles on its own,
/// whether anybody waits for it or not.
///
/// Panics outside of a tokio runtime.
pub fn spawn<F>(fut: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(fut)
}
