//! Bounds for values that cross task boundaries.

/// A value that can be moved into a spawned task.
pub trait Tag: Send + 'static {}

impl<T: Send + 'static> Tag for T {}
