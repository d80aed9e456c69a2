//! Shared parts of the `fresh` crates: the runtime primitives
//! the sequencer spawns and delivers with, and the bounds for
//! values that travel between tasks.

pub mod compatible_runtime;
pub mod types;

pub use compatible_runtime::*;
pub use types::*;
