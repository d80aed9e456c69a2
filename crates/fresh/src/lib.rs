//! Latest-call-wins wrapper for asynchronous requests.
//!
//! See [`Latest`] for the wrapper and [`IsStale`] for telling
//! superseded calls apart from failed ones.

pub use fresh_sequencer::kit::*;

pub mod kit {
    pub mod core {
        pub use fresh_core::*;
    }

    pub mod sequencer {
        pub use fresh_sequencer::kit::*;
    }
}
