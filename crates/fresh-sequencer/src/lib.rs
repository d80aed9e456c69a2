//! Latest-call-wins wrapper for asynchronous requests.
//!
//! [`Latest`] wraps a function that starts a request and returns
//! a future. Every call gets a sequence number at the moment it is
//! issued. When the request settles, the outcome is delivered only
//! if no newer call was issued in the meantime; otherwise the call
//! fails with [`StaleResponse`], whatever the request returned.
//!
//! ```ignore
//! let search = fetch_latest(|text: String| client.search(text));
//! let first = search.call("f".into());
//! let second = search.call("fo".into());
//! // `first` yields `LatestError::Stale` even if it settles later.
//! ```

pub mod delivery;
pub mod fresh;
pub mod latest;
pub mod sequence;
pub mod stale;

pub mod kit {
    pub use crate::delivery::{Delivery, Recipient};
    pub use crate::fresh::Fresh;
    pub use crate::latest::{fetch_latest, Latest};
    pub use crate::sequence::{SeqId, Sequencer};
    pub use crate::stale::{IsStale, LatestError, StaleResponse};
}
