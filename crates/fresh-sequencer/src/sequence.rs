//! Sequence numbers assigned at issue time.

use derive_more::{Display, From, Into};
use std::sync::atomic::{AtomicU64, Ordering};

/// A sequence number of an issued call.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
#[display("seq:{_0}")]
pub struct SeqId(u64);

impl SeqId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// The issue counter of a single wrapped function.
///
/// Numbers start from `1`. The last issued number is the latest one,
/// so the counter is both the source of new numbers and the record
/// of the most recently issued call. It only grows.
#[derive(Debug, Default)]
pub struct Sequencer {
    issued: AtomicU64,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a number to a new call and makes it the latest.
    pub fn issue(&self) -> SeqId {
        let id = self.issued.fetch_add(1, Ordering::AcqRel) + 1;
        SeqId(id)
    }

    /// How many calls were issued.
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Acquire)
    }

    /// The number of the most recently issued call.
    pub fn latest(&self) -> Option<SeqId> {
        let id = self.issued();
        (id > 0).then_some(SeqId(id))
    }

    /// Checks the number against the latest one at the moment of the call.
    pub fn is_latest(&self, seq: SeqId) -> bool {
        self.issued() == seq.0
    }
}
