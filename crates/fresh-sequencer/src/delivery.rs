//! Where fresh outcomes are forwarded.

use crate::sequence::SeqId;
use anyhow::{anyhow as err, Result};
use fresh_core::{mpsc, watch};

/// A fresh outcome together with the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery<T, E> {
    pub seq: SeqId,
    pub outcome: Result<T, E>,
}

impl<T, E> Delivery<T, E> {
    pub fn into_result(self) -> Result<T, E> {
        self.outcome
    }
}

/// Takes delivered outcomes.
///
/// Every implementation reports its own failure: a closed channel
/// and a rejected state update are different things for the caller.
pub trait Recipient<M>: Send + Sync {
    fn deliver(&self, msg: M) -> Result<()>;
}

impl<F, M> Recipient<M> for F
where
    F: Fn(M) -> Result<()>,
    F: Send + Sync,
{
    fn deliver(&self, msg: M) -> Result<()> {
        self(msg)
    }
}

impl<M: Send> Recipient<M> for mpsc::UnboundedSender<M> {
    fn deliver(&self, msg: M) -> Result<()> {
        self.send(msg)
            .map_err(|_| err!("The receiver of outcomes is closed"))
    }
}

/// Keeps only the last delivered outcome.
impl<M: Send + Sync> Recipient<M> for watch::Sender<M> {
    fn deliver(&self, msg: M) -> Result<()> {
        self.send(msg)
            .map_err(|_| err!("All watchers of outcomes are gone"))
    }
}
