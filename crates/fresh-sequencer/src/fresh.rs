//! The future of a wrapped call.

use crate::delivery::{Delivery, Recipient};
use crate::sequence::{SeqId, Sequencer};
use crate::stale::{LatestError, StaleResponse};
use fresh_core::{JoinHandle, Tag};
use futures::ready;
use std::future::Future;
use std::panic;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// A call in flight.
///
/// The request runs as a separate task. When it settles, the task
/// compares the call's number with the latest one and keeps either
/// the outcome or [`LatestError::Stale`]. Awaiting a `Fresh` only
/// picks up that verdict, so it doesn't matter when the caller polls.
///
/// Dropping it doesn't stop the request.
#[must_use]
pub struct Fresh<T, E> {
    title: &'static str,
    seq: SeqId,
    sequencer: Arc<Sequencer>,
    handle: JoinHandle<Result<T, LatestError<E>>>,
}

impl<T, E> Fresh<T, E>
where
    T: Tag,
    E: Tag,
{
    pub(crate) fn spawn<Fut>(
        title: &'static str,
        seq: SeqId,
        sequencer: Arc<Sequencer>,
        fut: Fut,
    ) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let latest = sequencer.clone();
        let handle = fresh_core::spawn(async move {
            let outcome = fut.await;
            settle(title, seq, &latest, outcome)
        });
        Self {
            title,
            seq,
            sequencer,
            handle,
        }
    }

    /// Spawns a task that delivers the outcome to the recipient
    /// if the call is fresh. Stale outcomes are dropped.
    pub fn forward_to<R>(self, recipient: R) -> JoinHandle<()>
    where
        R: Recipient<Delivery<T, E>> + 'static,
    {
        let fresh = self;
        fresh_core::spawn(async move {
            let title = fresh.title;
            let seq = fresh.seq;
            let outcome = match fresh.await {
                Ok(value) => Ok(value),
                Err(LatestError::Failed(err)) => Err(err),
                Err(LatestError::Stale(stale)) => {
                    log::debug!("Outcome of [{title}] skipped: {stale}");
                    return;
                }
                Err(LatestError::Canceled(err)) => {
                    log::error!("Call [{seq}] of [{title}] is lost: {err}");
                    return;
                }
            };
            if let Err(err) = recipient.deliver(Delivery { seq, outcome }) {
                log::error!("Can't deliver an outcome of [{title}]: {err}");
            }
        })
    }
}

impl<T, E> Fresh<T, E> {
    pub fn seq(&self) -> SeqId {
        self.seq
    }

    /// Whether no newer call was issued so far.
    pub fn is_current(&self) -> bool {
        self.sequencer.is_latest(self.seq)
    }
}

fn settle<T, E>(
    title: &str,
    seq: SeqId,
    sequencer: &Sequencer,
    outcome: Result<T, E>,
) -> Result<T, LatestError<E>> {
    match sequencer.latest() {
        Some(latest) if latest != seq => {
            log::trace!("Call [{seq}] of [{title}] settled after [{latest}]");
            Err(StaleResponse::new(seq, latest).into())
        }
        _ => {
            log::trace!("Call [{seq}] of [{title}] settled");
            outcome.map_err(LatestError::Failed)
        }
    }
}

impl<T, E> Future for Fresh<T, E> {
    type Output = Result<T, LatestError<E>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let joined = ready!(Pin::new(&mut self.handle).poll(cx));
        let output = match joined {
            Ok(output) => output,
            Err(err) if err.is_panic() => panic::resume_unwind(err.into_panic()),
            Err(err) => Err(LatestError::Canceled(err)),
        };
        Poll::Ready(output)
    }
}
