//! Outcomes of superseded calls.

use crate::sequence::SeqId;
use fresh_core::JoinError;
use std::error::Error as StdError;
use thiserror::Error;

/// A call was superseded by a newer one before it settled.
///
/// This is an expected signal, not a fault: a newer call is
/// in flight or has already delivered its outcome.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Response [{seq}] is stale, the latest call is [{latest}]")]
pub struct StaleResponse {
    seq: SeqId,
    latest: SeqId,
}

impl StaleResponse {
    pub(crate) fn new(seq: SeqId, latest: SeqId) -> Self {
        Self { seq, latest }
    }

    /// The number of the superseded call.
    pub fn seq(&self) -> SeqId {
        self.seq
    }

    /// The latest number at the moment the call settled.
    pub fn latest(&self) -> SeqId {
        self.latest
    }

    /// Checks whether an error is a stale response signal.
    pub fn is<E>(err: &E) -> bool
    where
        E: IsStale + ?Sized,
    {
        err.is_stale()
    }
}

/// The error of a wrapped call.
#[derive(Error, Debug)]
pub enum LatestError<E> {
    /// A newer call was issued, the outcome is dropped.
    #[error("{0}")]
    Stale(#[from] StaleResponse),
    /// The latest call failed with its own error.
    #[error(transparent)]
    Failed(E),
    /// The task of the request was canceled by the runtime shutdown.
    #[error("Request task was canceled: {0}")]
    Canceled(#[source] JoinError),
}

impl<E> LatestError<E> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn failure(&self) -> Option<&E> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Stale(_) | Self::Canceled(_) => None,
        }
    }

    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Stale(_) | Self::Canceled(_) => None,
        }
    }

    /// Converts into `anyhow::Error`. A stale signal stays
    /// recognizable with [`IsStale`] after the conversion.
    pub fn into_anyhow(self) -> anyhow::Error
    where
        E: Into<anyhow::Error>,
    {
        match self {
            Self::Stale(stale) => stale.into(),
            Self::Failed(err) => err.into(),
            Self::Canceled(err) => err.into(),
        }
    }
}

/// Tells a stale response signal apart from other errors.
pub trait IsStale {
    fn is_stale(&self) -> bool;
}

impl IsStale for StaleResponse {
    fn is_stale(&self) -> bool {
        true
    }
}

impl<E> IsStale for LatestError<E> {
    fn is_stale(&self) -> bool {
        matches!(self, Self::Stale(_))
    }
}

impl<T, E: IsStale> IsStale for Result<T, E> {
    fn is_stale(&self) -> bool {
        self.as_ref().err().is_some_and(E::is_stale)
    }
}

impl IsStale for anyhow::Error {
    fn is_stale(&self) -> bool {
        self.chain().any(|err| err.is::<StaleResponse>())
    }
}

impl IsStale for dyn StdError + 'static {
    fn is_stale(&self) -> bool {
        let mut next = Some(self);
        while let Some(err) = next {
            if err.is::<StaleResponse>() {
                return true;
            }
            next = err.source();
        }
        false
    }
}

impl IsStale for dyn StdError + Send + Sync + 'static {
    fn is_stale(&self) -> bool {
        <dyn StdError as IsStale>::is_stale(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};
    use std::io;

    fn stale() -> StaleResponse {
        StaleResponse::new(SeqId::from(1), SeqId::from(2))
    }

    #[test]
    fn test_latest_error_kinds() {
        let err: LatestError<String> = stale().into();
        assert!(err.is_stale());
        assert!(!err.is_failed());
        assert_eq!(err.failure(), None);

        let err = LatestError::Failed("timeout".to_string());
        assert!(!StaleResponse::is(&err));
        assert_eq!(err.into_failure().as_deref(), Some("timeout"));
    }

    #[test]
    fn test_message() {
        assert_eq!(
            stale().to_string(),
            "Response [seq:1] is stale, the latest call is [seq:2]"
        );
        let err = LatestError::<io::Error>::Failed(io::Error::other("refused"));
        assert_eq!(err.to_string(), "refused");
    }

    #[test]
    fn test_anyhow_chain() {
        let err = LatestError::<anyhow::Error>::from(stale()).into_anyhow();
        assert!(err.is_stale());

        let wrapped = Err::<(), _>(err).context("search failed").unwrap_err();
        assert!(StaleResponse::is(&wrapped));

        let failed = LatestError::Failed(anyhow!("bad gateway")).into_anyhow();
        assert!(!failed.is_stale());
    }

    #[test]
    fn test_std_error_sources() {
        let err: Box<dyn StdError + Send + Sync> =
            Box::new(LatestError::<io::Error>::from(stale()));
        assert!(err.is_stale());

        let err: Box<dyn StdError + Send + Sync> = Box::new(io::Error::other("reset"));
        assert!(!err.is_stale());
    }

    #[test]
    fn test_results() {
        let ok: Result<u8, LatestError<()>> = Ok(1);
        assert!(!ok.is_stale());
        let stale: Result<u8, LatestError<()>> = Err(stale().into());
        assert!(stale.is_stale());
    }
}
