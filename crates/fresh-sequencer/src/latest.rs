//! The wrapper of a request function.

use crate::fresh::Fresh;
use crate::sequence::Sequencer;
use fresh_core::Tag;
use std::any::type_name;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Wraps a request function into a latest-call-wins one.
pub fn fetch_latest<F>(request: F) -> Latest<F> {
    Latest::new(request)
}

/// A request function that delivers only the outcome
/// of the most recently issued call.
///
/// Clones share the same sequencer: calls made through any
/// clone supersede calls made through the others. Separate
/// instances created with [`Latest::new`] never interfere.
pub struct Latest<F> {
    title: &'static str,
    request: Arc<F>,
    sequencer: Arc<Sequencer>,
}

impl<F> Clone for Latest<F> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            request: self.request.clone(),
            sequencer: self.sequencer.clone(),
        }
    }
}

impl<F> fmt::Debug for Latest<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Latest")
            .field("title", &self.title)
            .field("sequencer", &self.sequencer)
            .finish()
    }
}

impl<F> Latest<F> {
    pub fn new(request: F) -> Self {
        Self::with_title(type_name::<F>(), request)
    }

    /// Creates a wrapper with a name used in log records.
    pub fn with_title(title: &'static str, request: F) -> Self {
        Self {
            title,
            request: Arc::new(request),
            sequencer: Arc::new(Sequencer::new()),
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Issues a call.
    ///
    /// The sequence number is assigned and the request is started
    /// right here, so the order of `call` invocations alone decides
    /// which call is the latest. The request runs on its own task
    /// and settles even if the returned [`Fresh`] is dropped.
    ///
    /// Panics outside of a tokio runtime.
    pub fn call<IN, Fut, T, E>(&self, input: IN) -> Fresh<T, E>
    where
        F: Fn(IN) -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Tag,
        E: Tag,
    {
        let seq = self.sequencer.issue();
        log::trace!("Call [{seq}] of [{}] issued", self.title);
        let fut = (self.request)(input);
        Fresh::spawn(self.title, seq, self.sequencer.clone(), fut)
    }

    /// Turns the wrapper into a plain function with the calling
    /// convention of the wrapped one.
    pub fn into_fn<IN, Fut, T, E>(self) -> impl Fn(IN) -> Fresh<T, E>
    where
        F: Fn(IN) -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Tag,
        E: Tag,
    {
        move |input| self.call(input)
    }
}
