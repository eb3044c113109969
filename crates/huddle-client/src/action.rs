//! Asynchronous actions.
//!
//! A [`Dispatcher`] runs an API call on the tokio runtime and posts the
//! result, wrapped in a caller-chosen message type, onto an unbounded
//! channel. The receiving end (typically the UI event loop) is the single
//! writer of view state and applies messages one at a time.
//!
//! [`Dispatcher::dispatch_tracked`] ties a call to a [`ResourceSlot`] so the
//! reducer can tell whether the result is still the one it is waiting for.

use std::future::Future;

use huddle_core::request::{Resolution, ResourceSlot, Ticket};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{ApiError, ApiResult};

/// The result of a tracked call, tagged with the ticket it was issued under.
#[derive(Debug)]
pub struct Outcome<T> {
  pub ticket: Ticket,
  pub result: ApiResult<T>,
}

impl<T> Outcome<T> {
  /// Resolve `slot` with this outcome. Stale outcomes leave it untouched.
  pub fn apply_to(self, slot: &mut ResourceSlot<T, ApiError>) -> Resolution {
    slot.resolve(self.ticket, self.result)
  }
}

/// Spawns API calls and delivers their results as `M` messages.
pub struct Dispatcher<M> {
  tx: mpsc::UnboundedSender<M>,
}

impl<M> Clone for Dispatcher<M> {
  fn clone(&self) -> Self {
    Self {
      tx: self.tx.clone(),
    }
  }
}

impl<M: Send + 'static> Dispatcher<M> {
  /// A dispatcher and the receiver its messages arrive on.
  pub fn channel() -> (Self, mpsc::UnboundedReceiver<M>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Self { tx }, rx)
  }

  /// Run `request` in the background and send `wrap(result)` when it
  /// completes. Must be called from within a tokio runtime.
  pub fn dispatch<T, Fut, W>(&self, request: Fut, wrap: W) -> JoinHandle<()>
  where
    T: Send + 'static,
    Fut: Future<Output = ApiResult<T>> + Send + 'static,
    W: FnOnce(ApiResult<T>) -> M + Send + 'static,
  {
    let tx = self.tx.clone();
    tokio::spawn(async move {
      let result = request.await;
      if tx.send(wrap(result)).is_err() {
        tracing::debug!("action receiver dropped; discarding result");
      }
    })
  }

  /// Mark `slot` as loading and run `request`; the delivered [`Outcome`]
  /// carries the ticket `slot` issued.
  pub fn dispatch_tracked<T, Fut, W>(
    &self,
    slot: &mut ResourceSlot<T, ApiError>,
    request: Fut,
    wrap: W,
  ) -> Ticket
  where
    T: Send + 'static,
    Fut: Future<Output = ApiResult<T>> + Send + 'static,
    W: FnOnce(Outcome<T>) -> M + Send + 'static,
  {
    let ticket = slot.begin();
    self.dispatch(request, move |result| wrap(Outcome { ticket, result }));
    ticket
  }
}
