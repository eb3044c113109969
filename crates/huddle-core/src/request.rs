//! Per-resource request state.
//!
//! Each logical resource the UI shows (the workspace list, one room's
//! messages, …) is held in a [`ResourceSlot`]. Starting a request hands out a
//! [`Ticket`]; only the result carrying the most recent ticket is applied.
//! Responses that arrive after a newer request was started are reported as
//! [`Resolution::Stale`] and leave the slot untouched, so out-of-order
//! completions are visible to the caller instead of silently overwriting
//! newer data.

/// Lifecycle of one logical request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState<T, E> {
  #[default]
  Idle,
  Loading,
  Succeeded(T),
  Failed(E),
}

impl<T, E> RequestState<T, E> {
  pub fn is_loading(&self) -> bool { matches!(self, Self::Loading) }

  pub fn value(&self) -> Option<&T> {
    match self {
      Self::Succeeded(v) => Some(v),
      _ => None,
    }
  }

  pub fn value_mut(&mut self) -> Option<&mut T> {
    match self {
      Self::Succeeded(v) => Some(v),
      _ => None,
    }
  }

  pub fn error(&self) -> Option<&E> {
    match self {
      Self::Failed(e) => Some(e),
      _ => None,
    }
  }
}

/// Sequence number identifying one request issued by a [`ResourceSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
  pub fn get(self) -> u64 { self.0 }
}

/// What [`ResourceSlot::resolve`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
  /// The result belonged to the latest request and is now the slot state.
  Applied,
  /// A newer request was started (or the slot was reset) before this one
  /// completed; the result was discarded.
  Stale { latest: Option<Ticket> },
}

/// Holds a [`RequestState`] and the ticket of the request it is waiting on.
#[derive(Debug, Clone)]
pub struct ResourceSlot<T, E> {
  state:  RequestState<T, E>,
  issued: u64,
  latest: Option<Ticket>,
}

impl<T, E> Default for ResourceSlot<T, E> {
  fn default() -> Self {
    Self {
      state:  RequestState::Idle,
      issued: 0,
      latest: None,
    }
  }
}

impl<T, E> ResourceSlot<T, E> {
  pub fn new() -> Self { Self::default() }

  pub fn state(&self) -> &RequestState<T, E> { &self.state }

  pub fn state_mut(&mut self) -> &mut RequestState<T, E> { &mut self.state }

  pub fn value(&self) -> Option<&T> { self.state.value() }

  /// The ticket of the request currently awaited, if any.
  pub fn pending(&self) -> Option<Ticket> { self.latest }

  /// Start a new request. Any ticket handed out earlier becomes stale.
  pub fn begin(&mut self) -> Ticket {
    self.issued += 1;
    let ticket = Ticket(self.issued);
    self.latest = Some(ticket);
    self.state = RequestState::Loading;
    ticket
  }

  /// Apply `result` if `ticket` is the latest one issued.
  pub fn resolve(&mut self, ticket: Ticket, result: Result<T, E>) -> Resolution {
    if self.latest != Some(ticket) {
      tracing::debug!(
        ticket = ticket.get(),
        latest = self.latest.map(Ticket::get),
        "discarding stale response"
      );
      return Resolution::Stale {
        latest: self.latest,
      };
    }
    self.latest = None;
    self.state = match result {
      Ok(value) => RequestState::Succeeded(value),
      Err(error) => RequestState::Failed(error),
    };
    Resolution::Applied
  }

  /// Return to [`RequestState::Idle`]; in-flight requests become stale.
  pub fn reset(&mut self) {
    self.latest = None;
    self.state = RequestState::Idle;
  }
}
