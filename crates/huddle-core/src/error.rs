//! Error types for `huddle-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid origin {0:?}: {1}")]
  InvalidOrigin(String, #[source] url::ParseError),

  #[error("origin {0:?} must be an http(s) scheme and host only")]
  NotAnOrigin(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
