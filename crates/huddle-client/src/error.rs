//! Error types for `huddle-client`.
//!
//! [`Error`] covers building a client (bad configuration, TLS setup).
//! [`ApiError`] is the single failure type of every API call: transport
//! problems, non-success statuses and undecodable bodies are all normalised
//! into a message fit for display, with the status and raw body kept for
//! diagnostics.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] huddle_core::Error),

  #[error("configuration error: {0}")]
  Settings(#[from] config::ConfigError),

  #[error("http client error: {0}")]
  Http(#[from] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The class of failure behind an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// No response: the request could not be built or sent, or timed out.
  Transport,
  /// Non-success status with a JSON error body.
  Status,
  /// Non-success status whose body is not JSON.
  UnparseableStatus,
  /// Success status, but the body does not match the expected shape.
  Decode,
}

/// A failed API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
  pub kind:    ErrorKind,
  /// Server-supplied message when there is one, else the call's default.
  pub message: String,
  pub status:  Option<u16>,
  /// Raw response text, when a response was received.
  pub body:    Option<String>,
  /// Description of the underlying client error, if any.
  pub detail:  Option<String>,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
  pub(crate) fn transport(err: &reqwest::Error, fallback: &str) -> Self {
    Self {
      kind:    ErrorKind::Transport,
      message: fallback.to_string(),
      status:  err.status().map(|s| s.as_u16()),
      body:    None,
      detail:  Some(err.to_string()),
    }
  }

  /// Normalise a non-success response.
  pub(crate) fn from_status(status: u16, body: String, fallback: &str) -> Self {
    let parsed = serde_json::from_str::<Value>(&body).ok();
    let kind = if parsed.is_some() {
      ErrorKind::Status
    } else {
      ErrorKind::UnparseableStatus
    };
    let message = parsed
      .as_ref()
      .and_then(server_message)
      .unwrap_or_else(|| fallback.to_string());
    Self {
      kind,
      message,
      status: Some(status),
      body: Some(body),
      detail: None,
    }
  }

  pub(crate) fn decode(status: u16, body: String, err: &serde_json::Error, fallback: &str) -> Self {
    Self {
      kind:    ErrorKind::Decode,
      message: fallback.to_string(),
      status:  Some(status),
      body:    Some(body),
      detail:  Some(err.to_string()),
    }
  }

  pub fn is_unauthorized(&self) -> bool { self.status == Some(401) }
}

/// The message a JSON error body carries, under `message` or `error`.
fn server_message(body: &Value) -> Option<String> {
  ["message", "error"]
    .into_iter()
    .filter_map(|key| body.get(key)?.as_str())
    .map(str::trim)
    .find(|m| !m.is_empty())
    .map(str::to_string)
}
