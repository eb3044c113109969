//! Access-token storage.
//!
//! The client only needs to ask "what is the current access token?". Where
//! tokens live (memory, keychain, a file) is up to the [`TokenProvider`]
//! implementation.

use std::sync::RwLock;

use huddle_core::user::TokenPair;

/// Source of the bearer token attached to authenticated calls.
pub trait TokenProvider: Send + Sync {
  fn access_token(&self) -> Option<String>;
  fn refresh_token(&self) -> Option<String>;
}

/// Tokens held in process memory for the lifetime of a session.
#[derive(Debug, Default)]
pub struct MemoryTokens {
  inner: RwLock<Option<TokenPair>>,
}

impl MemoryTokens {
  pub fn new() -> Self { Self::default() }

  pub fn set(&self, tokens: TokenPair) {
    *self.inner.write().unwrap_or_else(|e| e.into_inner()) = Some(tokens);
  }

  pub fn clear(&self) {
    *self.inner.write().unwrap_or_else(|e| e.into_inner()) = None;
  }

  pub fn get(&self) -> Option<TokenPair> {
    self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
  }
}

impl TokenProvider for MemoryTokens {
  fn access_token(&self) -> Option<String> { self.get().map(|t| t.access_token) }

  fn refresh_token(&self) -> Option<String> { self.get().map(|t| t.refresh_token) }
}
