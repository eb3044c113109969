//! Async client for the Huddle REST API.
//!
//! [`ApiClient`] wraps every backend endpoint the workspace UI uses, one
//! module per feature under [`api`]. Every failure is normalised into an
//! [`ApiError`] carrying a human-readable message. [`Session`] holds the
//! signed-in user and the current workspace, and [`Dispatcher`] runs calls
//! on the tokio runtime and delivers their outcomes as messages.
//!
//! # Example
//!
//! ```rust,ignore
//! let config = ClientConfig::load(None)?;
//! let mut session = Session::connect(&config)?;
//! session.login("ada@example.com", "hunter2").await?;
//! let workspaces = session.client().list_workspaces().await?;
//! ```

pub mod action;
pub mod api;
pub mod client;
pub mod error;
pub mod session;
pub mod settings;
pub mod token;

pub use action::{Dispatcher, Outcome};
pub use client::ApiClient;
pub use error::{ApiError, ApiResult, Error, ErrorKind, Result};
pub use session::Session;
pub use settings::ClientConfig;
pub use token::{MemoryTokens, TokenProvider};
