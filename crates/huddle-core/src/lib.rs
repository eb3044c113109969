//! Core types for the Huddle workspace client.
//!
//! This crate is deliberately free of HTTP and terminal dependencies. It
//! holds the transport records the backend returns, the resource-URL
//! resolver, the generic selection list, and the per-resource request state
//! machine. `huddle-client` and `huddle-cli` build on top of it.

pub mod announcement;
pub mod bulletin;
pub mod chat;
pub mod error;
pub mod kanban;
pub mod page;
pub mod request;
pub mod resource;
pub mod schedule;
pub mod selection;
pub mod user;
pub mod workspace;

pub use error::{Error, Result};
