//! Endpoint wrappers, one module per feature.
//!
//! Every wrapper is an inherent method on [`crate::ApiClient`] and issues
//! exactly one HTTP call. No retries. On failure the returned
//! [`crate::ApiError`] carries the server's message when it sent one, and
//! otherwise the default message documented next to the method (the
//! `*_FAILED` constants of each module).

pub mod announcements;
pub mod auth;
pub mod bulletin;
pub mod chat;
pub mod kanban;
pub mod schedules;
pub mod workspaces;

use huddle_core::page::PageRequest;

fn page_query(page: PageRequest) -> [(&'static str, String); 2] {
  [("page", page.page.to_string()), ("size", page.size.to_string())]
}
