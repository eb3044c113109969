//! Chat rooms and messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoom {
  pub id:           i64,
  pub workspace_id: i64,
  pub name:         String,
  #[serde(default)]
  pub member_count: u32,
  pub last_message: Option<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
  pub id:      i64,
  pub room_id: i64,
  pub sender:  User,
  pub content: String,
  pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChatRoom {
  pub name:       String,
  pub member_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChatMessage {
  pub content: String,
}

/// Backwards pagination over a room's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCursor {
  /// Return messages older than this id. `None` starts from the newest.
  pub before: Option<i64>,
  pub limit:  u32,
}

impl Default for MessageCursor {
  fn default() -> Self {
    Self {
      before: None,
      limit:  50,
    }
  }
}
