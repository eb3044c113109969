//! Chat rooms and messages.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/workspaces/:wid/chat/rooms` | |
//! | `POST` | `/workspaces/:wid/chat/rooms` | Body: [`NewChatRoom`] |
//! | `GET`  | `/chat/rooms/:id/messages` | `?limit[&before]`, newest first |
//! | `POST` | `/chat/rooms/:id/messages` | Body: `{"content":"..."}` |

use huddle_core::chat::{ChatMessage, ChatRoom, MessageCursor, NewChatMessage, NewChatRoom};
use reqwest::Method;

use crate::{ApiClient, ApiResult};

pub const LIST_ROOMS_FAILED: &str = "Could not load chat rooms.";
pub const CREATE_ROOM_FAILED: &str = "Could not create the chat room.";
pub const LIST_MESSAGES_FAILED: &str = "Could not load messages.";
pub const SEND_FAILED: &str = "Message could not be sent.";

impl ApiClient {
  /// `GET /workspaces/:wid/chat/rooms`
  pub async fn list_rooms(&self, workspace_id: i64) -> ApiResult<Vec<ChatRoom>> {
    self
      .get_json(
        &format!("/workspaces/{workspace_id}/chat/rooms"),
        &[],
        LIST_ROOMS_FAILED,
      )
      .await
  }

  /// `POST /workspaces/:wid/chat/rooms`
  pub async fn create_room(&self, workspace_id: i64, room: &NewChatRoom) -> ApiResult<ChatRoom> {
    self
      .send_json(
        Method::POST,
        &format!("/workspaces/{workspace_id}/chat/rooms"),
        room,
        CREATE_ROOM_FAILED,
      )
      .await
  }

  /// `GET /chat/rooms/:id/messages?limit=[&before=]`
  pub async fn list_messages(
    &self,
    room_id: i64,
    cursor: MessageCursor,
  ) -> ApiResult<Vec<ChatMessage>> {
    let mut query = vec![("limit", cursor.limit.to_string())];
    if let Some(before) = cursor.before {
      query.push(("before", before.to_string()));
    }
    self
      .get_json(
        &format!("/chat/rooms/{room_id}/messages"),
        &query,
        LIST_MESSAGES_FAILED,
      )
      .await
  }

  /// `POST /chat/rooms/:id/messages`
  pub async fn send_message(&self, room_id: i64, content: &str) -> ApiResult<ChatMessage> {
    let body = NewChatMessage {
      content: content.to_string(),
    };
    self
      .send_json(
        Method::POST,
        &format!("/chat/rooms/{room_id}/messages"),
        &body,
        SEND_FAILED,
      )
      .await
  }
}
