//! Kanban boards.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/workspaces/:wid/boards` | Boards with their columns |
//! | `GET`    | `/boards/:id/cards` | |
//! | `POST`   | `/boards/:id/cards` | Body: [`KanbanCardDraft`] |
//! | `PATCH`  | `/cards/:id/position` | Body: [`CardMove`] |
//! | `DELETE` | `/cards/:id` | |

use huddle_core::kanban::{CardMove, KanbanBoard, KanbanCard, KanbanCardDraft};
use reqwest::Method;

use crate::{ApiClient, ApiResult};

pub const LIST_BOARDS_FAILED: &str = "Could not load boards.";
pub const LIST_CARDS_FAILED: &str = "Could not load cards.";
pub const CREATE_CARD_FAILED: &str = "Could not add the card.";
pub const MOVE_CARD_FAILED: &str = "Could not move the card.";
pub const DELETE_CARD_FAILED: &str = "Could not delete the card.";

impl ApiClient {
  /// `GET /workspaces/:wid/boards`
  pub async fn list_boards(&self, workspace_id: i64) -> ApiResult<Vec<KanbanBoard>> {
    self
      .get_json(&format!("/workspaces/{workspace_id}/boards"), &[], LIST_BOARDS_FAILED)
      .await
  }

  /// `GET /boards/:id/cards`
  pub async fn list_cards(&self, board_id: i64) -> ApiResult<Vec<KanbanCard>> {
    self
      .get_json(&format!("/boards/{board_id}/cards"), &[], LIST_CARDS_FAILED)
      .await
  }

  /// `POST /boards/:id/cards`
  pub async fn create_card(&self, board_id: i64, draft: &KanbanCardDraft) -> ApiResult<KanbanCard> {
    self
      .send_json(
        Method::POST,
        &format!("/boards/{board_id}/cards"),
        draft,
        CREATE_CARD_FAILED,
      )
      .await
  }

  /// `PATCH /cards/:id/position`
  ///
  /// Two quick moves of the same card may be applied by the server in either
  /// order; callers that care should track them with a
  /// [`huddle_core::request::ResourceSlot`].
  pub async fn move_card(&self, card_id: i64, to: CardMove) -> ApiResult<KanbanCard> {
    self
      .send_json(
        Method::PATCH,
        &format!("/cards/{card_id}/position"),
        &to,
        MOVE_CARD_FAILED,
      )
      .await
  }

  /// `DELETE /cards/:id`
  pub async fn delete_card(&self, card_id: i64) -> ApiResult<()> {
    self
      .send_empty(Method::DELETE, &format!("/cards/{card_id}"), DELETE_CARD_FAILED)
      .await
  }
}
