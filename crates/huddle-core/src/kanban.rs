//! Kanban boards, columns and cards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanBoard {
  pub id:           i64,
  pub workspace_id: i64,
  pub name:         String,
  #[serde(default)]
  pub columns:      Vec<KanbanColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanColumn {
  pub id:       i64,
  pub name:     String,
  pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCard {
  pub id:          i64,
  pub column_id:   i64,
  pub title:       String,
  pub description: Option<String>,
  pub assignee:    Option<User>,
  pub position:    u32,
  pub due_date:    Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCardDraft {
  pub column_id:   i64,
  pub title:       String,
  pub description: Option<String>,
  pub assignee_id: Option<i64>,
  pub due_date:    Option<NaiveDate>,
}

/// Body of `PATCH /cards/{id}/position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMove {
  pub column_id: i64,
  pub position:  u32,
}

impl KanbanBoard {
  /// Group `cards` under this board's columns, ordered by column then card
  /// position. Cards whose column is unknown are dropped.
  pub fn group_cards<'a>(
    &'a self,
    cards: &'a [KanbanCard],
  ) -> Vec<(&'a KanbanColumn, Vec<&'a KanbanCard>)> {
    let mut columns: Vec<&KanbanColumn> = self.columns.iter().collect();
    columns.sort_by_key(|c| c.position);
    columns
      .into_iter()
      .map(|column| {
        let mut in_column: Vec<&KanbanCard> =
          cards.iter().filter(|c| c.column_id == column.id).collect();
        in_column.sort_by_key(|c| c.position);
        (column, in_column)
      })
      .collect()
  }
}
