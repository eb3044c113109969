//! Workspaces and their membership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
  pub id:          i64,
  pub name:        String,
  pub description: Option<String>,
  /// Absolute or root-relative; `None` means the UI shows the initial.
  pub icon_url:    Option<String>,
  pub owner_id:    i64,
  pub created_at:  DateTime<Utc>,
}

impl Workspace {
  /// The textual stand-in shown when the workspace has no icon.
  pub fn initial(&self) -> String {
    self
      .name
      .chars()
      .next()
      .map(|c| c.to_uppercase().collect())
      .unwrap_or_else(|| "?".to_string())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkspaceRole {
  Owner,
  Admin,
  Member,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceMember {
  pub user: User,
  pub role: WorkspaceRole,
}

/// Body of `POST /workspaces`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkspace {
  pub name:        String,
  pub description: Option<String>,
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  fn workspace(name: &str) -> Workspace {
    Workspace {
      id:          1,
      name:        name.into(),
      description: None,
      icon_url:    None,
      owner_id:    7,
      created_at:  Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    }
  }

  #[test]
  fn initial_is_uppercased_first_char() {
    assert_eq!(workspace("design team").initial(), "D");
  }

  #[test]
  fn initial_of_empty_name_is_placeholder() {
    assert_eq!(workspace("").initial(), "?");
  }

  #[test]
  fn deserialises_camel_case_payload() {
    let json = serde_json::json!({
      "id": 3,
      "name": "Ops",
      "description": null,
      "iconUrl": "/files/ops.png",
      "ownerId": 9,
      "createdAt": "2024-03-01T09:00:00Z",
    });
    let ws: Workspace = serde_json::from_value(json).unwrap();
    assert_eq!(ws.icon_url.as_deref(), Some("/files/ops.png"));
    assert_eq!(ws.owner_id, 9);
  }
}
