//! Workspace announcements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
  pub id:           i64,
  pub workspace_id: i64,
  pub title:        String,
  pub content:      String,
  pub author:       User,
  /// Pinned announcements are listed first by the backend.
  #[serde(default)]
  pub pinned:       bool,
  pub created_at:   DateTime<Utc>,
  pub updated_at:   Option<DateTime<Utc>>,
}

/// Body of the create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementDraft {
  pub title:   String,
  pub content: String,
  #[serde(default)]
  pub pinned:  bool,
}
