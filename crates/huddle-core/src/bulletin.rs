//! Bulletin board posts, their comments and attachments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// A file attached to a bulletin post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
  pub id:           i64,
  pub file_name:    String,
  /// Absolute or root-relative; resolve before download.
  pub file_url:     String,
  pub content_type: Option<String>,
  /// Size in bytes.
  pub size:         u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletinPost {
  pub id:            i64,
  pub workspace_id:  i64,
  pub title:         String,
  pub content:       String,
  pub author:        User,
  #[serde(default)]
  pub comment_count: u32,
  #[serde(default)]
  pub attachments:   Vec<Attachment>,
  pub created_at:    DateTime<Utc>,
  pub updated_at:    Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletinPostDraft {
  pub title:   String,
  pub content: String,
}

/// Filters accepted by the post listing.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
  /// Matches title or content.
  pub keyword: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletinComment {
  pub id:         i64,
  pub post_id:    i64,
  pub author:     User,
  pub content:    String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
  pub content: String,
}

/// A file queued for upload as a post attachment.
#[derive(Debug, Clone)]
pub struct AttachmentUpload {
  pub file_name:    String,
  pub content_type: Option<String>,
  pub bytes:        Vec<u8>,
}
