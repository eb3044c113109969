//! Announcements.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/workspaces/:wid/announcements` | `?page&size` |
//! | `GET`    | `/announcements/:id` | |
//! | `POST`   | `/workspaces/:wid/announcements` | Body: [`AnnouncementDraft`] |
//! | `PUT`    | `/announcements/:id` | Body: [`AnnouncementDraft`] |
//! | `DELETE` | `/announcements/:id` | |

use huddle_core::{
  announcement::{Announcement, AnnouncementDraft},
  page::{Page, PageRequest},
};
use reqwest::Method;

use super::page_query;
use crate::{ApiClient, ApiResult};

pub const LIST_FAILED: &str = "Could not load announcements.";
pub const GET_FAILED: &str = "Could not load the announcement.";
pub const CREATE_FAILED: &str = "Could not post the announcement.";
pub const UPDATE_FAILED: &str = "Could not update the announcement.";
pub const DELETE_FAILED: &str = "Could not delete the announcement.";

impl ApiClient {
  /// `GET /workspaces/:wid/announcements?page=&size=`
  pub async fn list_announcements(
    &self,
    workspace_id: i64,
    page: PageRequest,
  ) -> ApiResult<Page<Announcement>> {
    self
      .get_json(
        &format!("/workspaces/{workspace_id}/announcements"),
        &page_query(page),
        LIST_FAILED,
      )
      .await
  }

  /// `GET /announcements/:id`
  pub async fn get_announcement(&self, id: i64) -> ApiResult<Announcement> {
    self
      .get_json(&format!("/announcements/{id}"), &[], GET_FAILED)
      .await
  }

  /// `POST /workspaces/:wid/announcements`
  pub async fn create_announcement(
    &self,
    workspace_id: i64,
    draft: &AnnouncementDraft,
  ) -> ApiResult<Announcement> {
    self
      .send_json(
        Method::POST,
        &format!("/workspaces/{workspace_id}/announcements"),
        draft,
        CREATE_FAILED,
      )
      .await
  }

  /// `PUT /announcements/:id`
  pub async fn update_announcement(
    &self,
    id: i64,
    draft: &AnnouncementDraft,
  ) -> ApiResult<Announcement> {
    self
      .send_json(Method::PUT, &format!("/announcements/{id}"), draft, UPDATE_FAILED)
      .await
  }

  /// `DELETE /announcements/:id`
  pub async fn delete_announcement(&self, id: i64) -> ApiResult<()> {
    self
      .send_empty(Method::DELETE, &format!("/announcements/{id}"), DELETE_FAILED)
      .await
  }
}
