//! Shared calendar.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/workspaces/:wid/schedules` | `?start=YYYY-MM-DD&end=YYYY-MM-DD`, inclusive |
//! | `POST`   | `/workspaces/:wid/schedules` | Body: [`ScheduleDraft`] |
//! | `PUT`    | `/schedules/:id` | Body: [`ScheduleDraft`] |
//! | `DELETE` | `/schedules/:id` | |

use huddle_core::schedule::{Schedule, ScheduleDraft, ScheduleRange};
use reqwest::Method;

use crate::{ApiClient, ApiResult};

pub const LIST_FAILED: &str = "Could not load the schedule.";
pub const CREATE_FAILED: &str = "Could not add the event.";
pub const UPDATE_FAILED: &str = "Could not update the event.";
pub const DELETE_FAILED: &str = "Could not delete the event.";

impl ApiClient {
  /// `GET /workspaces/:wid/schedules?start=&end=`
  pub async fn list_schedules(
    &self,
    workspace_id: i64,
    range: ScheduleRange,
  ) -> ApiResult<Vec<Schedule>> {
    let query = [
      ("start", range.start.format("%Y-%m-%d").to_string()),
      ("end", range.end.format("%Y-%m-%d").to_string()),
    ];
    self
      .get_json(&format!("/workspaces/{workspace_id}/schedules"), &query, LIST_FAILED)
      .await
  }

  /// `POST /workspaces/:wid/schedules`
  pub async fn create_schedule(
    &self,
    workspace_id: i64,
    draft: &ScheduleDraft,
  ) -> ApiResult<Schedule> {
    self
      .send_json(
        Method::POST,
        &format!("/workspaces/{workspace_id}/schedules"),
        draft,
        CREATE_FAILED,
      )
      .await
  }

  /// `PUT /schedules/:id`
  pub async fn update_schedule(&self, id: i64, draft: &ScheduleDraft) -> ApiResult<Schedule> {
    self
      .send_json(Method::PUT, &format!("/schedules/{id}"), draft, UPDATE_FAILED)
      .await
  }

  /// `DELETE /schedules/:id`
  pub async fn delete_schedule(&self, id: i64) -> ApiResult<()> {
    self
      .send_empty(Method::DELETE, &format!("/schedules/{id}"), DELETE_FAILED)
      .await
  }
}
