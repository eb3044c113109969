//! Workspaces.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/workspaces` | Workspaces the user belongs to |
//! | `GET`  | `/workspaces/:id` | |
//! | `POST` | `/workspaces` | Body: [`NewWorkspace`] |
//! | `GET`  | `/workspaces/:id/members` | |

use huddle_core::workspace::{NewWorkspace, Workspace, WorkspaceMember};
use reqwest::Method;

use crate::{ApiClient, ApiResult};

pub const LIST_FAILED: &str = "Could not load your workspaces.";
pub const GET_FAILED: &str = "Could not load the workspace.";
pub const CREATE_FAILED: &str = "Could not create the workspace.";
pub const MEMBERS_FAILED: &str = "Could not load workspace members.";

impl ApiClient {
  /// `GET /workspaces`
  pub async fn list_workspaces(&self) -> ApiResult<Vec<Workspace>> {
    self.get_json("/workspaces", &[], LIST_FAILED).await
  }

  /// `GET /workspaces/:id`
  pub async fn get_workspace(&self, id: i64) -> ApiResult<Workspace> {
    self
      .get_json(&format!("/workspaces/{id}"), &[], GET_FAILED)
      .await
  }

  /// `POST /workspaces`
  pub async fn create_workspace(&self, workspace: &NewWorkspace) -> ApiResult<Workspace> {
    self
      .send_json(Method::POST, "/workspaces", workspace, CREATE_FAILED)
      .await
  }

  /// `GET /workspaces/:id/members`
  pub async fn list_members(&self, id: i64) -> ApiResult<Vec<WorkspaceMember>> {
    self
      .get_json(&format!("/workspaces/{id}/members"), &[], MEMBERS_FAILED)
      .await
  }
}
