//! Bulletin board posts, comments and attachments.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/workspaces/:wid/posts` | `?page&size[&keyword]` |
//! | `GET`    | `/posts/:id` | |
//! | `POST`   | `/workspaces/:wid/posts` | Body: [`BulletinPostDraft`] |
//! | `PUT`    | `/posts/:id` | Body: [`BulletinPostDraft`] |
//! | `DELETE` | `/posts/:id` | |
//! | `GET`    | `/posts/:id/comments` | |
//! | `POST`   | `/posts/:id/comments` | Body: `{"content":"..."}` |
//! | `DELETE` | `/comments/:id` | |
//! | `POST`   | `/posts/:id/attachments` | `multipart/form-data`, field `file` |
//! | `DELETE` | `/attachments/:id` | |

use huddle_core::{
  bulletin::{
    Attachment, AttachmentUpload, BulletinComment, BulletinPost, BulletinPostDraft, NewComment,
    PostQuery,
  },
  page::{Page, PageRequest},
};
use reqwest::{
  Method,
  multipart::{Form, Part},
};

use super::page_query;
use crate::{ApiClient, ApiError, ApiResult};

pub const LIST_POSTS_FAILED: &str = "Could not load posts.";
pub const GET_POST_FAILED: &str = "Could not load the post.";
pub const CREATE_POST_FAILED: &str = "Could not publish the post.";
pub const UPDATE_POST_FAILED: &str = "Could not update the post.";
pub const DELETE_POST_FAILED: &str = "Could not delete the post.";
pub const LIST_COMMENTS_FAILED: &str = "Could not load comments.";
pub const CREATE_COMMENT_FAILED: &str = "Could not add the comment.";
pub const DELETE_COMMENT_FAILED: &str = "Could not delete the comment.";
pub const UPLOAD_FAILED: &str = "Could not upload the attachment.";
pub const DELETE_ATTACHMENT_FAILED: &str = "Could not delete the attachment.";

impl ApiClient {
  // ── Posts ─────────────────────────────────────────────────────────────────

  /// `GET /workspaces/:wid/posts?page=&size=[&keyword=]`
  pub async fn list_posts(
    &self,
    workspace_id: i64,
    page: PageRequest,
    filter: &PostQuery,
  ) -> ApiResult<Page<BulletinPost>> {
    let mut query = page_query(page).to_vec();
    if let Some(keyword) = filter.keyword.as_deref().filter(|k| !k.trim().is_empty()) {
      query.push(("keyword", keyword.trim().to_string()));
    }
    self
      .get_json(
        &format!("/workspaces/{workspace_id}/posts"),
        &query,
        LIST_POSTS_FAILED,
      )
      .await
  }

  /// `GET /posts/:id`
  pub async fn get_post(&self, id: i64) -> ApiResult<BulletinPost> {
    self
      .get_json(&format!("/posts/{id}"), &[], GET_POST_FAILED)
      .await
  }

  /// `POST /workspaces/:wid/posts`
  pub async fn create_post(
    &self,
    workspace_id: i64,
    draft: &BulletinPostDraft,
  ) -> ApiResult<BulletinPost> {
    self
      .send_json(
        Method::POST,
        &format!("/workspaces/{workspace_id}/posts"),
        draft,
        CREATE_POST_FAILED,
      )
      .await
  }

  /// `PUT /posts/:id`
  pub async fn update_post(&self, id: i64, draft: &BulletinPostDraft) -> ApiResult<BulletinPost> {
    self
      .send_json(Method::PUT, &format!("/posts/{id}"), draft, UPDATE_POST_FAILED)
      .await
  }

  /// `DELETE /posts/:id`
  pub async fn delete_post(&self, id: i64) -> ApiResult<()> {
    self
      .send_empty(Method::DELETE, &format!("/posts/{id}"), DELETE_POST_FAILED)
      .await
  }

  // ── Comments ──────────────────────────────────────────────────────────────

  /// `GET /posts/:id/comments`
  pub async fn list_comments(&self, post_id: i64) -> ApiResult<Vec<BulletinComment>> {
    self
      .get_json(&format!("/posts/{post_id}/comments"), &[], LIST_COMMENTS_FAILED)
      .await
  }

  /// `POST /posts/:id/comments`
  pub async fn create_comment(&self, post_id: i64, content: &str) -> ApiResult<BulletinComment> {
    let body = NewComment {
      content: content.to_string(),
    };
    self
      .send_json(
        Method::POST,
        &format!("/posts/{post_id}/comments"),
        &body,
        CREATE_COMMENT_FAILED,
      )
      .await
  }

  /// `DELETE /comments/:id`
  pub async fn delete_comment(&self, id: i64) -> ApiResult<()> {
    self
      .send_empty(Method::DELETE, &format!("/comments/{id}"), DELETE_COMMENT_FAILED)
      .await
  }

  // ── Attachments ───────────────────────────────────────────────────────────

  /// `POST /posts/:id/attachments` as `multipart/form-data`.
  pub async fn upload_attachment(
    &self,
    post_id: i64,
    upload: AttachmentUpload,
  ) -> ApiResult<Attachment> {
    let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
    if let Some(content_type) = upload.content_type.as_deref() {
      part = part
        .mime_str(content_type)
        .map_err(|e| ApiError::transport(&e, UPLOAD_FAILED))?;
    }
    let form = Form::new().part("file", part);

    self
      .execute_json(
        Method::POST,
        &format!("/posts/{post_id}/attachments"),
        UPLOAD_FAILED,
        |req| req.multipart(form),
      )
      .await
  }

  /// `DELETE /attachments/:id`
  pub async fn delete_attachment(&self, id: i64) -> ApiResult<()> {
    self
      .send_empty(
        Method::DELETE,
        &format!("/attachments/{id}"),
        DELETE_ATTACHMENT_FAILED,
      )
      .await
  }
}
