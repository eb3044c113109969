//! Create, update and delete wrappers: what goes over the wire.

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use huddle_core::{
  announcement::AnnouncementDraft,
  bulletin::BulletinPostDraft,
  chat::NewChatRoom,
  kanban::KanbanCardDraft,
  schedule::ScheduleDraft,
  user::SignupRequest,
  workspace::{NewWorkspace, WorkspaceRole},
};
use serde_json::{Value, json};

use common::{Recorded, authed_client, spawn_recording_backend};

#[track_caller]
fn assert_request(request: &Recorded, method: &str, path: &str) {
  assert_eq!(
    (request.method.as_str(), request.path.as_str()),
    (method, path),
    "{request:?}"
  );
}

#[track_caller]
fn assert_calls(requests: &[Recorded], expected: &[(&str, &str)]) {
  let seen: Vec<_> = requests
    .iter()
    .map(|r| (r.method.as_str(), r.path.as_str()))
    .collect();
  assert_eq!(seen, expected);
}

// ─── Auth ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn signup_and_profile_image() {
  let (addr, recorder) = spawn_recording_backend().await;
  let client = authed_client(addr);

  let user = client
    .signup(&SignupRequest {
      email:    "grace@example.com".into(),
      password: "hopper".into(),
      name:     "Grace".into(),
    })
    .await
    .unwrap();
  assert_eq!(user.name, "Grace");
  let request = recorder.last();
  assert_request(&request, "POST", "/api/auth/signup");
  assert_eq!(
    request.body,
    json!({ "email": "grace@example.com", "password": "hopper", "name": "Grace" })
  );

  let user = client.update_profile_image("/avatars/1.png").await.unwrap();
  assert_eq!(user.profile_image_url.as_deref(), Some("/avatars/1.png"));
  let request = recorder.last();
  assert_request(&request, "PUT", "/api/users/me/profile-image");
  assert_eq!(request.body, json!({ "profileImageUrl": "/avatars/1.png" }));
}

// ─── Workspaces ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn workspace_get_create_and_members() {
  let (addr, recorder) = spawn_recording_backend().await;
  let client = authed_client(addr);

  let workspace = client.get_workspace(7).await.unwrap();
  assert_eq!(workspace.id, 7);

  let created = client
    .create_workspace(&NewWorkspace {
      name:        "Research".into(),
      description: Some("Papers".into()),
    })
    .await
    .unwrap();
  assert_eq!(created.name, "Research");
  assert_eq!(created.description.as_deref(), Some("Papers"));
  assert_eq!(
    recorder.last().body,
    json!({ "name": "Research", "description": "Papers" })
  );

  let members = client.list_members(7).await.unwrap();
  assert_eq!(members.len(), 2);
  assert_eq!(members[0].role, WorkspaceRole::Owner);
  assert_eq!(members[1].user.id, 2);

  assert_calls(&recorder.requests(), &[
    ("GET", "/api/workspaces/7"),
    ("POST", "/api/workspaces"),
    ("GET", "/api/workspaces/7/members"),
  ]);
}

// ─── Announcements ───────────────────────────────────────────────────────────

#[tokio::test]
async fn announcement_crud() {
  let (addr, recorder) = spawn_recording_backend().await;
  let client = authed_client(addr);
  let draft = AnnouncementDraft {
    title:   "Offsite".into(),
    content: "Friday".into(),
    pinned:  true,
  };

  let created = client.create_announcement(3, &draft).await.unwrap();
  assert_eq!(created.workspace_id, 3);
  assert!(created.pinned);
  assert_eq!(
    recorder.last().body,
    json!({ "title": "Offsite", "content": "Friday", "pinned": true })
  );

  assert_eq!(client.get_announcement(11).await.unwrap().id, 11);

  let updated = client
    .update_announcement(11, &AnnouncementDraft {
      pinned: false,
      ..draft
    })
    .await
    .unwrap();
  assert!(!updated.pinned);
  assert_eq!(recorder.last().body["pinned"], json!(false));

  client.delete_announcement(11).await.unwrap();

  assert_calls(&recorder.requests(), &[
    ("POST", "/api/workspaces/3/announcements"),
    ("GET", "/api/announcements/11"),
    ("PUT", "/api/announcements/11"),
    ("DELETE", "/api/announcements/11"),
  ]);
}

// ─── Bulletin ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn post_comment_and_attachment_crud() {
  let (addr, recorder) = spawn_recording_backend().await;
  let client = authed_client(addr);
  let draft = BulletinPostDraft {
    title:   "Minutes".into(),
    content: "We met".into(),
  };

  let post = client.create_post(3, &draft).await.unwrap();
  assert_eq!((post.workspace_id, post.title.as_str()), (3, "Minutes"));
  assert_eq!(
    recorder.last().body,
    json!({ "title": "Minutes", "content": "We met" })
  );

  assert_eq!(client.get_post(12).await.unwrap().id, 12);
  let updated = client
    .update_post(12, &BulletinPostDraft {
      title: "Minutes (final)".into(),
      ..draft
    })
    .await
    .unwrap();
  assert_eq!(updated.title, "Minutes (final)");

  let comments = client.list_comments(12).await.unwrap();
  assert_eq!(comments[0].post_id, 12);
  let comment = client.create_comment(12, "Thanks").await.unwrap();
  assert_eq!(comment.content, "Thanks");
  assert_eq!(recorder.last().body, json!({ "content": "Thanks" }));

  client.delete_comment(2).await.unwrap();
  client.delete_attachment(1200).await.unwrap();
  client.delete_post(12).await.unwrap();

  assert_calls(&recorder.requests(), &[
    ("POST", "/api/workspaces/3/posts"),
    ("GET", "/api/posts/12"),
    ("PUT", "/api/posts/12"),
    ("GET", "/api/posts/12/comments"),
    ("POST", "/api/posts/12/comments"),
    ("DELETE", "/api/comments/2"),
    ("DELETE", "/api/attachments/1200"),
    ("DELETE", "/api/posts/12"),
  ]);
}

// ─── Schedules ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn schedule_crud_sends_camel_case() {
  let (addr, recorder) = spawn_recording_backend().await;
  let client = authed_client(addr);
  let draft = ScheduleDraft {
    title:           "Review".into(),
    description:     None,
    starts_at:       Utc.with_ymd_and_hms(2024, 3, 20, 14, 0, 0).unwrap(),
    ends_at:         Utc.with_ymd_and_hms(2024, 3, 20, 15, 0, 0).unwrap(),
    all_day:         false,
    participant_ids: vec![1, 2],
  };

  let created = client.create_schedule(3, &draft).await.unwrap();
  assert_eq!(created.workspace_id, 3);
  assert_eq!(created.starts_at, draft.starts_at);
  assert_eq!(
    recorder.last().body,
    json!({
      "title": "Review",
      "description": null,
      "startsAt": "2024-03-20T14:00:00Z",
      "endsAt": "2024-03-20T15:00:00Z",
      "allDay": false,
      "participantIds": [1, 2],
    })
  );

  let updated = client
    .update_schedule(13, &ScheduleDraft {
      all_day: true,
      ..draft
    })
    .await
    .unwrap();
  assert!(updated.all_day);
  assert_eq!(recorder.last().body["allDay"], json!(true));

  client.delete_schedule(13).await.unwrap();

  assert_calls(&recorder.requests(), &[
    ("POST", "/api/workspaces/3/schedules"),
    ("PUT", "/api/schedules/13"),
    ("DELETE", "/api/schedules/13"),
  ]);
}

// ─── Chat ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_room_sends_member_ids() {
  let (addr, recorder) = spawn_recording_backend().await;
  let client = authed_client(addr);

  let room = client
    .create_room(3, &NewChatRoom {
      name:       "design".into(),
      member_ids: vec![1, 2, 5],
    })
    .await
    .unwrap();
  assert_eq!(room.name, "design");
  assert_eq!(room.member_count, 3);

  let request = recorder.last();
  assert_request(&request, "POST", "/api/workspaces/3/chat/rooms");
  assert_eq!(request.body, json!({ "name": "design", "memberIds": [1, 2, 5] }));
}

// ─── Kanban ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn boards_and_new_card() {
  let (addr, recorder) = spawn_recording_backend().await;
  let client = authed_client(addr);

  let boards = client.list_boards(3).await.unwrap();
  assert_eq!(boards.len(), 1);
  assert_eq!(boards[0].workspace_id, 3);
  assert_eq!(boards[0].columns.len(), 2);
  assert_request(&recorder.last(), "GET", "/api/workspaces/3/boards");

  let card = client
    .create_card(1, &KanbanCardDraft {
      column_id:   2,
      title:       "Ship it".into(),
      description: None,
      assignee_id: Some(4),
      due_date:    NaiveDate::from_ymd_opt(2024, 4, 1),
    })
    .await
    .unwrap();
  assert_eq!(card.column_id, 2);
  assert_eq!(card.due_date, NaiveDate::from_ymd_opt(2024, 4, 1));

  let request = recorder.last();
  assert_request(&request, "POST", "/api/boards/1/cards");
  let keys: Vec<&str> = request
    .body
    .as_object()
    .map(|body| body.keys().map(String::as_str).collect())
    .unwrap_or_default();
  assert_eq!(keys.len(), 5, "{keys:?}");
  assert_eq!(request.body["columnId"], json!(2));
  assert_eq!(request.body["assigneeId"], json!(4));
  assert_eq!(request.body["dueDate"], json!("2024-04-01"));
  assert_eq!(request.body["description"], Value::Null);
}
