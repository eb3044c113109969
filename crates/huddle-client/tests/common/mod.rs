//! In-process stand-in for the Huddle backend.

#![allow(dead_code)]

use std::{
  collections::HashMap,
  net::SocketAddr,
  sync::{Arc, Mutex},
};

use axum::{
  Json, Router,
  extract::{Multipart, Path, Query, State},
  http::{HeaderMap, Method, StatusCode, Uri},
  response::{IntoResponse, Response},
  routing::{delete, get, patch, post},
};
use huddle_client::{ApiClient, ClientConfig, MemoryTokens, Session};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const ACCESS_TOKEN: &str = "access-1";
pub const REFRESH_TOKEN: &str = "refresh-1";

pub fn user_json(id: i64) -> Value {
  json!({
    "id": id,
    "email": format!("user{id}@example.com"),
    "name": format!("User {id}"),
    "profileImageUrl": null,
  })
}

fn workspace_json(id: i64, icon: Option<&str>) -> Value {
  json!({
    "id": id,
    "name": format!("Workspace {id}"),
    "description": null,
    "iconUrl": icon,
    "ownerId": 1,
    "createdAt": "2024-03-01T09:00:00Z",
  })
}

fn announcement_json(id: i64, wid: i64) -> Value {
  json!({
    "id": id,
    "workspaceId": wid,
    "title": "Welcome",
    "content": "Hello team",
    "author": user_json(1),
    "pinned": false,
    "createdAt": "2024-03-02T10:00:00Z",
    "updatedAt": null,
  })
}

fn post_json(id: i64, wid: i64) -> Value {
  json!({
    "id": id,
    "workspaceId": wid,
    "title": "Notes",
    "content": "body",
    "author": user_json(2),
    "commentCount": 1,
    "attachments": [],
    "createdAt": "2024-03-02T10:00:00Z",
    "updatedAt": null,
  })
}

fn comment_json(id: i64, post_id: i64) -> Value {
  json!({
    "id": id,
    "postId": post_id,
    "author": user_json(2),
    "content": "Nice",
    "createdAt": "2024-03-02T11:00:00Z",
  })
}

fn schedule_json(id: i64, wid: i64) -> Value {
  json!({
    "id": id,
    "workspaceId": wid,
    "title": "Planning",
    "description": null,
    "startsAt": "2024-03-04T09:00:00Z",
    "endsAt": "2024-03-04T10:00:00Z",
    "allDay": false,
    "participants": [user_json(1)],
  })
}

fn card_json(id: i64) -> Value {
  json!({
    "id": id,
    "columnId": 1,
    "title": "Card",
    "description": null,
    "assignee": null,
    "position": 0,
    "dueDate": null,
  })
}

/// `base` with the keys it already has replaced by the request's values.
fn overlay(mut base: Value, body: &Value) -> Value {
  if let (Some(base), Some(body)) = (base.as_object_mut(), body.as_object()) {
    for (key, value) in body {
      if let Some(slot) = base.get_mut(key) {
        *slot = value.clone();
      }
    }
  }
  base
}

fn authorized(headers: &HeaderMap) -> bool {
  headers
    .get("authorization")
    .and_then(|v| v.to_str().ok())
    .is_some_and(|v| v == format!("Bearer {ACCESS_TOKEN}"))
}

fn unauthorized() -> Response {
  (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Token expired" }))).into_response()
}

// ─── Handlers ────────────────────────────────────────────────────────────────

async fn login(Json(body): Json<Value>) -> Response {
  if body["email"] == "ada@example.com" && body["password"] == "hunter2" {
    Json(json!({
      "tokens": { "accessToken": ACCESS_TOKEN, "refreshToken": REFRESH_TOKEN },
      "user": user_json(1),
    }))
    .into_response()
  } else {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" }))).into_response()
  }
}

async fn refresh(Json(body): Json<Value>) -> Response {
  if body["refreshToken"] == REFRESH_TOKEN {
    Json(json!({ "accessToken": ACCESS_TOKEN, "refreshToken": "refresh-2" })).into_response()
  } else {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": "bad refresh token" }))).into_response()
  }
}

async fn logout(headers: HeaderMap) -> Response {
  if authorized(&headers) {
    StatusCode::NO_CONTENT.into_response()
  } else {
    unauthorized()
  }
}

async fn me(headers: HeaderMap) -> Response {
  if authorized(&headers) {
    Json(user_json(1)).into_response()
  } else {
    unauthorized()
  }
}

async fn workspaces(headers: HeaderMap) -> Response {
  if !authorized(&headers) {
    return unauthorized();
  }
  Json(json!([workspace_json(1, Some("/icons/1.png")), workspace_json(2, None)])).into_response()
}

async fn announcements(
  Path(wid): Path<i64>,
  Query(q): Query<HashMap<String, String>>,
) -> Response {
  match wid {
    // Structured server error.
    2 => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": "X" }))).into_response(),
    // Error without a parseable body.
    3 => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
    _ => {
      let page: u32 = q.get("page").and_then(|p| p.parse().ok()).unwrap_or(99);
      let size: u32 = q.get("size").and_then(|s| s.parse().ok()).unwrap_or(99);
      Json(json!({
        "content": [{
          "id": 10,
          "workspaceId": wid,
          "title": "Welcome",
          "content": "Hello team",
          "author": user_json(1),
          "pinned": true,
          "createdAt": "2024-03-02T10:00:00Z",
          "updatedAt": null,
        }],
        "page": page,
        "size": size,
        "totalElements": 1,
        "last": true,
      }))
      .into_response()
    }
  }
}

async fn posts(Path(wid): Path<i64>, Query(q): Query<HashMap<String, String>>) -> Response {
  let title = q.get("keyword").cloned().unwrap_or_else(|| "all".into());
  Json(json!({
    "content": [{
      "id": 9,
      "workspaceId": wid,
      "title": title,
      "content": "body",
      "author": user_json(2),
      "commentCount": 0,
      "attachments": [],
      "createdAt": "2024-03-02T10:00:00Z",
      "updatedAt": null,
    }],
    "page": 0,
    "size": 20,
    "totalElements": 1,
    "last": true,
  }))
  .into_response()
}

async fn upload(Path(post_id): Path<i64>, mut multipart: Multipart) -> Response {
  while let Ok(Some(field)) = multipart.next_field().await {
    if field.name() != Some("file") {
      continue;
    }
    let file_name = field.file_name().unwrap_or("unnamed").to_string();
    let content_type = field.content_type().map(str::to_string);
    let bytes = field.bytes().await.unwrap_or_default();
    return Json(json!({
      "id": post_id * 100,
      "fileName": file_name,
      "fileUrl": format!("/files/{file_name}"),
      "contentType": content_type,
      "size": bytes.len(),
    }))
    .into_response();
  }
  (StatusCode::BAD_REQUEST, Json(json!({ "message": "file missing" }))).into_response()
}

async fn schedules(Path(wid): Path<i64>, Query(q): Query<HashMap<String, String>>) -> Response {
  let start = q.get("start").cloned().unwrap_or_default();
  let end = q.get("end").cloned().unwrap_or_default();
  Json(json!([{
    "id": 1,
    "workspaceId": wid,
    "title": "Planning",
    "description": format!("{start}..{end}"),
    "startsAt": "2024-03-04T09:00:00Z",
    "endsAt": "2024-03-04T10:00:00Z",
    "allDay": false,
    "participants": [user_json(1)],
  }]))
  .into_response()
}

async fn rooms(Path(wid): Path<i64>) -> Response {
  Json(json!([
    { "id": 5, "workspaceId": wid, "name": "general", "memberCount": 3, "lastMessage": null },
    { "id": 6, "workspaceId": wid, "name": "random", "memberCount": 2, "lastMessage": null },
  ]))
  .into_response()
}

async fn messages(Path(room_id): Path<i64>, Query(q): Query<HashMap<String, String>>) -> Response {
  let limit: i64 = q.get("limit").and_then(|l| l.parse().ok()).unwrap_or(0);
  let before = q.get("before").cloned().unwrap_or_else(|| "none".into());
  Json(json!([{
    "id": limit,
    "roomId": room_id,
    "sender": user_json(2),
    "content": format!("before={before}"),
    "sentAt": "2024-03-02T10:00:00Z",
  }]))
  .into_response()
}

async fn send_message(Path(room_id): Path<i64>, Json(body): Json<Value>) -> Response {
  (
    StatusCode::CREATED,
    Json(json!({
      "id": 77,
      "roomId": room_id,
      "sender": user_json(1),
      "content": body["content"],
      "sentAt": "2024-03-02T10:05:00Z",
    })),
  )
    .into_response()
}

async fn cards() -> Response {
  // Not the declared shape.
  Json(json!({ "oops": true })).into_response()
}

async fn move_card(Path(card_id): Path<i64>, Json(body): Json<Value>) -> Response {
  Json(json!({
    "id": card_id,
    "columnId": body["columnId"],
    "title": "Moved",
    "description": null,
    "assignee": null,
    "position": body["position"],
    "dueDate": "2024-04-01",
  }))
  .into_response()
}

// ─── Recorded CRUD ───────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Recorded {
  pub method: String,
  pub path:   String,
  /// The JSON body, or `Null` when there was none.
  pub body:   Value,
}

/// Requests answered by [`crud`], oldest first.
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl Recorder {
  fn push(&self, request: Recorded) { self.0.lock().unwrap().push(request); }

  pub fn requests(&self) -> Vec<Recorded> { self.0.lock().unwrap().clone() }

  pub fn last(&self) -> Recorded { self.requests().pop().expect("no request recorded") }
}

/// Answers every create, read, update and delete call the named handlers
/// don't, echoing the request body into a fixture of the right shape.
async fn crud(
  State(recorder): State<Recorder>,
  method: Method,
  uri: Uri,
  body: String,
) -> Response {
  let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
  let path = uri.path().to_string();
  recorder.push(Recorded {
    method: method.to_string(),
    path:   path.clone(),
    body:   body.clone(),
  });

  let segments: Vec<&str> = path.trim_start_matches("/api/").split('/').collect();
  let id = |segment: &str| segment.parse::<i64>().unwrap_or_default();
  let created = |value: Value| (StatusCode::CREATED, Json(value)).into_response();

  match (method.as_str(), segments.as_slice()) {
    ("DELETE", _) => StatusCode::NO_CONTENT.into_response(),

    ("POST", ["auth", "signup"]) => created(overlay(user_json(4), &body)),
    ("PUT", ["users", "me", "profile-image"]) => Json(overlay(user_json(1), &body)).into_response(),

    // Not found, with no body to explain why.
    ("GET", ["workspaces", "404"]) => StatusCode::NOT_FOUND.into_response(),
    ("GET", ["workspaces", wid]) => Json(workspace_json(id(wid), None)).into_response(),
    ("POST", ["workspaces"]) => created(overlay(workspace_json(3, None), &body)),
    ("GET", ["workspaces", _, "members"]) => Json(json!([
      { "user": user_json(1), "role": "OWNER" },
      { "user": user_json(2), "role": "MEMBER" },
    ]))
    .into_response(),

    ("GET", ["announcements", aid]) => Json(announcement_json(id(aid), 1)).into_response(),
    ("PUT", ["announcements", aid]) => {
      Json(overlay(announcement_json(id(aid), 1), &body)).into_response()
    }
    ("POST", ["workspaces", wid, "announcements"]) => {
      created(overlay(announcement_json(11, id(wid)), &body))
    }

    ("GET", ["posts", pid]) => Json(post_json(id(pid), 1)).into_response(),
    ("PUT", ["posts", pid]) => Json(overlay(post_json(id(pid), 1), &body)).into_response(),
    ("POST", ["workspaces", wid, "posts"]) => created(overlay(post_json(12, id(wid)), &body)),
    ("GET", ["posts", pid, "comments"]) => Json(json!([comment_json(1, id(pid))])).into_response(),
    ("POST", ["posts", pid, "comments"]) => created(overlay(comment_json(2, id(pid)), &body)),

    ("POST", ["workspaces", wid, "schedules"]) => {
      created(overlay(schedule_json(13, id(wid)), &body))
    }
    ("PUT", ["schedules", sid]) => Json(overlay(schedule_json(id(sid), 1), &body)).into_response(),

    ("POST", ["workspaces", wid, "chat", "rooms"]) => created(json!({
      "id": 14,
      "workspaceId": id(wid),
      "name": body["name"],
      "memberCount": body["memberIds"].as_array().map_or(0, Vec::len),
      "lastMessage": null,
    })),

    ("GET", ["workspaces", wid, "boards"]) => Json(json!([{
      "id": 1,
      "workspaceId": id(wid),
      "name": "Sprint",
      "columns": [
        { "id": 2, "name": "Done", "position": 1 },
        { "id": 1, "name": "To do", "position": 0 },
      ],
    }]))
    .into_response(),
    ("POST", ["boards", _, "cards"]) => created(overlay(card_json(15), &body)),

    _ => StatusCode::NOT_FOUND.into_response(),
  }
}

// ─── Server ──────────────────────────────────────────────────────────────────

pub fn router(recorder: Recorder) -> Router {
  Router::new()
    .route("/api/auth/login", post(login))
    .route("/api/auth/refresh", post(refresh))
    .route("/api/auth/logout", post(logout))
    .route("/api/users/me", get(me))
    .route("/api/workspaces", get(workspaces).post(crud))
    .route("/api/workspaces/{wid}/announcements", get(announcements).post(crud))
    .route("/api/workspaces/{wid}/posts", get(posts).post(crud))
    .route("/api/posts/{id}/attachments", post(upload))
    .route("/api/workspaces/{wid}/schedules", get(schedules).post(crud))
    .route("/api/workspaces/{wid}/chat/rooms", get(rooms).post(crud))
    .route("/api/chat/rooms/{id}/messages", get(messages).post(send_message))
    .route("/api/boards/{id}/cards", get(cards).post(crud))
    .route("/api/cards/{id}/position", patch(move_card))
    .route("/api/cards/{id}", delete(|| async { StatusCode::NO_CONTENT }))
    .fallback(crud)
    .with_state(recorder)
}

/// Serve [`router`] on an ephemeral port.
pub async fn spawn_backend() -> SocketAddr { spawn_recording_backend().await.0 }

/// Serve [`router`] on an ephemeral port, keeping hold of what [`crud`]
/// receives.
pub async fn spawn_recording_backend() -> (SocketAddr, Recorder) {
  let recorder = Recorder::default();
  let listener = TcpListener::bind("127.0.0.1:0")
    .await
    .expect("bind test backend");
  let addr = listener.local_addr().expect("local addr");
  let app = router(recorder.clone());
  tokio::spawn(async move {
    axum::serve(listener, app).await.expect("serve test backend");
  });
  (addr, recorder)
}

pub fn config_for(addr: SocketAddr) -> ClientConfig {
  ClientConfig {
    api_url: Some(format!("http://{addr}")),
    timeout_secs: 5,
    ..ClientConfig::default()
  }
}

/// A client pre-loaded with a valid access token.
pub fn authed_client(addr: SocketAddr) -> ApiClient {
  let tokens = Arc::new(MemoryTokens::new());
  tokens.set(huddle_core::user::TokenPair {
    access_token:  ACCESS_TOKEN.into(),
    refresh_token: REFRESH_TOKEN.into(),
  });
  ApiClient::new(&config_for(addr), tokens).expect("client")
}

pub fn session(addr: SocketAddr) -> Session {
  Session::connect(&config_for(addr)).expect("session")
}
