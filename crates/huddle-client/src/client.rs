//! Async HTTP client wrapping the Huddle JSON API.
//!
//! This module holds the transport plumbing shared by every endpoint; the
//! endpoints themselves live in [`crate::api`].

use std::sync::Arc;

use huddle_core::resource::Resolver;
use reqwest::{Client, Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

use crate::{ApiError, ApiResult, ClientConfig, Result, token::TokenProvider};

/// Async HTTP client for the Huddle REST API.
///
/// Cheap to clone: the inner [`reqwest::Client`] and the token provider are
/// both `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  http:     Client,
  resolver: Resolver,
  tokens:   Arc<dyn TokenProvider>,
}

impl ApiClient {
  pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
    let http = Client::builder().timeout(config.timeout()).build()?;
    Ok(Self {
      http,
      resolver: config.resolver()?,
      tokens,
    })
  }

  /// The resolver for resource URLs found in responses. Its base origin is
  /// also the API origin.
  pub fn resolver(&self) -> &Resolver { &self.resolver }

  /// Root of the REST API, e.g. `https://api.huddle.team/api`.
  pub fn base_url(&self) -> String {
    format!("{}/api", self.resolver.resolve_base_origin())
  }

  fn url(&self, path: &str) -> String { format!("{}{path}", self.base_url()) }

  fn request(&self, method: Method, path: &str) -> RequestBuilder {
    let req = self.http.request(method, self.url(path));
    match self.tokens.access_token() {
      Some(token) => req.bearer_auth(token),
      None => req,
    }
  }

  // ── Helpers used by the endpoint modules ──────────────────────────────────

  /// Issue one call and return the status and body of a success response.
  pub(crate) async fn execute(
    &self,
    method: Method,
    path: &str,
    fallback: &str,
    build: impl FnOnce(RequestBuilder) -> RequestBuilder,
  ) -> ApiResult<(u16, String)> {
    tracing::debug!(%method, path, "api request");
    let req = build(self.request(method.clone(), path));

    let resp = req.send().await.map_err(|e| {
      tracing::warn!(%method, path, error = %e, "api request failed to send");
      ApiError::transport(&e, fallback)
    })?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| {
      tracing::warn!(%method, path, error = %e, "reading api response failed");
      ApiError::transport(&e, fallback)
    })?;

    if !status.is_success() {
      let err = ApiError::from_status(status.as_u16(), body, fallback);
      tracing::warn!(
        %method,
        path,
        status = status.as_u16(),
        message = %err.message,
        "api request rejected"
      );
      return Err(err);
    }
    Ok((status.as_u16(), body))
  }

  pub(crate) async fn execute_json<T: DeserializeOwned>(
    &self,
    method: Method,
    path: &str,
    fallback: &str,
    build: impl FnOnce(RequestBuilder) -> RequestBuilder,
  ) -> ApiResult<T> {
    let (status, body) = self.execute(method, path, fallback, build).await?;
    match serde_json::from_str(&body) {
      Ok(value) => Ok(value),
      Err(e) => {
        tracing::warn!(path, error = %e, "api response did not match expected shape");
        Err(ApiError::decode(status, body, &e, fallback))
      }
    }
  }

  /// `GET path?query` decoded as `T`.
  pub(crate) async fn get_json<T: DeserializeOwned>(
    &self,
    path: &str,
    query: &[(&str, String)],
    fallback: &str,
  ) -> ApiResult<T> {
    self
      .execute_json(Method::GET, path, fallback, |req| {
        if query.is_empty() { req } else { req.query(query) }
      })
      .await
  }

  /// `method path` with a JSON body, response decoded as `T`.
  pub(crate) async fn send_json<B, T>(
    &self,
    method: Method,
    path: &str,
    body: &B,
    fallback: &str,
  ) -> ApiResult<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    self
      .execute_json(method, path, fallback, |req| req.json(body))
      .await
  }

  /// `method path` without a body; the response body is ignored.
  pub(crate) async fn send_empty(
    &self,
    method: Method,
    path: &str,
    fallback: &str,
  ) -> ApiResult<()> {
    self.execute(method, path, fallback, |req| req).await.map(|_| ())
  }
}
