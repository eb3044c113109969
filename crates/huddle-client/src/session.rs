//! Signed-in user and current workspace.
//!
//! A [`Session`] is created once at startup and passed to whoever needs it.
//! It owns the token store the [`ApiClient`] reads from, so signing in and
//! out is the only way tokens change. Logging out resets everything;
//! switching workspace resets only workspace-scoped state.

use std::sync::Arc;

use huddle_core::{
  resource::{DEFAULT_IMAGE_SIZE, Resolver},
  user::{TokenPair, User},
  workspace::Workspace,
};

use crate::{ApiClient, ApiResult, ClientConfig, MemoryTokens, Result};

pub struct Session {
  client:    ApiClient,
  tokens:    Arc<MemoryTokens>,
  user:      Option<User>,
  workspace: Option<Workspace>,
}

impl Session {
  /// Build a signed-out session over a fresh client.
  pub fn connect(config: &ClientConfig) -> Result<Self> {
    let tokens = Arc::new(MemoryTokens::new());
    let client = ApiClient::new(config, tokens.clone())?;
    Ok(Self::new(client, tokens))
  }

  /// Wrap an existing client. `tokens` must be the provider `client` reads.
  pub fn new(client: ApiClient, tokens: Arc<MemoryTokens>) -> Self {
    Self {
      client,
      tokens,
      user: None,
      workspace: None,
    }
  }

  pub fn client(&self) -> &ApiClient { &self.client }

  pub fn resolver(&self) -> &Resolver { self.client.resolver() }

  pub fn user(&self) -> Option<&User> { self.user.as_ref() }

  pub fn workspace(&self) -> Option<&Workspace> { self.workspace.as_ref() }

  pub fn is_authenticated(&self) -> bool { self.user.is_some() }

  // ── Auth ──────────────────────────────────────────────────────────────────

  /// Sign in and remember the returned tokens and user.
  pub async fn login(&mut self, email: &str, password: &str) -> ApiResult<&User> {
    let response = self.client.login(email, password).await?;
    self.tokens.set(response.tokens);
    tracing::info!(user_id = response.user.id, "signed in");
    Ok(&*self.user.insert(response.user))
  }

  /// Adopt previously issued tokens and load the user they belong to.
  /// On failure the session stays signed out.
  pub async fn restore(&mut self, tokens: TokenPair) -> ApiResult<&User> {
    self.tokens.set(tokens);
    match self.client.me().await {
      Ok(user) => Ok(&*self.user.insert(user)),
      Err(e) => {
        self.tokens.clear();
        Err(e)
      }
    }
  }

  /// Exchange the refresh token for a new pair.
  pub async fn refresh(&mut self) -> ApiResult<()> {
    let Some(current) = self.tokens.get() else {
      return Ok(());
    };
    let renewed = self.client.refresh(&current.refresh_token).await?;
    self.tokens.set(renewed);
    Ok(())
  }

  /// Tell the server, then drop all session state whatever it answered.
  pub async fn logout(&mut self) -> ApiResult<()> {
    let result = if self.tokens.get().is_some() {
      self.client.logout().await
    } else {
      Ok(())
    };
    self.reset();
    tracing::info!("signed out");
    result
  }

  /// Forget tokens, user and workspace without contacting the server.
  pub fn reset(&mut self) {
    self.tokens.clear();
    self.user = None;
    self.workspace = None;
  }

  // ── Workspace ─────────────────────────────────────────────────────────────

  /// Make `workspace` current, returning the previous one.
  pub fn switch_workspace(&mut self, workspace: Workspace) -> Option<Workspace> {
    tracing::debug!(workspace_id = workspace.id, "switching workspace");
    self.workspace.replace(workspace)
  }

  pub fn leave_workspace(&mut self) -> Option<Workspace> { self.workspace.take() }

  // ── Display helpers ───────────────────────────────────────────────────────

  /// The signed-in user's avatar, or their placeholder.
  pub fn profile_image_url(&self) -> Option<String> {
    let user = self.user.as_ref()?;
    Some(self.resolver().resolve_profile_image_url(
      user.profile_image_url.as_deref(),
      Some(&user.id.to_string()),
      DEFAULT_IMAGE_SIZE,
    ))
  }
}
