//! Authentication and the signed-in user.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/auth/login` | Body: [`LoginRequest`]; returns tokens + user |
//! | `POST` | `/auth/signup` | Body: [`SignupRequest`]; returns the new user |
//! | `POST` | `/auth/refresh` | Body: `{"refreshToken":"..."}` |
//! | `POST` | `/auth/logout` | No body |
//! | `GET`  | `/users/me` | |
//! | `PUT`  | `/users/me/profile-image` | Body: `{"profileImageUrl":"..."}` |

use huddle_core::user::{
  LoginRequest, LoginResponse, ProfileImageUpdate, RefreshRequest, SignupRequest, TokenPair,
  User,
};
use reqwest::Method;

use crate::{ApiClient, ApiResult};

pub const LOGIN_FAILED: &str = "Sign-in failed. Check your email and password.";
pub const SIGNUP_FAILED: &str = "Could not create the account.";
pub const REFRESH_FAILED: &str = "Your session has expired. Please sign in again.";
pub const LOGOUT_FAILED: &str = "Could not sign out.";
pub const ME_FAILED: &str = "Could not load your profile.";
pub const PROFILE_IMAGE_FAILED: &str = "Could not update your profile image.";

impl ApiClient {
  /// `POST /auth/login`
  pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
    let body = LoginRequest {
      email:    email.to_string(),
      password: password.to_string(),
    };
    self
      .send_json(Method::POST, "/auth/login", &body, LOGIN_FAILED)
      .await
  }

  /// `POST /auth/signup`
  pub async fn signup(&self, request: &SignupRequest) -> ApiResult<User> {
    self
      .send_json(Method::POST, "/auth/signup", request, SIGNUP_FAILED)
      .await
  }

  /// `POST /auth/refresh`
  pub async fn refresh(&self, refresh_token: &str) -> ApiResult<TokenPair> {
    let body = RefreshRequest {
      refresh_token: refresh_token.to_string(),
    };
    self
      .send_json(Method::POST, "/auth/refresh", &body, REFRESH_FAILED)
      .await
  }

  /// `POST /auth/logout`
  pub async fn logout(&self) -> ApiResult<()> {
    self
      .send_empty(Method::POST, "/auth/logout", LOGOUT_FAILED)
      .await
  }

  /// `GET /users/me`
  pub async fn me(&self) -> ApiResult<User> {
    self.get_json("/users/me", &[], ME_FAILED).await
  }

  /// `PUT /users/me/profile-image`
  pub async fn update_profile_image(&self, profile_image_url: &str) -> ApiResult<User> {
    let body = ProfileImageUpdate {
      profile_image_url: profile_image_url.to_string(),
    };
    self
      .send_json(Method::PUT, "/users/me/profile-image", &body, PROFILE_IMAGE_FAILED)
      .await
  }
}
