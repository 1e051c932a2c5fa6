//! Profile API client.
//!
//! The user record lives behind an opaque HTTP API. This module defines the
//! capability seam the rest of the site depends on - [`ProfileBackend`] -
//! and its production implementation, [`HttpProfileApi`], a JSON client over
//! `reqwest` with a bearer token. Handlers never talk to `reqwest` directly;
//! tests inject an in-memory backend through the same trait.
//!
//! Logout has no backend call: session termination is local to the site.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::{debug, instrument};

use portfolio_core::{ProfileDraft, User, UserId};

use crate::config::ProfileApiConfig;

/// Errors from the profile API boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (connect, timeout, decode).
    #[error("profile API transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Login was rejected.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration was rejected because the handle is taken.
    #[error("username already taken")]
    UsernameTaken,

    /// The referenced user does not exist upstream.
    #[error("user not found")]
    NotFound,

    /// The API answered with an unexpected status.
    #[error("profile API returned unexpected status {status}")]
    UnexpectedStatus {
        /// The status code received.
        status: StatusCode,
    },
}

/// Capability set the session and profile pages depend on.
///
/// One implementation per environment: [`HttpProfileApi`] in production, an
/// in-memory fake in tests. Injected into application state at construction.
#[async_trait]
pub trait ProfileBackend: Send + Sync {
    /// Cheap upstream reachability probe, used by the readiness endpoint.
    async fn health(&self) -> Result<(), ApiError>;

    /// Fetch a user snapshot. `Ok(None)` when the user no longer exists.
    async fn fetch_user(&self, id: UserId) -> Result<Option<User>, ApiError>;

    /// Verify credentials and return the authenticated user.
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, ApiError>;

    /// Create an account and return the new user.
    async fn register(&self, username: &str, password: &str) -> Result<User, ApiError>;

    /// Apply a partial update and return the refreshed user. Fields absent
    /// from the draft are left unchanged upstream (last write wins, no
    /// diffing, no retry).
    async fn update_profile(&self, id: UserId, draft: &ProfileDraft) -> Result<User, ApiError>;
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    username: &'a str,
    password: &'a str,
}

// =============================================================================
// HttpProfileApi
// =============================================================================

/// Client for the profile HTTP API.
#[derive(Clone)]
pub struct HttpProfileApi {
    inner: Arc<HttpProfileApiInner>,
}

struct HttpProfileApiInner {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpProfileApi {
    /// Create a new profile API client.
    #[must_use]
    pub fn new(config: &ProfileApiConfig) -> Self {
        Self {
            inner: Arc::new(HttpProfileApiInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                token: config.token.expose_secret().to_string(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.inner
            .client
            .request(method, self.url(path))
            .bearer_auth(&self.inner.token)
    }
}

#[async_trait]
impl ProfileBackend for HttpProfileApi {
    #[instrument(skip(self))]
    async fn health(&self) -> Result<(), ApiError> {
        let response = self.request(reqwest::Method::GET, "/health").send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::UnexpectedStatus {
                status: response.status(),
            })
        }
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn fetch_user(&self, id: UserId) -> Result<Option<User>, ApiError> {
        let response = self
            .request(reqwest::Method::GET, &format!("/users/{id}"))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let user = response.json::<User>().await?;
                debug!(username = %user.username, "Fetched user snapshot");
                Ok(Some(user))
            }
            status => Err(ApiError::UnexpectedStatus { status }),
        }
    }

    #[instrument(skip(self, password))]
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let response = self
            .request(reqwest::Method::POST, "/sessions")
            .json(&CredentialsBody { username, password })
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::InvalidCredentials),
            status if status.is_success() => Ok(response.json::<User>().await?),
            status => Err(ApiError::UnexpectedStatus { status }),
        }
    }

    #[instrument(skip(self, password))]
    async fn register(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let response = self
            .request(reqwest::Method::POST, "/users")
            .json(&CredentialsBody { username, password })
            .send()
            .await?;

        match response.status() {
            StatusCode::CONFLICT => Err(ApiError::UsernameTaken),
            status if status.is_success() => Ok(response.json::<User>().await?),
            status => Err(ApiError::UnexpectedStatus { status }),
        }
    }

    #[instrument(skip(self, draft), fields(user_id = %id, noop = draft.is_empty()))]
    async fn update_profile(&self, id: UserId, draft: &ProfileDraft) -> Result<User, ApiError> {
        let response = self
            .request(reqwest::Method::PATCH, &format!("/users/{id}"))
            .json(draft)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status if status.is_success() => {
                let user = response.json::<User>().await?;
                debug!(username = %user.username, "Profile updated");
                Ok(user)
            }
            status => Err(ApiError::UnexpectedStatus { status }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_url_joins_without_double_slash() {
        let api = HttpProfileApi::new(&ProfileApiConfig {
            base_url: "http://localhost:8080".to_string(),
            token: SecretString::from("t"),
        });
        assert_eq!(api.url("/users/1"), "http://localhost:8080/users/1");
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::InvalidCredentials.to_string(), "invalid credentials");
        let err = ApiError::UnexpectedStatus {
            status: StatusCode::BAD_GATEWAY,
        };
        assert!(err.to_string().contains("502"));
    }
}
