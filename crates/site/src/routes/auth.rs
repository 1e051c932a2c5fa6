//! Authentication route handlers.
//!
//! Handles login, registration, and logout against the profile API.
//! Logout never calls the backend: session termination is local, and the
//! sidebar closes regardless of anything else that happens on the way out.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::content;
use crate::error::{clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::routes::UserView;
use crate::services::ApiError;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub password_confirm: String,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub current_user: Option<UserView>,
    pub brand_name: &'static str,
    pub tagline: &'static str,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub current_user: Option<UserView>,
    pub brand_name: &'static str,
    pub tagline: &'static str,
    pub error: Option<String>,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate {
        current_user: None,
        brand_name: content::BRAND_NAME,
        tagline: content::TAGLINE,
        error: query.error,
        success: query.success,
    }
}

/// Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match state
        .backend()
        .authenticate(&form.username, &form.password)
        .await
    {
        Ok(user) => {
            let current = CurrentUser {
                id: user.id,
                username: user.username.clone(),
            };

            if let Err(e) = set_current_user(&session, &current).await {
                tracing::error!("Failed to set session: {}", e);
                return Redirect::to("/login?error=session").into_response();
            }

            set_sentry_user(&user.id, Some(&user.username));
            // Prime the snapshot cache so the first page after login does
            // not re-fetch.
            state.refresh_user(user).await;

            Redirect::to("/").into_response()
        }
        Err(ApiError::InvalidCredentials) => {
            tracing::warn!(username = %form.username, "Login rejected");
            Redirect::to("/login?error=credentials").into_response()
        }
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            Redirect::to("/login?error=unavailable").into_response()
        }
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    RegisterTemplate {
        current_user: None,
        brand_name: content::BRAND_NAME,
        tagline: content::TAGLINE,
        error: query.error,
    }
}

/// Handle registration form submission.
///
/// On success the new account is logged in directly.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Response {
    // Validate passwords match
    if form.password != form.password_confirm {
        return Redirect::to("/register?error=password_mismatch").into_response();
    }

    // Validate password length
    if form.password.len() < 8 {
        return Redirect::to("/register?error=password_too_short").into_response();
    }

    let username = form.username.trim();
    if username.is_empty() {
        return Redirect::to("/register?error=username_required").into_response();
    }

    match state.backend().register(username, &form.password).await {
        Ok(user) => {
            let current = CurrentUser {
                id: user.id,
                username: user.username.clone(),
            };

            if let Err(e) = set_current_user(&session, &current).await {
                tracing::error!("Failed to set session after registration: {}", e);
                return Redirect::to("/login?error=session").into_response();
            }

            set_sentry_user(&user.id, Some(&user.username));
            state.refresh_user(user).await;

            Redirect::to("/").into_response()
        }
        Err(ApiError::UsernameTaken) => {
            Redirect::to("/register?error=username_taken").into_response()
        }
        Err(e) => {
            tracing::error!("Registration failed: {}", e);
            Redirect::to("/register?error=failed").into_response()
        }
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Clears the session unconditionally; there is no backend call to fail.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    // Also destroy the entire session
    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {}", e);
    }

    clear_sentry_user();

    Redirect::to("/").into_response()
}
