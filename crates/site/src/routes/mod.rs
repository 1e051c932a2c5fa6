//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /               - Home page (header shell)
//! GET  /health         - Liveness check
//! GET  /health/ready   - Readiness check (probes the profile API)
//!
//! # Sidebar (HTMX fragment)
//! GET  /menu           - Account sidebar fragment; 204 when logged out
//!
//! # Auth
//! GET  /login          - Login page
//! POST /login          - Login action
//! GET  /register       - Register page
//! POST /register       - Register action
//! POST /logout         - Logout action (clears the session)
//!
//! # Profile (requires auth)
//! GET  /profile        - Profile edit form, pre-populated
//! POST /profile        - Submit partial update
//! ```

pub mod auth;
pub mod home;
pub mod menu;
pub mod profile;

use axum::{
    Router,
    routing::{get, post},
};

use portfolio_core::User;

use crate::models::CurrentUser;
use crate::state::AppState;

/// User display data for templates.
#[derive(Clone)]
pub struct UserView {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub role: String,
}

impl UserView {
    /// Full view from a user snapshot.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            display_name: user.display_name().to_owned(),
            role: user.role.to_string(),
        }
    }

    /// Header-only view from the session identity, when no snapshot is at
    /// hand. The header shows just the username.
    #[must_use]
    pub fn from_session(current: &CurrentUser) -> Self {
        Self {
            id: current.id.to_string(),
            username: current.username.clone(),
            display_name: current.username.clone(),
            role: String::new(),
        }
    }
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/menu", get(menu::fragment))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/profile", get(profile::edit_page).post(profile::update))
}
