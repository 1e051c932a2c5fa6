//! Account sidebar fragment handler.
//!
//! The sidebar is fetched as an HTML fragment when the brand mark or the
//! menu button is clicked, and dismissed client-side (backdrop, close
//! button, nav item, logout - every path removes the overlay).

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

use portfolio_core::{NavTarget, SOCIAL_LINKS, SocialLink};

use crate::content;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::routes::UserView;
use crate::state::AppState;

/// A sidebar navigation item.
#[derive(Clone, Copy)]
pub struct NavItemView {
    pub label: &'static str,
    pub path: &'static str,
}

/// Sidebar fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub title: &'static str,
    pub user: UserView,
    pub items: Vec<NavItemView>,
    pub social_links: [SocialLink; 3],
}

/// Return the sidebar fragment, or nothing at all while logged out - the
/// sidebar cannot open without a session.
pub async fn fragment(
    State(state): State<AppState>,
    OptionalAuth(current): OptionalAuth,
) -> Result<impl IntoResponse> {
    let Some(current) = current else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    // The identity card wants the full snapshot (display name, role).
    let Some(user) = state.load_user(current.id).await? else {
        // Session points at an account that no longer exists upstream.
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let items = NavTarget::ALL
        .into_iter()
        .map(|target| NavItemView {
            label: target.label(),
            path: target.path(),
        })
        .collect();

    Ok(MenuTemplate {
        title: content::SIDEBAR_TITLE,
        user: UserView::from_user(&user),
        items,
        social_links: SOCIAL_LINKS,
    }
    .into_response())
}
