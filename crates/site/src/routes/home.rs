//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::content;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::routes::UserView;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub current_user: Option<UserView>,
    pub brand_name: &'static str,
    pub tagline: &'static str,
}

/// Display the home page.
///
/// The header renders logged-in or logged-out controls from the session
/// alone; no profile API call is needed here.
pub async fn home(OptionalAuth(current): OptionalAuth) -> impl IntoResponse {
    HomeTemplate {
        current_user: current.as_ref().map(UserView::from_session),
        brand_name: content::BRAND_NAME,
        tagline: content::TAGLINE,
    }
}
