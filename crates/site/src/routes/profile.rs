//! Profile edit route handlers.
//!
//! The edit form is pre-populated from the current user snapshot, validated
//! field-by-field on submit, and sent to the profile API as a partial
//! update. Successful submits redirect back to the form (post/redirect/get)
//! so the next render shows the committed values from the refreshed cache.
//! Failed submits re-render with the entered values intact.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use portfolio_core::{Field, ProfileEditor, ProfileInput, SubmitError, ValidationErrors};

use crate::content;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::routes::UserView;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Profile edit form data. Field names match the wire names of the user
/// record, camelCase included.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub zalo_url: Option<String>,
}

impl From<ProfileForm> for ProfileInput {
    fn from(form: ProfileForm) -> Self {
        Self {
            full_name: form.full_name,
            email: form.email,
            phone: form.phone,
            bio: form.bio,
            facebook_url: form.facebook_url,
            zalo_url: form.zalo_url,
        }
    }
}

/// Query parameters for the saved banner.
#[derive(Debug, Deserialize)]
pub struct SavedQuery {
    pub saved: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Per-field string values shown in the form inputs.
#[derive(Clone, Default)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub facebook_url: String,
    pub zalo_url: String,
}

impl FormValues {
    fn from_input(input: &ProfileInput) -> Self {
        let text = |v: Option<&str>| v.unwrap_or_default().to_owned();
        Self {
            full_name: text(input.full_name.as_deref()),
            email: text(input.email.as_deref()),
            phone: text(input.phone.as_deref()),
            bio: text(input.bio.as_deref()),
            facebook_url: text(input.facebook_url.as_deref()),
            zalo_url: text(input.zalo_url.as_deref()),
        }
    }
}

/// Per-field validation messages shown under the form inputs.
#[derive(Clone, Default)]
pub struct FieldErrors {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub facebook_url: Option<String>,
    pub zalo_url: Option<String>,
}

impl FieldErrors {
    fn from_errors(errors: &ValidationErrors) -> Self {
        let msg = |field| errors.get(field).map(str::to_owned);
        Self {
            full_name: msg(Field::FullName),
            email: msg(Field::Email),
            phone: msg(Field::Phone),
            bio: msg(Field::Bio),
            facebook_url: msg(Field::FacebookUrl),
            zalo_url: msg(Field::ZaloUrl),
        }
    }
}

/// Profile edit page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub current_user: Option<UserView>,
    pub brand_name: &'static str,
    pub tagline: &'static str,
    pub user: UserView,
    pub values: FormValues,
    pub errors: FieldErrors,
    /// Banner shown after a successful update.
    pub saved: bool,
    /// Banner shown when the update was rejected upstream.
    pub submit_error: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the profile edit form, pre-populated from the current snapshot.
///
/// A missing session never reaches this handler - `RequireAuth` redirects
/// to the login page, the page-level version of rendering nothing.
pub async fn edit_page(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
    Query(query): Query<SavedQuery>,
) -> Result<Response, AppError> {
    let Some(user) = state.load_user(current.id).await? else {
        // The account vanished upstream; the session is stale.
        return Ok(Redirect::to("/login").into_response());
    };

    let editor = ProfileEditor::open(user);
    let values = FormValues::from_input(editor.input());
    let user_view = UserView::from_user(editor.snapshot());

    Ok(ProfileTemplate {
        current_user: Some(user_view.clone()),
        brand_name: content::BRAND_NAME,
        tagline: content::TAGLINE,
        user: user_view,
        values,
        errors: FieldErrors::default(),
        saved: query.saved.is_some(),
        submit_error: None,
    }
    .into_response())
}

/// Handle profile form submission.
///
/// Validation failures re-render the form with field-scoped messages and
/// never reach the profile API. Upstream failures re-render with an error
/// banner and the entered values - nothing the user typed is lost, and
/// resubmitting is the only retry.
#[instrument(skip(state, form), fields(user_id = %current.id))]
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
    Form(form): Form<ProfileForm>,
) -> Result<Response, AppError> {
    let Some(user) = state.load_user(current.id).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    let mut editor = ProfileEditor::open(user);
    *editor.input_mut() = ProfileInput::from(form);

    let draft = match editor.begin_submit() {
        Ok(draft) => draft,
        Err(SubmitError::Invalid(errors)) => {
            tracing::debug!(fields = errors.len(), "Profile update blocked by validation");
            let user_view = UserView::from_user(editor.snapshot());
            return Ok(ProfileTemplate {
                current_user: Some(user_view.clone()),
                brand_name: content::BRAND_NAME,
                tagline: content::TAGLINE,
                user: user_view,
                values: FormValues::from_input(editor.input()),
                errors: FieldErrors::from_errors(&errors),
                saved: false,
                submit_error: None,
            }
            .into_response());
        }
        // One request per submit; the in-flight guard cannot trip here.
        Err(SubmitError::InFlight) => {
            return Err(AppError::Internal("editor already pending".to_string()));
        }
    };

    match state.backend().update_profile(current.id, &draft).await {
        Ok(updated) => {
            editor.submit_succeeded(updated.clone());
            // Refresh the cached snapshot so the redirected GET renders
            // the committed values.
            state.refresh_user(updated).await;
            Ok(Redirect::to("/profile?saved=1").into_response())
        }
        Err(e) => {
            tracing::warn!("Profile update rejected: {}", e);
            editor.submit_failed();
            let user_view = UserView::from_user(editor.snapshot());
            Ok(ProfileTemplate {
                current_user: Some(user_view.clone()),
                brand_name: content::BRAND_NAME,
                tagline: content::TAGLINE,
                user: user_view,
                values: FormValues::from_input(editor.input()),
                errors: FieldErrors::default(),
                saved: false,
                submit_error: Some("Could not save your changes. Please try again.".to_string()),
            }
            .into_response())
        }
    }
}
