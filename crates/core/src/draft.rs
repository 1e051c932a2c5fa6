//! Profile edit drafts and the field-scoped validator.
//!
//! Editing flows in two steps. The form produces a [`ProfileInput`] - the
//! raw strings as typed, every field optional. [`validate`] turns that into
//! a [`ProfileDraft`] of typed values, or a [`ValidationErrors`] naming
//! exactly which fields are wrong. A failed field never disturbs the others.

use core::fmt;

use serde::Serialize;

use crate::types::{Email, PhoneNumber, WebLink};
use crate::user::User;

/// Maximum length of the display name.
pub const MAX_FULL_NAME_LEN: usize = 100;
/// Maximum length of the bio/introduction.
pub const MAX_BIO_LEN: usize = 1000;

/// The editable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Bio,
    FacebookUrl,
    ZaloUrl,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FullName => "full name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Bio => "bio",
            Self::FacebookUrl => "Facebook URL",
            Self::ZaloUrl => "Zalo URL",
        };
        write!(f, "{label}")
    }
}

/// Raw, unvalidated profile edit state - the form's value bag.
///
/// Initialized from the current [`User`] snapshot when the editor opens.
/// Blank or whitespace-only entries count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub facebook_url: Option<String>,
    pub zalo_url: Option<String>,
}

impl ProfileInput {
    /// Snapshot the editable fields of a user into form values.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.as_ref().map(|e| e.as_str().to_owned()),
            phone: user.phone.as_ref().map(|p| p.as_str().to_owned()),
            bio: user.bio.clone(),
            facebook_url: user.facebook_url.as_ref().map(|l| l.as_str().to_owned()),
            zalo_url: user.zalo_url.as_ref().map(|l| l.as_str().to_owned()),
        }
    }

    /// The value currently held for a field, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => self.full_name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Bio => self.bio.as_deref(),
            Field::FacebookUrl => self.facebook_url.as_deref(),
            Field::ZaloUrl => self.zalo_url.as_deref(),
        }
    }
}

/// A validated partial profile update.
///
/// Serializes to the wire payload of the update request. `None` fields are
/// omitted entirely, which the API treats as "leave unchanged". An empty
/// draft is a valid no-op update, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<WebLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zalo_url: Option<WebLink>,
}

impl ProfileDraft {
    /// True when no field is set - submitting this is a no-op update.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.bio.is_none()
            && self.facebook_url.is_none()
            && self.zalo_url.is_none()
    }
}

/// Field-scoped validation failures.
///
/// Holds one human-readable message per failed field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(Field, String)>,
}

impl ValidationErrors {
    fn push(&mut self, field: Field, message: impl fmt::Display) {
        self.errors.push((field, message.to_string()));
    }

    /// True when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    /// Iterate over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, msg)| (*f, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

/// Treat blank and whitespace-only entries as unset.
fn normalize(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Validate a raw [`ProfileInput`] into a [`ProfileDraft`].
///
/// Presence is never required - this is the all-fields-optional partial
/// projection of the user schema. A field that is present must parse
/// through its typed constructor; failures are collected per field so the
/// form can annotate each input without clearing the others.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every field that failed.
pub fn validate(input: &ProfileInput) -> Result<ProfileDraft, ValidationErrors> {
    let mut draft = ProfileDraft::default();
    let mut errors = ValidationErrors::default();

    if let Some(name) = normalize(input.full_name.as_deref()) {
        if name.chars().count() > MAX_FULL_NAME_LEN {
            errors.push(
                Field::FullName,
                format_args!("must be at most {MAX_FULL_NAME_LEN} characters"),
            );
        } else {
            draft.full_name = Some(name.to_owned());
        }
    }

    if let Some(email) = normalize(input.email.as_deref()) {
        match Email::parse(email) {
            Ok(email) => draft.email = Some(email),
            Err(e) => errors.push(Field::Email, e),
        }
    }

    if let Some(phone) = normalize(input.phone.as_deref()) {
        match PhoneNumber::parse(phone) {
            Ok(phone) => draft.phone = Some(phone),
            Err(e) => errors.push(Field::Phone, e),
        }
    }

    if let Some(bio) = normalize(input.bio.as_deref()) {
        if bio.chars().count() > MAX_BIO_LEN {
            errors.push(
                Field::Bio,
                format_args!("must be at most {MAX_BIO_LEN} characters"),
            );
        } else {
            draft.bio = Some(bio.to_owned());
        }
    }

    if let Some(link) = normalize(input.facebook_url.as_deref()) {
        match WebLink::parse(link) {
            Ok(link) => draft.facebook_url = Some(link),
            Err(e) => errors.push(Field::FacebookUrl, e),
        }
    }

    if let Some(link) = normalize(input.zalo_url.as_deref()) {
        match WebLink::parse(link) {
            Ok(link) => draft.zalo_url = Some(link),
            Err(e) => errors.push(Field::ZaloUrl, e),
        }
    }

    if errors.is_empty() { Ok(draft) } else { Err(errors) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::UserId;
    use crate::user::Role;

    fn sample_user() -> User {
        User {
            id: UserId::new(1),
            username: "huan".to_owned(),
            role: Role::Admin,
            full_name: Some("Ha Van Huan".to_owned()),
            email: Some(Email::parse("huan@example.com").unwrap()),
            phone: Some(PhoneNumber::parse("+84 912 345 678").unwrap()),
            bio: Some("Fullstack developer".to_owned()),
            facebook_url: None,
            zalo_url: Some(WebLink::parse("https://zalo.me/havanhuan").unwrap()),
        }
    }

    #[test]
    fn test_input_from_user_snapshot() {
        let input = ProfileInput::from_user(&sample_user());
        assert_eq!(input.full_name.as_deref(), Some("Ha Van Huan"));
        assert_eq!(input.email.as_deref(), Some("huan@example.com"));
        assert_eq!(input.facebook_url, None);
        assert_eq!(input.zalo_url.as_deref(), Some("https://zalo.me/havanhuan"));
    }

    #[test]
    fn test_empty_input_is_valid_noop() {
        let draft = validate(&ProfileInput::default()).unwrap();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_blank_entries_count_as_unset() {
        let input = ProfileInput {
            email: Some("   ".to_owned()),
            bio: Some(String::new()),
            ..ProfileInput::default()
        };
        let draft = validate(&input).unwrap();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_invalid_email_is_field_scoped() {
        let input = ProfileInput {
            full_name: Some("Huan".to_owned()),
            email: Some("not-an-email".to_owned()),
            ..ProfileInput::default()
        };
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::Email).is_some());
        assert!(errors.get(Field::FullName).is_none());
        // The other fields' values are untouched in the input.
        assert_eq!(input.full_name.as_deref(), Some("Huan"));
    }

    #[test]
    fn test_multiple_failures_collected() {
        let input = ProfileInput {
            email: Some("nope".to_owned()),
            phone: Some("abc".to_owned()),
            facebook_url: Some("not a url".to_owned()),
            ..ProfileInput::default()
        };
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.get(Field::Phone).is_some());
        assert!(errors.get(Field::FacebookUrl).is_some());
    }

    #[test]
    fn test_length_limits() {
        let input = ProfileInput {
            full_name: Some("x".repeat(MAX_FULL_NAME_LEN + 1)),
            bio: Some("y".repeat(MAX_BIO_LEN + 1)),
            ..ProfileInput::default()
        };
        let errors = validate(&input).unwrap_err();
        assert!(errors.get(Field::FullName).is_some());
        assert!(errors.get(Field::Bio).is_some());
    }

    #[test]
    fn test_valid_input_produces_typed_draft() {
        let input = ProfileInput {
            full_name: Some("  Ha Van Huan  ".to_owned()),
            email: Some("huan@example.com".to_owned()),
            zalo_url: Some("https://zalo.me/havanhuan".to_owned()),
            ..ProfileInput::default()
        };
        let draft = validate(&input).unwrap();
        assert_eq!(draft.full_name.as_deref(), Some("Ha Van Huan"));
        assert_eq!(draft.email.as_ref().unwrap().as_str(), "huan@example.com");
        assert!(draft.phone.is_none());
    }

    #[test]
    fn test_empty_draft_serializes_to_empty_object() {
        let json = serde_json::to_string(&ProfileDraft::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_draft_serialization_omits_unset_fields() {
        let input = ProfileInput {
            email: Some("huan@example.com".to_owned()),
            ..ProfileInput::default()
        };
        let draft = validate(&input).unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "huan@example.com" }));
    }

    #[test]
    fn test_errors_display() {
        let input = ProfileInput {
            email: Some("nope".to_owned()),
            ..ProfileInput::default()
        };
        let errors = validate(&input).unwrap_err();
        assert!(errors.to_string().contains("email"));
    }
}
