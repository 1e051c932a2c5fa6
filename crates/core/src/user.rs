//! User domain types.
//!
//! The user record as served by the profile API. From this crate's
//! perspective it is read-only; edits go through a [`crate::draft::ProfileDraft`]
//! partial update.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Email, PhoneNumber, UserId, WebLink};

/// Account role, display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Site owner with admin capabilities elsewhere.
    Admin,
    /// Regular account.
    Member,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "Administrator"),
            Self::Member => write!(f, "Member"),
        }
    }
}

/// A portfolio user.
///
/// Everything except `id`, `username`, and `role` is optional free-text or
/// a typed optional field the user can edit from the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique display handle.
    pub username: String,
    /// Account role, shown in the sidebar identity card.
    pub role: Role,
    /// Optional display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Optional contact email.
    #[serde(default)]
    pub email: Option<Email>,
    /// Optional contact phone number.
    #[serde(default)]
    pub phone: Option<PhoneNumber>,
    /// Optional free-text introduction.
    #[serde(default)]
    pub bio: Option<String>,
    /// Optional Facebook profile link.
    #[serde(default)]
    pub facebook_url: Option<WebLink>,
    /// Optional Zalo profile link.
    #[serde(default)]
    pub zalo_url: Option<WebLink>,
}

impl User {
    /// The name to show in identity displays: full name when set, otherwise
    /// the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new(1),
            username: "huan".to_owned(),
            role: Role::Admin,
            full_name: Some("Ha Van Huan".to_owned()),
            email: Some(Email::parse("huan@example.com").unwrap()),
            phone: None,
            bio: None,
            facebook_url: Some(WebLink::parse("https://facebook.com/havanhuan").unwrap()),
            zalo_url: None,
        }
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let user = sample_user();
        assert_eq!(user.display_name(), "Ha Van Huan");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = User {
            full_name: None,
            ..sample_user()
        };
        assert_eq!(user.display_name(), "huan");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(json["fullName"], "Ha Van Huan");
        assert_eq!(json["facebookUrl"], "https://facebook.com/havanhuan");
        assert_eq!(json["role"], "admin");
    }

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let user: User = serde_json::from_str(
            r#"{"id": 2, "username": "guest", "role": "member"}"#,
        )
        .unwrap();
        assert_eq!(user.id, UserId::new(2));
        assert!(user.email.is_none());
        assert!(user.zalo_url.is_none());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Admin.to_string(), "Administrator");
        assert_eq!(Role::Member.to_string(), "Member");
    }
}
