//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use portfolio_core::UserId;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user; the
/// full snapshot is read through the user cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's ID at the profile API.
    pub id: UserId,
    /// User's display handle.
    pub username: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
