//! Core field types for the portfolio site.
//!
//! This module provides type-safe wrappers for the values a profile can
//! carry. Each wrapper validates on construction via `parse()`, so a value
//! of one of these types is known to be well-formed.

pub mod email;
pub mod id;
pub mod link;
pub mod phone;

pub use email::{Email, EmailError};
pub use id::UserId;
pub use link::{WebLink, WebLinkError};
pub use phone::{PhoneNumber, PhoneNumberError};
