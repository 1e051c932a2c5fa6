//! Portfolio Core - Shared domain library.
//!
//! This crate provides the types and state machines shared by the portfolio
//! site components:
//! - `site` - The public-facing portfolio/profile web application
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no HTTP clients,
//! no templates. The profile edit workflow and the navigation sidebar are
//! modeled here as plain values with explicit transitions, so they can be
//! tested without a running server.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, phone numbers,
//!   and web links
//! - [`user`] - The user record as served by the profile API
//! - [`draft`] - Profile edit drafts and the field-scoped validator
//! - [`editor`] - The submit state machine behind the profile edit form
//! - [`shell`] - The navigation sidebar state machine and static link sets

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod draft;
pub mod editor;
pub mod shell;
pub mod types;
pub mod user;

pub use draft::{Field, ProfileDraft, ProfileInput, ValidationErrors, validate};
pub use editor::{ProfileEditor, SubmitError, SubmitState};
pub use shell::{NavShell, NavTarget, SOCIAL_LINKS, SidebarState, SocialLink};
pub use types::{Email, EmailError, PhoneNumber, PhoneNumberError, UserId, WebLink, WebLinkError};
pub use user::{Role, User};
