//! Data types shared across handlers.

pub mod session;

pub use session::{CurrentUser, keys as session_keys};
