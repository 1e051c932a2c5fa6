//! External service clients.

pub mod profile_api;

pub use profile_api::{ApiError, HttpProfileApi, ProfileBackend};
