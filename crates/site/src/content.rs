//! Static site content.
//!
//! Brand identity strings shown in the header and sidebar. These are fixed
//! configuration, not user data, and change only with a deploy.

/// Name shown next to the brand mark.
pub const BRAND_NAME: &str = "Hà Văn Huấn";

/// Tagline under the brand name.
pub const TAGLINE: &str = "Fullstack Developer";

/// Title of the account sidebar.
pub const SIDEBAR_TITLE: &str = "System Menu";
