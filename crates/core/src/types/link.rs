//! Outbound web link type.

use core::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Errors that can occur when parsing a [`WebLink`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WebLinkError {
    /// The input is not a parsable absolute URL.
    #[error("not a valid URL: {0}")]
    Invalid(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

/// An absolute `http`/`https` URL, such as a Facebook or Zalo profile link.
///
/// Syntactic validation only - reachability is never checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct WebLink(Url);

impl WebLink {
    /// Parse a `WebLink` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not an absolute URL or does not use
    /// the `http` or `https` scheme.
    pub fn parse(s: &str) -> Result<Self, WebLinkError> {
        let url = Url::parse(s.trim())?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(WebLinkError::UnsupportedScheme(other.to_owned())),
        }
    }

    /// Returns the link as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the underlying [`Url`].
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for WebLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for WebLink {
    type Err = WebLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for WebLink {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(WebLink::parse("https://facebook.com/havanhuan").is_ok());
        assert!(WebLink::parse("http://zalo.me/havanhuan").is_ok());
    }

    #[test]
    fn test_parse_relative() {
        assert!(matches!(
            WebLink::parse("/profile"),
            Err(WebLinkError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_bad_scheme() {
        assert!(matches!(
            WebLink::parse("ftp://example.com/file"),
            Err(WebLinkError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            WebLink::parse("javascript:alert(1)"),
            Err(WebLinkError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_parse_trims() {
        let link = WebLink::parse(" https://zalo.me/havanhuan ").unwrap();
        assert_eq!(link.as_str(), "https://zalo.me/havanhuan");
    }
}
