//! Absolute URI that writes back exactly as it was read.

use std::fmt;

use url::Url;

/// A parsed absolute URI together with its source text.
///
/// [`Url`] normalizes what it parses (`http://host` becomes
/// `http://host/`), so the source text is what gets serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsoluteUri {
    text: String,
    url: Url,
}

impl AbsoluteUri {
    /// Parses `text` as an absolute URI. Text containing whitespace is
    /// never a URI.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if text.chars().any(char::is_whitespace) {
            return None;
        }
        let url = Url::parse(text).ok()?;
        Some(Self {
            text: text.to_string(),
            url,
        })
    }

    /// The text as it was read.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }
}

impl From<Url> for AbsoluteUri {
    fn from(url: Url) -> Self {
        Self {
            text: url.as_str().to_string(),
            url,
        }
    }
}

impl fmt::Display for AbsoluteUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
