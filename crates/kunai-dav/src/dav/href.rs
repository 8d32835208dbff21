//! DAV href type.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped when building hrefs from internal paths. `/` stays
/// literal so the path keeps its segment structure.
const HREF_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A `WebDAV` href (URL reference), stored in wire (percent-encoded) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Href(pub String);

impl Href {
    /// Creates an href from an already-encoded value, e.g. a request path
    /// taken verbatim from the wire.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Builds an href for an internal resource path under a mount prefix.
    /// The prefix is expected in normalized `/.../` form and is not encoded;
    /// the path is percent-encoded segment structure intact.
    #[must_use]
    pub fn from_path(prefix: &str, path: &str) -> Self {
        Self(format!("{prefix}{}", percent_encode(path)))
    }

    /// Returns the href as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL-decodes the href.
    #[must_use]
    pub fn decode(&self) -> String {
        percent_decode(&self.0)
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Href {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Href {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Href {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Percent-decodes a path or href. Invalid UTF-8 sequences decode lossily.
/// `+` is left alone; it has no special meaning in a path.
#[must_use]
pub fn percent_decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Percent-encodes an internal path for use in an href, leaving `/` intact.
#[must_use]
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, HREF_ENCODE).to_string()
}
