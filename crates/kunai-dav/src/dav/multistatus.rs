//! Multistatus response types.

use super::href::Href;
use super::property::DavProperty;

/// A multistatus response (RFC 4918 §13).
#[derive(Debug, Clone, Default)]
pub struct Multistatus {
    /// Individual responses.
    pub responses: Vec<PropstatResponse>,
}

impl Multistatus {
    /// Creates an empty multistatus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a response.
    pub fn add_response(&mut self, response: PropstatResponse) {
        self.responses.push(response);
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Returns the number of responses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }
}

/// A single response within a multistatus.
#[derive(Debug, Clone)]
pub struct PropstatResponse {
    /// The resource href.
    pub href: Href,
    /// Property statuses grouped by status code.
    pub propstats: Vec<Propstat>,
}

impl PropstatResponse {
    /// Creates a simple 200 OK response with properties.
    #[must_use]
    pub fn ok(href: impl Into<Href>, properties: Vec<DavProperty>) -> Self {
        Self {
            href: href.into(),
            propstats: vec![Propstat {
                status: Status::Ok,
                properties,
            }],
        }
    }
}

/// Property status grouping.
#[derive(Debug, Clone)]
pub struct Propstat {
    /// HTTP status.
    pub status: Status,
    /// Properties with this status.
    pub properties: Vec<DavProperty>,
}

/// HTTP status for propstat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl Status {
    /// Returns the status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NotFound => 404,
        }
    }

    /// Returns the status line.
    #[must_use]
    pub fn status_line(self) -> String {
        format!("HTTP/1.1 {} {}", self.code(), self.reason_phrase())
    }

    /// Returns the reason phrase.
    #[must_use]
    pub const fn reason_phrase(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NotFound => "Not Found",
        }
    }
}
