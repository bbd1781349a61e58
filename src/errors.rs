//! Error types for the showcase routines
//!
//! Document-level failures (fetch, parse, DOM, template) abort a routine and
//! surface as [`ShowcaseError`]. Record-level failures ([`RecordError`]) only
//! skip the offending animal.

use thiserror::Error;

/// Top-level error for a display routine
#[derive(Debug, Clone, Error)]
pub enum ShowcaseError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("pet list could not be parsed: {0}")]
    Parse(#[from] ParseError),

    #[error("DOM update failed: {0}")]
    Dom(#[from] DomError),

    #[error("card rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Transport failures while retrieving a static resource
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never produced a response (offline, CORS, bad URL)
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-success status
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read as text
    #[error("could not read body of {url}: {message}")]
    Body { url: String, message: String },
}

/// Document-level XML failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// XML is malformed (not well-formed)
    #[error("invalid XML: {0}")]
    InvalidXml(String),

    /// The document has no collection element
    #[error("missing <{0}> collection element")]
    MissingCollection(String),
}

/// Reasons a single animal entry is skipped
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("unknown category <{0}>")]
    UnknownCategory(String),

    #[error("<{category}> is missing <{field}>")]
    MissingField { category: String, field: &'static str },

    #[error("age '{0}' is not a whole number of years")]
    InvalidAge(String),

    #[error("price '{0}' is not a non-negative number")]
    InvalidPrice(String),
}

/// Failures from the page the routines write into
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomError {
    #[error("no browser window or document available")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("JavaScript error: {0}")]
    Js(String),
}

/// Card template failures
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("card template failed to compile: {0}")]
    Compile(String),

    #[error("card template failed to render: {0}")]
    Render(String),
}

impl From<mustache::Error> for RenderError {
    fn from(err: mustache::Error) -> Self {
        RenderError::Render(err.to_string())
    }
}
