//! # Network Layer
//!
//! Everything that talks HTTP lives here. Nothing in this module touches
//! application state; callers get plain values or typed errors back.
//!
//! - [`client`]: shared `reqwest::Client` with the fixed header set
//! - [`download`]: streamed downloads with progress, plain fetches
//! - [`github`]: release lookups and version comparison
//! - [`html`]: tolerant regex-based element scanner
//! - [`scrape`]: per-site extraction of the latest distro images
//! - [`resolver`]: the `Resolver` trait the app uses for all lookups

pub mod client;
pub mod download;
pub mod github;
pub mod html;
pub mod resolver;
pub mod scrape;

use std::fmt;

/// Errors from version lookups, link expansion and the update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetError {
    /// Request never produced a response (DNS, timeout, refused).
    Network(String),
    /// Server answered with a non-success status.
    Api { status: u16, url: String },
    /// Response body was not what the parser expected.
    Parse(String),
    /// Page parsed fine but the wanted item was missing.
    NotFound(String),
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::Network(msg) => write!(f, "network error: {msg}"),
            NetError::Api { status, url } => write!(f, "HTTP {status} from {url}"),
            NetError::Parse(msg) => write!(f, "parse error: {msg}"),
            NetError::NotFound(what) => write!(f, "not found: {what}"),
        }
    }
}

impl std::error::Error for NetError {}
