//! Building and recovering share links.

use std::fmt;

use crate::record::ProjectRecord;

/// Query parameter carrying the compressed project.
const PARAM: &str = "p";

/// Result type for link building.
pub type ShareResult<T> = Result<T, ShareError>;

/// Errors that can occur while building a share link.
#[derive(Debug)]
pub enum ShareError {
    /// The record could not be serialized.
    Json(serde_json::Error),
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "project record serialization failed: {err}"),
        }
    }
}

impl std::error::Error for ShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ShareError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Builds a shareable URL opening `page_url` with the record attached.
///
/// The token needs no percent-escaping; every character it can contain
/// survives a query string as-is.
///
/// # Errors
///
/// Returns [`ShareError::Json`] if the record fails to serialize.
pub fn share_url(page_url: &str, record: &ProjectRecord) -> ShareResult<String> {
    let json = serde_json::to_string(record)?;
    let token = codec::encode(&json);
    Ok(format!("{page_url}?{PARAM}={token}"))
}

/// Recovers a project from a URL query string.
///
/// Accepts the query with or without its leading `?`. Every failure along
/// the way - missing parameter, malformed token, unparseable JSON - degrades
/// to `None`: a shared link must never crash the page that opens it.
#[must_use]
pub fn record_from_query(query: &str) -> Option<ProjectRecord> {
    let token = query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix(PARAM).and_then(|rest| rest.strip_prefix('=')))?;
    let json = codec::decode(token).ok().flatten()?;
    serde_json::from_str(&json).ok()
}
