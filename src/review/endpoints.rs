//! URL construction for the review service endpoints.
//!
//! Paths are appended to the configured base address verbatim, so a base of
//! `http://localhost:8080/api` yields `http://localhost:8080/api/review/history`.
//! Titles are encoded with the same rules as JavaScript's
//! `encodeURIComponent`: a space becomes `%20`, never `+`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use super::error::ReviewError;

/// Path of the review history listing.
pub const HISTORY_PATH: &str = "/review/history";

/// Path of the combined analysis and statistics lookup.
pub const REVIEW_PATH: &str = "/review";

/// Path of the live analysis event stream.
pub const ANALYSIS_PATH: &str = "/review/analysis";

/// Name of the query parameter carrying the review title.
pub const TITLE_PARAM: &str = "title";

/// Characters left untouched by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Parses and validates a base address.
///
/// # Errors
///
/// Returns [`ReviewError::InvalidBaseAddress`] when the address does not parse
/// or is not an `http`/`https` URL that can carry a path.
pub fn parse_base_address(address: &str) -> Result<Url, ReviewError> {
    let url = Url::parse(address.trim()).map_err(|error| ReviewError::InvalidBaseAddress {
        address: address.to_owned(),
        message: error.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ReviewError::InvalidBaseAddress {
            address: address.to_owned(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if url.cannot_be_a_base() || url.query().is_some() || url.fragment().is_some() {
        return Err(ReviewError::InvalidBaseAddress {
            address: address.to_owned(),
            message: "base address must be a plain URL without query or fragment".to_owned(),
        });
    }

    Ok(url)
}

/// Encodes a single query component like `encodeURIComponent`.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// URL of the history listing.
///
/// # Errors
///
/// Returns [`ReviewError::InvalidBaseAddress`] if the joined URL is invalid.
pub fn history_url(base: &Url) -> Result<Url, ReviewError> {
    endpoint(base, HISTORY_PATH, None)
}

/// URL of the analysis and statistics lookup for `title`.
///
/// # Errors
///
/// Returns [`ReviewError::InvalidBaseAddress`] if the joined URL is invalid.
pub fn review_url(base: &Url, title: &str) -> Result<Url, ReviewError> {
    endpoint(base, REVIEW_PATH, Some(title))
}

/// URL of the live analysis stream for `title`.
///
/// # Errors
///
/// Returns [`ReviewError::InvalidBaseAddress`] if the joined URL is invalid.
pub fn analysis_url(base: &Url, title: &str) -> Result<Url, ReviewError> {
    endpoint(base, ANALYSIS_PATH, Some(title))
}

fn endpoint(base: &Url, path: &str, title: Option<&str>) -> Result<Url, ReviewError> {
    let mut raw = format!("{}{path}", base.as_str().trim_end_matches('/'));
    if let Some(value) = title {
        raw.push('?');
        raw.push_str(TITLE_PARAM);
        raw.push('=');
        raw.push_str(&encode_component(value));
    }

    Url::parse(&raw).map_err(|error| ReviewError::InvalidBaseAddress {
        address: base.to_string(),
        message: error.to_string(),
    })
}
