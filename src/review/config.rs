//! Connection configuration for [`ReviewClient`](super::ReviewClient).

use std::time::Duration;

use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use super::endpoints::parse_base_address;
use super::error::ReviewError;

/// Address of a review service running locally.
pub const DEFAULT_BASE_ADDRESS: &str = "http://localhost:8080/api";

/// Timeout applied to every non-streaming request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(150);

const JSON: &str = "application/json";

/// Base address, timeout, and default headers for a client.
///
/// The configuration is frozen once handed to a client; calls only ever read
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_address: Url,
    timeout: Duration,
    default_headers: HeaderMap,
}

impl ClientConfig {
    /// Configuration for `base_address` with the default timeout and JSON
    /// headers.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidBaseAddress`] when the address is not a
    /// usable `http`/`https` URL.
    pub fn new(base_address: &str) -> Result<Self, ReviewError> {
        Ok(Self {
            base_address: parse_base_address(base_address)?,
            timeout: DEFAULT_TIMEOUT,
            default_headers: json_headers(),
        })
    }

    /// Configuration for [`DEFAULT_BASE_ADDRESS`].
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature mirrors [`ClientConfig::new`].
    pub fn local() -> Result<Self, ReviewError> {
        Self::new(DEFAULT_BASE_ADDRESS)
    }

    /// Replaces the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds or replaces one default header.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidHeader`] when the name or value is not a
    /// valid HTTP header.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, ReviewError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|error| ReviewError::InvalidHeader {
                name: name.to_owned(),
                message: error.to_string(),
            })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|error| ReviewError::InvalidHeader {
                name: name.to_owned(),
                message: error.to_string(),
            })?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Base address all endpoint paths are appended to.
    #[must_use]
    pub const fn base_address(&self) -> &Url {
        &self.base_address
    }

    /// Timeout applied to non-streaming requests.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
    headers.insert(ACCEPT, HeaderValue::from_static(JSON));
    headers
}
