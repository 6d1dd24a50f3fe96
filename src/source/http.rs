//! HTTP page source backed by a blocking reqwest client.
//!
//! The page loop runs on the UI thread between frames, so a blocking client
//! keeps requests strictly sequential without an async runtime. No timeout
//! is configured beyond the transport default and failed requests are never
//! retried.

use super::{Page, PageSource};
use crate::model::FetchError;
use reqwest::blocking::Client;

/// Default `User-Agent` header sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("rmdex/", env!("CARGO_PKG_VERSION"));

/// Fetches pages over HTTP/HTTPS.
#[derive(Debug)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    /// Create a source with the given user agent.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the HTTP client cannot be created.
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&mut self, url: &str) -> Result<Page, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

        Page::from_json(url, &body)
    }
}
