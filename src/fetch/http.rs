// src/fetch/http.rs
// =============================================================================
// This module fetches page bodies over HTTP(S).
//
// Key functionality:
// - One GET request per page, no retries
// - Certificate checks are switched off so staging and self-signed hosts work
// - Anything other than 200 OK is a failure for that page
// - Network errors are sorted into FetchError variants for the log
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Result<T, E>: every failure is a value, nothing here panics
// - Clone: reqwest::Client is a cheap handle around a shared connection pool
// =============================================================================

use crate::error::FetchError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

// Shared HTTP client for one run.
//
// Build it once and clone it into every worker; clones reuse the same
// connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    // Creates the client with the run's timeout and relaxed TLS checks.
    // Redirects follow reqwest's default policy.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Fetcher { client })
    }

    // Downloads one page and returns its raw body.
    //
    // The timeout covers the whole exchange, including reading the body.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::NonSuccessStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::BodyRead(e.to_string())
            }
        })?;

        Ok(body.to_vec())
    }
}

// Sorts a reqwest error into one of our failure kinds.
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - Connection refused / DNS failure / TLS handshake
// - Malformed URL (builder error)
// - etc.
fn categorize_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_connect() {
        FetchError::Connection(error.to_string())
    } else if error.is_body() || error.is_decode() {
        FetchError::BodyRead(error.to_string())
    } else {
        FetchError::Other(error.to_string())
    }
}
