// src/error.rs
// =============================================================================
// Error types for the whole crate.
//
// There are two kinds of failure:
// - Fatal (CrawlError): the run cannot start at all. We stop before any
//   network request is made.
// - Per-URL (FetchError, ExtractionError): only one page is affected. The
//   worker logs it and moves on. These never reach main().
//
// Rust concepts:
// - thiserror: derive macro that writes the Display/Error impls for us
// - #[source]: links an error to the lower-level error that caused it
// =============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the whole run.
#[derive(Error, Debug)]
pub enum CrawlError {
    /// Standard input could not be read.
    #[error("failed to read URLs from stdin: {0}")]
    Input(#[source] io::Error),

    /// The shared output file could not be opened for appending.
    #[error("error opening output file {}: {source}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The shared HTTP client could not be built.
    #[error("HTTP client initialization error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Why a single page could not be fetched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Connection(String),

    /// Anything other than 200 OK.
    #[error("HTTP Error {0}")]
    NonSuccessStatus(u16),

    #[error("error reading response body: {0}")]
    BodyRead(String),

    #[error("an error occurred: {0}")]
    Other(String),
}

/// The markup scan failed; the textual scan results are still used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}
