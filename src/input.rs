// src/input.rs
// =============================================================================
// Reads the target URLs, one per line.
//
// Lines are trimmed and blank lines are skipped. Nothing else is checked:
// a malformed URL simply fails later, when we try to fetch it.
// =============================================================================

use crate::error::CrawlError;
use std::io::BufRead;

// Reads every non-blank line from `reader` until end of input.
//
// Lines are split on raw bytes and decoded lossily, so a line that is not
// valid UTF-8 is kept (bad bytes become U+FFFD) instead of ending the read.
// Only a real I/O error is fatal.
pub fn read_urls<R: BufRead>(reader: R) -> Result<Vec<String>, CrawlError> {
    let mut urls = Vec::new();

    for line in reader.split(b'\n') {
        let line = line.map_err(CrawlError::Input)?;
        let line = String::from_utf8_lossy(&line);
        let url = line.trim();
        if !url.is_empty() {
            urls.push(url.to_string());
        }
    }

    Ok(urls)
}
