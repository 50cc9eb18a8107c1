// src/crawl/page.rs
// =============================================================================
// Processes a single URL: fetch the page, extract its scripts, emit them.
//
// The steps always run in this order for one page. A fetch failure ends the
// work for this URL only: it is logged (visible with --verbose) and the
// error is returned so the pool can count it.
// =============================================================================

use crate::error::FetchError;
use crate::extract::extract_js_links;
use crate::fetch::Fetcher;
use crate::sink::Sink;

// Fetches `url`, extracts its JavaScript references and writes each one to
// the sink.
//
// Returns: how many references were emitted for this page
pub async fn process_page(
    fetcher: &Fetcher,
    url: &str,
    complete: bool,
    sink: &Sink,
) -> Result<usize, FetchError> {
    let url = url.trim();
    log::info!("Processing URL: {}", url);

    let body = fetcher.fetch(url).await.map_err(|e| {
        report_failure(url, &e);
        e
    })?;

    // Pages are not always valid UTF-8; bad bytes become U+FFFD
    let content = String::from_utf8_lossy(&body);
    let links = extract_js_links(url, &content, complete);

    for link in &links {
        sink.emit(link);
    }

    log::debug!("{} JavaScript reference(s) found on {}", links.len(), url);
    Ok(links.len())
}

fn report_failure(url: &str, error: &FetchError) {
    match error {
        FetchError::Timeout => {
            log::warn!("Timeout occurred while fetching: {}", url)
        }
        FetchError::Connection(_) => log::warn!(
            "A connection error occurred. Please check your internet connection: {}",
            url
        ),
        FetchError::NonSuccessStatus(code) => log::warn!("HTTP Error {}: {}", code, url),
        FetchError::BodyRead(e) => log::warn!("Error reading response body: {}", e),
        FetchError::Other(e) => log::warn!("An error occurred: {}", e),
    }
}
