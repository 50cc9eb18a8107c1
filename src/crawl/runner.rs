// src/crawl/runner.rs
// =============================================================================
// Entry points for a full run.
//
// Order of events:
// 1. Open the output sink (fatal if the file cannot be opened)
// 2. Build the shared HTTP client
// 3. Dispatch every URL through the pool and wait for all of them
// 4. Close the sink, exactly once
// =============================================================================

use super::page::process_page;
use super::pool::{dispatch, RunSummary};
use crate::config::Config;
use crate::error::CrawlError;
use crate::fetch::Fetcher;
use crate::sink::Sink;
use std::sync::Arc;

// Runs the whole pipeline, printing to stdout and appending to the
// configured output file.
pub async fn run(urls: Vec<String>, config: &Config) -> Result<RunSummary, CrawlError> {
    let sink = Arc::new(Sink::open(config.output.as_deref())?);

    let summary = run_with_sink(urls, config, Arc::clone(&sink)).await?;

    // Every task has finished, so this is the last handle to the sink
    match Arc::try_unwrap(sink) {
        Ok(sink) => {
            if let Err(e) = sink.close() {
                log::warn!("Error closing output: {}", e);
            }
        }
        Err(_) => log::warn!("Output sink still in use after the run finished"),
    }

    Ok(summary)
}

// Runs the pipeline against a sink supplied by the caller.
//
// The sink is not closed here; whoever created it closes it.
pub async fn run_with_sink(
    urls: Vec<String>,
    config: &Config,
    sink: Arc<Sink>,
) -> Result<RunSummary, CrawlError> {
    let fetcher = Fetcher::new(config.timeout)?;
    let complete = config.complete;

    log::info!(
        "Fetching {} URL(s), up to {} at a time",
        urls.len(),
        config.concurrency()
    );

    let summary = dispatch(urls, config.concurrency(), move |url| {
        let fetcher = fetcher.clone();
        let sink = Arc::clone(&sink);
        async move { process_page(&fetcher, &url, complete, &sink).await }
    })
    .await;

    log::info!(
        "Done: {} page(s) scanned, {} failed, {} reference(s) emitted",
        summary.pages_ok,
        summary.pages_failed,
        summary.references
    );

    Ok(summary)
}
