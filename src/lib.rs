// src/lib.rs
// =============================================================================
// jscrawler: fetch web pages and list the JavaScript files they reference.
//
// Pipeline:
//   stdin URLs -> crawl (bounded pool) -> fetch -> extract -> sink
//
// main.rs is a thin wrapper; everything lives here so tests/ can use it.
// =============================================================================

pub mod banner;
pub mod cli;
pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod input;
pub mod logging;
pub mod sink;

pub use config::Config;
pub use crawl::{run, run_with_sink, RunSummary};
pub use error::{CrawlError, ExtractionError, FetchError};
pub use sink::Sink;
