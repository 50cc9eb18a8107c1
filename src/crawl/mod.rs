// src/crawl/mod.rs
// =============================================================================
// This module drives a whole run.
//
// Features:
// - One task per input URL, all spawned up front
// - At most N pages fetched at once (an admission gate shared by all tasks)
// - A failed page is logged and skipped; it never stops the others
// - The run returns only after every task has finished
//
// Submodules:
// - pool: the admission gate and task fan-out
// - page: fetch -> extract -> emit for a single URL
// - runner: wires config, fetcher, sink and pool together
// =============================================================================

mod page;
mod pool;
mod runner;

pub use page::process_page;
pub use pool::{dispatch, RunSummary};
pub use runner::{run, run_with_sink};
