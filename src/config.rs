// src/config.rs
// =============================================================================
// Run configuration.
//
// Built once in main() from the command-line flags and never changed after.
// Every worker reads the same values (timeout, complete mode, ...), so the
// struct is plain data that is cheap to clone.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_THREADS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Per-request timeout for the HTTP client
    pub timeout: Duration,
    /// Maximum number of pages fetched at the same time
    pub threads: usize,
    /// Resolve every reference to an absolute URL
    pub complete: bool,
    /// Optional file that results are appended to
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub silent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            threads: DEFAULT_THREADS,
            complete: false,
            output: None,
            verbose: false,
            silent: false,
        }
    }
}

impl Config {
    // Capacity of the admission gate.
    // A semaphore with zero permits would block every task forever.
    pub fn concurrency(&self) -> usize {
        self.threads.max(1)
    }
}
