// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// a Rust struct and attributes (the #[...] things). There are no
// subcommands: URLs come in on stdin and every option is a flag.
//
// Example:
//   cat urls.txt | jscrawler --complete -t 20 -o scripts.txt
// =============================================================================

use crate::config::{Config, DEFAULT_THREADS, DEFAULT_TIMEOUT_SECS};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

// clap's own --version is turned off: ours prints the banner as well.
#[derive(Parser, Debug)]
#[command(
    name = "jscrawler",
    about = "Fetch web pages and list every JavaScript file they reference",
    long_about = "jscrawler reads URLs from stdin (one per line), fetches each page and prints \
                  every JavaScript reference it finds, from <script src> tags and from quoted \
                  strings in the page text.",
    disable_version_flag = true
)]
pub struct Cli {
    /// Timeout (in seconds) for http client
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Get complete URLs (resolve relative references against the page URL)
    #[arg(long)]
    pub complete: bool,

    /// Output file to save results (appended to, never truncated)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of pages to fetch at the same time
    #[arg(short, long, default_value_t = DEFAULT_THREADS, value_parser = parse_threads)]
    pub threads: usize,

    /// Silent mode (no banner)
    #[arg(long)]
    pub silent: bool,

    /// Print the version of the tool and exit
    #[arg(long)]
    pub version: bool,

    /// Enable verbose output for debugging purposes
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            timeout: Duration::from_secs(self.timeout),
            threads: self.threads,
            complete: self.complete,
            output: self.output,
            verbose: self.verbose,
            silent: self.silent,
        }
    }
}

fn parse_threads(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
