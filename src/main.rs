// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Handle --version (banner + version, then exit)
// 3. Set up logging and show the banner unless --silent
// 4. Read URLs from stdin and run the crawl
// 5. Exit with proper code (0 = run completed, 2 = fatal error)
//
// A run where some pages failed still exits 0: those failures are only
// reported in the --verbose log.
// =============================================================================

use anyhow::Result;
use clap::Parser;
use jscrawler::banner;
use jscrawler::cli::Cli;
use jscrawler::input::read_urls;
use jscrawler::logging::init_logger;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a multi-threaded tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    if cli.version {
        banner::print_banner();
        banner::print_version();
        return Ok(0);
    }

    let config = cli.into_config();
    init_logger(config.verbose)?;

    if !config.silent {
        banner::print_banner();
    }

    let urls = read_urls(std::io::stdin().lock())?;
    if urls.is_empty() {
        return Ok(0);
    }

    jscrawler::run(urls, &config).await?;
    Ok(0)
}
