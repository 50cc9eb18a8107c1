// src/logging.rs
// =============================================================================
// Logger setup.
//
// Diagnostics go through the `log` macros and are printed by env_logger on
// stderr. Without --verbose only errors get through; with it, progress lines
// and per-URL failures are shown too. RUST_LOG is read first, then the level
// from the flag is applied on top.
// =============================================================================

use colored::*;
use log::LevelFilter;
use std::io::Write;

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Error
    }
}

// Levels for chatty dependencies: never louder than `level`, and capped
// further even when verbose. html5ever complains about every broken page.
pub fn dependency_levels(level: LevelFilter) -> [(&'static str, LevelFilter); 4] {
    [
        ("html5ever", level.min(LevelFilter::Error)),
        ("selectors", level.min(LevelFilter::Warn)),
        ("reqwest", level.min(LevelFilter::Info)),
        ("hyper", level.min(LevelFilter::Info)),
    ]
}

// Installs the global logger. Calling it twice is harmless (tests do).
pub fn init_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = level_for(verbose);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, cap) in dependency_levels(level) {
        builder.filter_module(module, cap);
    }
    builder.filter_module("jscrawler", level);

    builder.format(|buf, record| {
        let tag = match record.level() {
            log::Level::Error => "ERROR".red(),
            log::Level::Warn => "WARN".yellow(),
            log::Level::Info => "INFO".green(),
            log::Level::Debug => "DEBUG".blue(),
            log::Level::Trace => "TRACE".purple(),
        };
        writeln!(buf, "[{}] {}", tag, record.args())
    });

    builder.try_init()
}
