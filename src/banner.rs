// src/banner.rs
// =============================================================================
// Startup banner and version line.
//
// The banner goes to stderr so stdout carries nothing but results and can be
// piped straight into other tools.
// =============================================================================

pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

const ART: &str = r"
       _                                     __
      (_)_____ _____ _____ ____ _ _      __ / /___   _____
     / // ___// ___// ___// __  /| | /| / // // _ \ / ___/
    / /(__  )/ /__ / /   / /_/ / | |/ |/ // //  __// /
 __/ //____/ \___//_/    \__,_/  |__/|__//_/ \___//_/
/___/
";

pub fn version_line() -> String {
    format!("Current jscrawler version {}", VERSION)
}

pub fn print_banner() {
    eprintln!("{}\n{:>60}\n", ART, version_line());
}

pub fn print_version() {
    println!("{}", version_line());
}
