// src/extract/mod.rs
// =============================================================================
// This module finds JavaScript references in a fetched page.
//
// Submodules:
// - resolve: turns relative references into absolute URLs (string rules only)
// - pattern: regex scan over the raw text for quoted ".js" strings
// - markup: HTML scan for <script src="..."> elements
// - links: runs both scans and merges them into one ordered set
// =============================================================================

mod links;
mod markup;
mod pattern;
mod resolve;

pub use links::extract_js_links;
pub use markup::scan_script_tags;
pub use pattern::scan_quoted_js;
pub use resolve::resolve_url;
