// src/fetch/mod.rs
// =============================================================================
// This module downloads pages.
//
// Submodules:
// - http: one shared reqwest client, one GET per page, failures classified
//   into FetchError variants
// =============================================================================

mod http;

pub use http::Fetcher;
