// src/extract/links.rs
// =============================================================================
// Combines the two scans into the final reference set for one page.
//
// How it works:
// 1. Textual scan: every quoted ".js" string in the raw content
// 2. Structural scan: every <script src> in the parsed document
// 3. Each candidate is resolved (when `complete` is set) or kept verbatim
// 4. Everything goes into one ordered set, so duplicates collapse
//
// If the structural scan fails, we log it and keep the textual results.
// =============================================================================

use super::markup::scan_script_tags;
use super::pattern::scan_quoted_js;
use super::resolve::resolve_url;
use indexmap::IndexSet;

// Extracts the JavaScript references found on one page.
//
// Parameters:
//   base_url: the URL the page was fetched from
//   content: the page body
//   complete: resolve each reference to an absolute URL
//
// Returns: the deduplicated references, textual-scan hits first, then
// script elements, each in the order they were found.
pub fn extract_js_links(base_url: &str, content: &str, complete: bool) -> IndexSet<String> {
    let mut links = IndexSet::new();

    let normalize = |reference: &str| {
        if complete {
            resolve_url(base_url, reference)
        } else {
            reference.to_string()
        }
    };

    for reference in scan_quoted_js(content) {
        links.insert(normalize(reference));
    }

    match scan_script_tags(content) {
        Ok(sources) => {
            for src in sources {
                links.insert(normalize(&src));
            }
        }
        Err(e) => {
            log::warn!("Skipping script tag scan for {}: {}", base_url, e);
        }
    }

    links
}
