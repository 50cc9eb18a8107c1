// src/extract/markup.rs
// =============================================================================
// Structural scan: reads the `src` of every <script> element.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which recovers from broken markup the same way a
//   browser does, so a malformed page still produces a tree
//
// Rust concepts:
// - Result<T, E>: the only thing that can fail here is building the selector
// - Iterators: document.select() walks the tree depth-first, in document order
// =============================================================================

use crate::error::ExtractionError;
use scraper::{Html, Selector};

// The only script type we accept besides "no type at all"
const JAVASCRIPT_TYPE: &str = "text/javascript";

// Returns the `src` of every external JavaScript <script> element in `html`.
//
// A script element counts when:
//   - its src attribute is present and non-empty
//   - its type attribute is missing, or equals "text/javascript" (any case)
//
// Example:
//   <script src="app.js"></script>                      -> "app.js"
//   <script type="TEXT/JAVASCRIPT" src="b.js"></script> -> "b.js"
//   <script type="text/css" src="x.js"></script>        -> skipped
//   <script>inline()</script>                           -> skipped
pub fn scan_script_tags(html: &str) -> Result<Vec<String>, ExtractionError> {
    let selector = Selector::parse("script")
        .map_err(|e| ExtractionError::InvalidSelector(e.to_string()))?;

    let document = Html::parse_document(html);

    let sources = document
        .select(&selector)
        .filter_map(|element| {
            let element = element.value();
            let src = element.attr("src").filter(|src| !src.is_empty())?;
            let is_javascript = element
                .attr("type")
                .map_or(true, |kind| kind.eq_ignore_ascii_case(JAVASCRIPT_TYPE));
            is_javascript.then(|| src.to_string())
        })
        .collect();

    Ok(sources)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does .value() do?
//    - element is an ElementRef (reference to a node in the tree)
//    - .value() gets the underlying Element with its name and attributes
//    - .attr("src") returns Option<&str>: None when the attribute is missing
//
// 2. What is bool::then?
//    - cond.then(|| x) is Some(x) when cond is true, None otherwise
//    - Handy inside filter_map
//
// 3. Why does this return a Result at all?
//    - Html::parse_document never fails; it repairs bad markup instead
//    - Selector::parse can fail, and we report that instead of panicking
// -----------------------------------------------------------------------------
