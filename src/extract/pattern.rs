// src/extract/pattern.rs
// =============================================================================
// Textual scan: finds script references anywhere in the page text.
//
// Script URLs show up in a lot of places the HTML parser never looks at:
// inline loaders, JSON blobs, `import()` calls, data attributes. So we also
// run a plain regex over the raw content and keep every quoted string that
// mentions ".js".
//
// Rust concepts:
// - LazyLock: compile the regex once, the first time it is used
// - captures_iter: walks every non-overlapping match in the text
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

// A single- or double-quoted string containing ".js" somewhere inside it.
// Group 1 is the string without its quotes.
static QUOTED_JS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"]([^'"]*\.js[^'"]*)['"]"#).expect("valid regex")
});

// Returns every quoted ".js" string in `content`, in the order they appear.
//
// Strings mentioning ".json" are dropped: "config.json" would otherwise
// match because it contains ".js".
pub fn scan_quoted_js(content: &str) -> Vec<&str> {
    QUOTED_JS_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|candidate| !candidate.contains(".json"))
        .collect()
}
