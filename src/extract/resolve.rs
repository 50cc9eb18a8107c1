// src/extract/resolve.rs
// =============================================================================
// Turns a possibly-relative script reference into an absolute URL.
//
// This works on plain strings instead of the `url` crate: references found in
// page text are often not valid URLs at all (template fragments, minified
// code), and we still want a best-effort answer instead of an error.
//
// Rules, checked in order:
//   1. "http://..." or "https://..."  -> returned unchanged
//   2. "//cdn.example/x.js"           -> scheme of the base + reference
//   3. "/static/x.js"                 -> scheme://host of the base + reference
//   4. "x.js"                         -> directory of the base + "/" + reference
// =============================================================================

// Resolves `reference` against the page it was found on.
//
// Examples:
//   base = "https://a.b/x/y"
//   "/c.js"          -> "https://a.b/c.js"
//   "c.js"           -> "https://a.b/x/c.js"
//   "//cdn.c/d.js"   -> "https://cdn.c/d.js"
pub fn resolve_url(base: &str, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }

    if reference.starts_with("//") {
        let scheme = if base.starts_with("https://") {
            "https:"
        } else {
            "http:"
        };
        return format!("{}{}", scheme, reference);
    }

    // Index of the first byte of the host, if the base has a scheme at all
    let host_start = base.find("://").map(|i| i + 3);

    if reference.starts_with('/') {
        let Some(host_start) = host_start else {
            // No scheme to anchor on: hand the reference back untouched
            return reference.to_string();
        };
        let root = match base[host_start..].find('/') {
            Some(host_len) => &base[..host_start + host_len],
            None => base,
        };
        return format!("{}{}", root, reference);
    }

    // Only a slash past "://" may be cut at, so a bare "https://host" never
    // gets cut back into the scheme. Without a scheme the slash must sit past
    // index 1: "a/b" stays whole, "ab/c" becomes "ab".
    let threshold = host_start.map_or(1, |start| start - 1);
    let directory = match base.rfind('/') {
        Some(pos) if pos > threshold => &base[..pos],
        _ => base,
    };
    format!("{}/{}", directory, reference)
}
