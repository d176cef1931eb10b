//! Best-effort recovery of editable parts from a previously rendered document.
//!
//! This is lossy: the body is cut at the first closing cell tag, so content
//! built from table-based components comes back truncated. Nothing here fails;
//! a miss yields the documented fallback.

use super::document::{BODY_MARKER, COMPANY_PLACEHOLDER, CONTENT_PLACEHOLDER};
use regex::Regex;
use std::sync::LazyLock;

static HEADER_COMPANY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class="header-meta">\s*([^<>•]*?)\s*•"#)
        .expect("header pattern is a valid regex")
});

static COMPANY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r">\s*([^<>•]+?)\s*•").expect("company pattern is a valid regex")
});

/// - still an unrendered skeleton: empty string
/// - no body marker: the input unchanged
/// - otherwise: everything after the marker up to the next `</td>`
pub fn extract_content(document: &str) -> String {
    if document.contains(CONTENT_PLACEHOLDER) {
        return String::new();
    }

    let Some(start) = document.find(BODY_MARKER) else {
        return document.to_string();
    };
    let body = &document[start + BODY_MARKER.len()..];
    let end = body.find("</td>").unwrap_or(body.len());
    body[..end].to_string()
}

/// The company shown before the `•` separator in the header, or the literal
/// placeholder when the document was never rendered.
pub fn extract_company_name(document: &str) -> Option<String> {
    if document.contains(COMPANY_PLACEHOLDER) {
        return Some(COMPANY_PLACEHOLDER.to_string());
    }

    // Documents from older layouts lack the header class; the title may carry
    // a bullet of its own, so the loose pattern only scans the body.
    let captures = HEADER_COMPANY_RE.captures(document).or_else(|| {
        let body = document
            .find("<body")
            .map_or(document, |start| &document[start..]);
        COMPANY_RE.captures(body)
    })?;

    let raw = captures.get(1)?.as_str().trim();
    Some(htmlescape::decode_html(raw).unwrap_or_else(|_| raw.to_string()))
}
