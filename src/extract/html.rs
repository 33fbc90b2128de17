// src/extract/html.rs
// =============================================================================
// This module extracts link targets from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser), so broken markup or a
//   body that isn't HTML at all still parses, it just has no anchors
//
// Unlike a link checker we do NOT resolve or filter anything here. Relative
// links, ftp:// links, mailto: links all come back exactly as written; the
// crawl loop decides what they are worth.
// =============================================================================

use scraper::{Html, Selector};

// Extracts the href of every <a> tag, in document order
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='ftp://x.org/f'>F</a>"
//   result = ["/docs", "ftp://x.org/f"]
pub fn extract_anchor_targets(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // "a[href]" is a constant selector, so parsing it can only fail if this
    // line is edited into something invalid
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}
