// src/extract/mod.rs
// =============================================================================
// This module turns an address into the list of links found on that page.
//
// Submodules:
// - html: Pulls raw href values out of anchor tags
// - http: Fetches pages with reqwest and feeds them to the html parser
//
// The crawl loop only talks to the LinkExtractor trait below, so tests can
// swap the network for an in-memory link graph.
// =============================================================================

mod html;
mod http;

pub use http::HttpLinkExtractor;

/// Something that can list the outbound links of an address.
///
/// Implementations never fail: anything that goes wrong while fetching or
/// parsing is reported as an empty list, and the crawl moves on.
pub trait LinkExtractor {
    async fn extract_links(&self, address: &str) -> Vec<String>;
}
