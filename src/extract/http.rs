// src/extract/http.rs
// =============================================================================
// This module fetches pages over HTTP(S) and returns their links.
//
// Key behavior:
// - One reqwest Client is built up front and reused (connection pooling)
// - Every request has a timeout, so one slow server can't stall the crawl
// - ANY failure (DNS, refused connection, timeout, ftp:// or relative
//   addresses reqwest won't even send, undecodable body) becomes an empty
//   link list plus a warning in the log
// - The status code is not checked. A 404 page is still HTML, and its
//   anchors are still links
// =============================================================================

use super::html::extract_anchor_targets;
use super::LinkExtractor;
use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

pub struct HttpLinkExtractor {
    client: Client,
}

impl HttpLinkExtractor {
    // Builds the shared HTTP client
    //
    // Parameters:
    //   timeout: upper bound for a single request, connect through body
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }

    // Fetches a page body as text
    async fn fetch_page(&self, address: &str) -> reqwest::Result<String> {
        let response = self.client.get(address).send().await?;
        debug!(address, status = %response.status(), "fetched page");
        response.text().await
    }
}

impl LinkExtractor for HttpLinkExtractor {
    async fn extract_links(&self, address: &str) -> Vec<String> {
        match self.fetch_page(address).await {
            Ok(html) => extract_anchor_targets(&html),
            Err(e) => {
                warn!(address, error = %e, "failed to extract links");
                Vec::new()
            }
        }
    }
}
