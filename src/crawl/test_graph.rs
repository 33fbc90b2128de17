// In-memory link graph for crawl tests. Addresses without a page behave
// like failed fetches.

use crate::extract::LinkExtractor;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
pub struct LinkGraph {
    pages: HashMap<String, Vec<String>>,
    fetches: RefCell<Vec<String>>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, address: &str, links: &[&str]) -> Self {
        self.pages.insert(
            address.to_string(),
            links.iter().map(|l| l.to_string()).collect(),
        );
        self
    }

    /// Every address extract_links was called with, in call order
    pub fn fetches(&self) -> Vec<String> {
        self.fetches.borrow().clone()
    }
}

impl LinkExtractor for LinkGraph {
    async fn extract_links(&self, address: &str) -> Vec<String> {
        self.fetches.borrow_mut().push(address.to_string());
        self.pages.get(address).cloned().unwrap_or_default()
    }
}
