// src/crawl/mod.rs
// =============================================================================
// This module handles the domain crawl.
//
// Features:
// - Breadth-first traversal starting from a single seed address
// - Every address is reduced to its registrable domain; only the FIRST
//   address seen for a domain gets its links followed
// - Stops after max_domains distinct domains or when the queue runs dry
//
// Submodules:
// - state: the frontier/visited state machine and its step() transition
// - run: the loop that drives it and prints progress
// =============================================================================

mod run;
mod state;

#[cfg(test)]
mod test_graph;

pub use run::{crawl, CrawlSettings};
pub use state::ResolutionPolicy;
