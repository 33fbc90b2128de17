// src/crawl/run.rs
// =============================================================================
// Drives a CrawlState from the seed address to DONE.
//
// The loop is deliberately sequential: each step awaits its page fetch
// before the next address is popped. Every pop prints one progress line to
// stdout; diagnostics go through tracing (stderr).
// =============================================================================

use super::state::{CrawlState, ResolutionPolicy, Step};
use crate::domain::DomainNormalizer;
use crate::error::Result;
use crate::extract::LinkExtractor;
use std::time::Instant;
use tracing::info;

/// Knobs for a single crawl
#[derive(Debug, Clone)]
pub struct CrawlSettings {
    /// Stop once this many distinct domains are recorded
    pub max_domains: usize,
    pub resolution_policy: ResolutionPolicy,
}

impl Default for CrawlSettings {
    fn default() -> Self {
        Self {
            max_domains: 500,
            resolution_policy: ResolutionPolicy::Abort,
        }
    }
}

// Crawls outward from `seed` and returns the distinct registrable domains
// in the order they were first seen
//
// Returns: at most settings.max_domains domains. Fewer only when the
// frontier ran dry first.
pub async fn crawl<E: LinkExtractor>(
    seed: &str,
    settings: &CrawlSettings,
    normalizer: &DomainNormalizer,
    extractor: &E,
) -> Result<Vec<String>> {
    info!(seed, max_domains = settings.max_domains, "starting crawl");
    let started = Instant::now();

    let mut state = CrawlState::new(seed, settings.max_domains, settings.resolution_policy);

    while state.is_running() {
        let step = state.step(normalizer, extractor).await?;
        if let Some(line) = progress_line(&step, state.visited_count()) {
            println!("{}", line);
        }
    }

    let frontier_left = state.frontier_len();
    let domains = state.into_domains();

    info!(
        domains = domains.len(),
        frontier_left,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "crawl finished"
    );

    Ok(domains)
}

// Formats the progress line for one pop
fn progress_line(step: &Step, visited: usize) -> Option<String> {
    match step {
        Step::FirstSight {
            pop,
            address,
            domain,
            links_added,
        } => Some(format!(
            "Domains: {} | Crawling [{}] {} -> {} (+{} links)",
            visited, pop, address, domain, links_added
        )),
        Step::Duplicate {
            pop,
            address,
            domain,
        } => Some(format!(
            "Domains: {} | Seen     [{}] {} -> {}",
            visited, pop, address, domain
        )),
        Step::Skipped { pop, address } => Some(format!(
            "Domains: {} | Skipped  [{}] {} -> (unresolvable)",
            visited, pop, address
        )),
        Step::Done => None,
    }
}
