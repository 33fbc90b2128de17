// src/crawl/state.rs
// =============================================================================
// The crawl state machine: one frontier queue, one visited-domain list, and
// a single step() that moves between them.
//
// How a step works:
// 1. Pop the address at the head of the frontier
// 2. Normalize it to a registrable domain
// 3. First time we see that domain? Record it and push every link on the
//    page onto the tail of the frontier
// 4. Seen it already? Drop the address, its links are never fetched
//
// The crawl is RUNNING while the frontier has addresses AND fewer than
// max_domains domains have been recorded. Otherwise it is DONE.
//
// Rust concepts:
// - VecDeque: push_back/pop_front give us FIFO order, which is what makes
//   this breadth-first
// - HashSet + Vec: the set answers "seen it?" in O(1), the Vec remembers the
//   order domains were first seen in
// =============================================================================

use crate::domain::DomainNormalizer;
use crate::error::Result;
use crate::extract::LinkExtractor;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, warn};

/// What to do with an address the normalizer cannot resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPolicy {
    /// Stop the whole crawl with the resolution error
    #[default]
    Abort,
    /// Log it, drop the address, keep crawling
    Skip,
}

/// The outcome of one step()
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Domain seen for the first time; its links were enqueued
    FirstSight {
        pop: usize,
        address: String,
        domain: String,
        links_added: usize,
    },
    /// Domain was already recorded; address discarded
    Duplicate {
        pop: usize,
        address: String,
        domain: String,
    },
    /// Address could not be resolved and the policy said to skip it
    Skipped { pop: usize, address: String },
    /// Nothing left to do
    Done,
}

/// Frontier and visited domains for a single crawl.
///
/// Every first-sight address contributes all of its links, however many
/// domains are still needed, so the frontier can grow far beyond
/// `max_domains` addresses on link-heavy pages. It lives only as long as
/// the crawl does.
pub struct CrawlState {
    frontier: VecDeque<String>,
    seen: HashSet<String>,
    domains: Vec<String>,
    max_domains: usize,
    pops: usize,
    policy: ResolutionPolicy,
}

impl CrawlState {
    pub fn new(seed: &str, max_domains: usize, policy: ResolutionPolicy) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(seed.to_string());

        Self {
            frontier,
            seen: HashSet::new(),
            domains: Vec::new(),
            max_domains,
            pops: 0,
            policy,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.frontier.is_empty() && self.domains.len() < self.max_domains
    }

    pub fn visited_count(&self) -> usize {
        self.domains.len()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    // Performs one transition
    //
    // Returns Err only for an unresolvable address under ResolutionPolicy::Abort.
    // Calling step() after the crawl is DONE is harmless and returns Step::Done.
    pub async fn step<E: LinkExtractor>(
        &mut self,
        normalizer: &DomainNormalizer,
        extractor: &E,
    ) -> Result<Step> {
        if !self.is_running() {
            return Ok(Step::Done);
        }

        let address = match self.frontier.pop_front() {
            Some(address) => address,
            None => return Ok(Step::Done),
        };
        self.pops += 1;
        let pop = self.pops;

        let domain = match normalizer.normalize(&address) {
            Ok(domain) => domain,
            Err(e) if self.policy == ResolutionPolicy::Skip => {
                warn!(address = %address, error = %e, "skipping unresolvable address");
                return Ok(Step::Skipped { pop, address });
            }
            Err(e) => return Err(e),
        };

        if self.seen.contains(&domain) {
            return Ok(Step::Duplicate {
                pop,
                address,
                domain,
            });
        }

        self.seen.insert(domain.clone());
        self.domains.push(domain.clone());

        // Expansion happens even when this domain was the last one we needed
        let links = extractor.extract_links(&address).await;
        let links_added = links.len();
        self.frontier.extend(links);
        debug!(address = %address, links_added, frontier = self.frontier.len(), "expanded frontier");

        Ok(Step::FirstSight {
            pop,
            address,
            domain,
            links_added,
        })
    }

    /// Consumes the state, returning domains in first-seen order
    pub fn into_domains(self) -> Vec<String> {
        let mut domains = self.domains;
        domains.truncate(self.max_domains);
        domains
    }
}
