// src/error.rs
// =============================================================================
// Error types shared by the crawler modules.
//
// Only two kinds of failure matter to a crawl:
// - Fatal: a bad address the normalizer cannot resolve, a suffix list that
//   cannot be loaded, or an output file that cannot be written
// - Recoverable: a page that cannot be fetched. Those never show up here,
//   the link extractor turns them into an empty link list
//
// main.rs wraps these in anyhow for the final diagnostic.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    /// The address could not be parsed into a host
    #[error("cannot resolve a domain from '{address}': {reason}")]
    Resolution { address: String, reason: String },

    /// The --suffix_list file could not be read or parsed
    #[error("cannot load public suffix list from {}: {reason}", .path.display())]
    SuffixList { path: PathBuf, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, CrawlError>;
