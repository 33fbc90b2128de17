// src/domain/suffix.rs
// =============================================================================
// The public suffix table: which domain endings (com, co.uk, github.io, ...)
// people register names *under*.
//
// Two sources are supported:
// - Builtin: the copy of the Public Suffix List compiled into the `psl` crate
// - File: a list in the standard format, parsed by the `publicsuffix` crate
//
// The table is built once in main.rs and then only borrowed, so looking up a
// suffix never re-reads or re-parses anything.
// =============================================================================

use crate::error::{CrawlError, Result};
use std::fs;
use std::path::Path;

pub enum PublicSuffixTable {
    Builtin,
    File(publicsuffix::List),
}

impl PublicSuffixTable {
    /// The list that ships inside the binary
    pub fn builtin() -> Self {
        PublicSuffixTable::Builtin
    }

    /// Loads rules from a Public Suffix List file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| CrawlError::SuffixList {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_rules(&contents).map_err(|reason| CrawlError::SuffixList {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_rules(rules: &str) -> std::result::Result<Self, String> {
        let list: publicsuffix::List = rules.parse().map_err(|e| format!("{:?}", e))?;
        Ok(PublicSuffixTable::File(list))
    }

    // Returns the longest public suffix of `host`, or None when the
    // table has nothing to say about it
    //
    // Both lists apply the "*" default rule, so an unlisted TLD such as
    // "localhost" still comes back as its own suffix.
    pub fn suffix(&self, host: &str) -> Option<String> {
        if host.is_empty() {
            return None;
        }

        let bytes = match self {
            PublicSuffixTable::Builtin => {
                psl::Psl::suffix(&psl::List, host.as_bytes()).map(|s| s.as_bytes().to_vec())
            }
            PublicSuffixTable::File(list) => {
                publicsuffix::Psl::suffix(list, host.as_bytes()).map(|s| s.as_bytes().to_vec())
            }
        }?;

        String::from_utf8(bytes).ok()
    }
}
