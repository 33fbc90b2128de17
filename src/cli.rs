// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the struct below IS the CLI definition, and
// clap generates the parsing, --help and --version for us.
//
// Flag names use underscores (--max_domains, --output_file) so existing
// scripts that drive this tool keep working.
// =============================================================================

use crate::crawl::{CrawlSettings, ResolutionPolicy};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "domain-crawler",
    version,
    about = "Crawl outward from a page and collect the registrable domains it links to",
    long_about = "domain-crawler follows hyperlinks breadth-first from a starting URL, reduces every \
                  address it visits to its registrable domain (www.bbc.co.uk -> bbc.co.uk) and stops \
                  once it has seen --max_domains distinct domains. The result is written as CSV."
)]
pub struct Cli {
    /// Starting URL to begin crawling
    pub start_url: String,

    /// Maximum number of unique domains to crawl
    #[arg(
        long = "max_domains",
        default_value_t = 500,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_domains: u64,

    /// Name of the CSV file to save the domains
    #[arg(long = "output_file", default_value = "urls.csv")]
    pub output_file: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long = "timeout_secs", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Load public suffix rules from this file instead of the built-in list
    #[arg(long = "suffix_list", value_name = "PATH")]
    pub suffix_list: Option<PathBuf>,

    /// Skip addresses whose domain can't be resolved instead of aborting the crawl
    #[arg(long = "skip_unresolvable")]
    pub skip_unresolvable: bool,

    /// Show info-level logs (RUST_LOG overrides this)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn crawl_settings(&self) -> CrawlSettings {
        CrawlSettings {
            max_domains: self.max_domains as usize,
            resolution_policy: if self.skip_unresolvable {
                ResolutionPolicy::Skip
            } else {
                ResolutionPolicy::Abort
            },
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "domain-crawler",
            "https://www.example.com",
            "--max_domains",
            "300",
            "--output_file",
            "test_urls.csv",
        ])
        .unwrap();

        assert_eq!(cli.start_url, "https://www.example.com");
        assert_eq!(cli.max_domains, 300);
        assert_eq!(cli.output_file, PathBuf::from("test_urls.csv"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["domain-crawler", "https://www.example.com"]).unwrap();

        assert_eq!(cli.max_domains, 500);
        assert_eq!(cli.output_file, PathBuf::from("urls.csv"));
        assert_eq!(cli.timeout(), Duration::from_secs(10));
        assert!(cli.suffix_list.is_none());

        let settings = cli.crawl_settings();
        assert_eq!(settings.max_domains, 500);
        assert_eq!(settings.resolution_policy, ResolutionPolicy::Abort);
    }

    #[test]
    fn test_skip_unresolvable() {
        let cli = Cli::try_parse_from([
            "domain-crawler",
            "https://www.example.com",
            "--skip_unresolvable",
        ])
        .unwrap();

        assert_eq!(cli.crawl_settings().resolution_policy, ResolutionPolicy::Skip);
    }

    #[test]
    fn test_start_url_required() {
        assert!(Cli::try_parse_from(["domain-crawler"]).is_err());
    }

    #[test]
    fn test_zero_max_domains_rejected() {
        let result = Cli::try_parse_from([
            "domain-crawler",
            "https://www.example.com",
            "--max_domains",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
