// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Load the public suffix table ONCE and hand it to the normalizer
// 4. Crawl, then write the domains to the CSV file
// 5. Exit with proper code (0 = success, 1 = anything fatal)
//
// A fatal error in the middle of the crawl means nothing is written: there
// is no partial CSV.
// =============================================================================

mod cli;
mod crawl;
mod domain;
mod error;
mod extract;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use domain::{DomainNormalizer, PublicSuffixTable};
use extract::HttpLinkExtractor;
use tracing::info;
use tracing_subscriber::EnvFilter;

// One crawl, one worker: the single-threaded runtime is all we need
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let table = match &cli.suffix_list {
        Some(path) => PublicSuffixTable::from_file(path)?,
        None => PublicSuffixTable::builtin(),
    };
    let normalizer = DomainNormalizer::new(table);
    let extractor = HttpLinkExtractor::new(cli.timeout())?;

    let domains = crawl::crawl(&cli.start_url, &cli.crawl_settings(), &normalizer, &extractor)
        .await
        .with_context(|| format!("crawl from {} failed", cli.start_url))?;

    output::write_domains(&cli.output_file, &domains)?;

    info!(
        domains = domains.len(),
        output = %cli.output_file.display(),
        "saved domains"
    );
    println!(
        "Saved {} domain(s) to {}",
        domains.len(),
        cli.output_file.display()
    );

    Ok(())
}

// RUST_LOG wins if it's set; otherwise --verbose picks between info and warn
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
