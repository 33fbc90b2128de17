// src/output/csv_file.rs
// =============================================================================
// Writes the domain list as CSV:
//
//   Domain
//   example.com
//   google.com
//   ...
//
// The csv crate takes care of quoting, so a domain containing a comma or a
// quote (or the empty domain from a relative link) still reads back as the
// exact same string. Lines end with the platform's usual terminator.
// =============================================================================

use crate::error::{CrawlError, Result};
use csv::{Terminator, WriterBuilder};
use std::path::Path;

const HEADER: &str = "Domain";

pub fn write_domains(path: &Path, domains: &[String]) -> Result<()> {
    let output_error = |source: csv::Error| CrawlError::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .terminator(platform_terminator())
        .from_path(path)
        .map_err(output_error)?;

    writer.write_record([HEADER]).map_err(output_error)?;
    for domain in domains {
        writer.write_record([domain]).map_err(output_error)?;
    }

    writer
        .flush()
        .map_err(|e| output_error(csv::Error::from(e)))?;
    Ok(())
}

fn platform_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}
