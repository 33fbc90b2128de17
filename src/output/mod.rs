// src/output/mod.rs
// =============================================================================
// Persists crawl results. Today that is a single-column CSV file.
// =============================================================================

mod csv_file;

pub use csv_file::write_domains;
