// src/domain/mod.rs
// =============================================================================
// Everything needed to turn an address into a registrable domain.
//
// Submodules:
// - suffix: the public suffix table (compiled-in list or a list file)
// - normalize: host extraction and the "one label left of the suffix" rule
// =============================================================================

mod normalize;
mod suffix;

pub use normalize::DomainNormalizer;
pub use suffix::PublicSuffixTable;
