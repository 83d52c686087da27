//! Core data types shared by the accessor and the track computations.
//!
//! - [`Contig`](contig::Contig): a named sequence with its length and optional aliases
//! - [`ChromosomeRegistry`](registry::ChromosomeRegistry): the immutable name → length
//!   table built when a source is opened
//! - [`GenomeId`](types::GenomeId), [`Span`](types::Span), [`NamingConvention`](types::NamingConvention)
//!
//! ## Contig Naming
//!
//! Different reference sources use different naming conventions:
//!
//! | Source | Chromosome 1 | Mitochondrial |
//! |--------|--------------|---------------|
//! | UCSC   | chr1         | chrM          |
//! | NCBI   | 1            | MT            |
//! | Ensembl| 1            | MT            |
//!
//! Lookups use **exact names**. Name equivalence between conventions exists only
//! through explicit aliases in the genome catalog.

pub mod contig;
pub mod registry;
pub mod types;
