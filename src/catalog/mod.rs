//! Known reference genomes and genome detection.
//!
//! The catalog lists reference genomes with their contig names, aliases and
//! lengths. An embedded catalog is compiled into the binary (validated by
//! `build.rs`), but custom catalogs can also be loaded from JSON files, for
//! example one produced by `ref-tracks template` and filled in by hand.
//!
//! ## Embedded Catalog
//!
//! - **hg19** (UCSC naming) and **GRCh37** (NCBI naming)
//! - **hg38** (UCSC naming, with NCBI aliases)
//!
//! ## Example
//!
//! ```rust,no_run
//! use ref_tracks::catalog::detect::{CatalogDetector, GenomeDetector};
//!
//! let detector = CatalogDetector::embedded().unwrap();
//! let genome = detector.detect(&["chr1"], &[248_956_422]);
//! assert_eq!(genome.map(|g| g.to_string()), Some("hg38".to_string()));
//! ```

pub mod detect;
pub mod store;
