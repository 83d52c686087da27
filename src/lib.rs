//! # ref-tracks
//!
//! Reference tracks for copy-number analysis, computed from an indexed
//! reference FASTA.
//!
//! Read-depth based copy-number callers need two per-reference tracks:
//!
//! - **GC/AT content** in fixed-width bins, to correct the GC bias of
//!   sequencing coverage
//! - **Strict-mask regions**, the runs of `P` in a 1000 Genomes style
//!   accessibility mask FASTA, to exclude poorly mappable sequence
//!
//! `ref-tracks` computes both from any FASTA with a samtools `.fai` index and
//! identifies the reference genome from its chromosome names and lengths.
//!
//! ## Features
//!
//! - **Fixed-shape GC bins**: always `length / window + 1` bins per chromosome,
//!   with the final partial bin kept
//! - **Mask spans**: half-open `[start, end)` runs of any marker character
//! - **Genome detection**: name/length matching against an embedded or custom catalog
//! - **Structured diagnostics**: not-found chromosomes and composition summaries are
//!   reported as events through an injected sink, not printed
//!
//! ## Example
//!
//! ```rust,no_run
//! use ref_tracks::{ChromosomeAccessor, CompositionCounter, MarkerRunScanner};
//! use ref_tracks::catalog::detect::CatalogDetector;
//! use std::path::Path;
//!
//! let detector = CatalogDetector::embedded().unwrap();
//! let accessor = ChromosomeAccessor::open_path(Path::new("hg38.fa"), &detector).unwrap();
//!
//! if let Some(bins) = CompositionCounter::default().compute(&accessor, "chr1").unwrap() {
//!     println!("{} bins, first GC count {}", bins.len(), bins.gc[0]);
//! }
//!
//! let mask = ChromosomeAccessor::open_path(Path::new("mask.fa"), &detector).unwrap();
//! if let Some(spans) = MarkerRunScanner::default().scan(&mask, "chr1").unwrap() {
//!     println!("{} masked regions", spans.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`accessor`]: Chromosome registry ownership and sequence fetch
//! - [`composition`]: Binned GC/AT counting
//! - [`mask`]: Marker-run scanning
//! - [`source`]: Sequence sources (indexed FASTA, in-memory)
//! - [`catalog`]: Known genomes and genome detection
//! - [`diagnostics`]: Structured diagnostic events and sinks
//! - [`cli`]: Command-line interface implementation

pub mod accessor;
pub mod catalog;
pub mod cli;
pub mod composition;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod mask;
pub mod source;
pub mod template;
pub mod utils;

// Re-export commonly used types for convenience
pub use accessor::ChromosomeAccessor;
pub use composition::{CompositionBins, CompositionCounter, DEFAULT_WINDOW};
pub use config::TrackConfig;
pub use crate::core::registry::ChromosomeRegistry;
pub use crate::core::types::*;
pub use mask::{MarkerRunScanner, DEFAULT_MARKER};
pub use source::{SequenceSource, SourceError};
