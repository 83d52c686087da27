//! Sequence sources: where chromosome names, lengths and bases come from.
//!
//! The accessor only talks to the [`SequenceSource`] trait. Two implementations
//! are provided:
//!
//! - [`IndexedFastaSource`](fasta::IndexedFastaSource): a plain or bgzipped FASTA
//!   file with a samtools-style `.fai` index (and `.gzi` when bgzipped), read
//!   through noodles
//! - [`InMemorySource`](memory::InMemorySource): sequences held in memory, useful
//!   for tests and for embedding
//!
//! ## Example
//!
//! ```rust,no_run
//! use ref_tracks::source::fasta::IndexedFastaSource;
//! use ref_tracks::source::SequenceSource;
//! use std::path::Path;
//!
//! let source = IndexedFastaSource::open(Path::new("hg38.fa")).unwrap();
//! for (name, length) in source.contigs() {
//!     println!("{name}\t{length}");
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::utils::validation::MAX_CONTIGS;

pub mod fasta;
pub mod memory;

/// Random access to whole chromosome sequences by name.
///
/// Implementations must report contigs in a stable order and return, for every
/// reported name, a sequence whose length equals the reported length.
pub trait SequenceSource: Send + Sync {
    /// Identifier used in diagnostics (usually the file path)
    fn name(&self) -> &str;

    /// `(name, length)` pairs in file order
    fn contigs(&self) -> Vec<(String, u64)>;

    /// Full sequence of `name`, in whatever case the source stores it
    fn fetch(&self, name: &str) -> io::Result<Vec<u8>>;
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Problem opening file '{}': {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Index for file '{}' is missing (expected '{}'); run `samtools faidx` first", .path.display(), .index.display())]
    MissingIndex { path: PathBuf, index: PathBuf },

    #[error("Failed to parse index '{}': {message}", .index.display())]
    Index { index: PathBuf, message: String },

    #[error("'{}' is gzip-compressed but not bgzipped; recompress it with `bgzip` and index it with `samtools faidx`", .path.display())]
    Compressed { path: PathBuf },

    #[error("Duplicate contig '{name}' in '{source_name}'")]
    DuplicateContig { name: String, source_name: String },

    #[error("Too many contigs: {0} exceeds maximum allowed ({max})", max = MAX_CONTIGS)]
    TooManyContigs(usize),

    #[error("Failed to read chromosome '{chromosome}' from '{source_name}': {source}")]
    Fetch {
        chromosome: String,
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("Chromosome '{chromosome}' in '{source_name}' has {actual} bases but the index records {expected}")]
    LengthMismatch {
        chromosome: String,
        source_name: String,
        expected: u64,
        actual: u64,
    },
}

impl SourceError {
    /// True for errors raised while opening a source; no accessor exists afterwards
    pub fn is_open_failure(&self) -> bool {
        matches!(
            self,
            Self::Path { .. }
                | Self::MissingIndex { .. }
                | Self::Index { .. }
                | Self::Compressed { .. }
                | Self::DuplicateContig { .. }
                | Self::TooManyContigs(_)
        )
    }
}
