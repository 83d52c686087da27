//! Reference genome detection from chromosome names and lengths.

use tracing::debug;

use crate::catalog::store::{CatalogError, GenomeCatalog, KnownGenome};
use crate::core::types::GenomeId;

/// Identifies which reference genome a set of chromosomes belongs to.
///
/// Called once per opened source with the complete registry. Implementations
/// must not have side effects on the inputs.
pub trait GenomeDetector {
    fn detect(&self, names: &[&str], lengths: &[u64]) -> Option<GenomeId>;
}

/// Never detects anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDetection;

impl GenomeDetector for NoDetection {
    fn detect(&self, _names: &[&str], _lengths: &[u64]) -> Option<GenomeId> {
        None
    }
}

/// Detects genomes by comparing (name, length) pairs against a catalog.
///
/// A genome is a candidate when the query shares at least one contig with it
/// (by primary name or alias) and every shared contig has the catalog length.
/// The candidate sharing the most contigs wins; ties keep catalog order.
#[derive(Debug)]
pub struct CatalogDetector {
    catalog: GenomeCatalog,
}

impl CatalogDetector {
    pub fn new(catalog: GenomeCatalog) -> Self {
        Self { catalog }
    }

    /// Detector backed by the embedded catalog
    pub fn embedded() -> Result<Self, CatalogError> {
        GenomeCatalog::load_embedded().map(Self::new)
    }

    pub fn catalog(&self) -> &GenomeCatalog {
        &self.catalog
    }
}

/// Number of contigs shared with `genome`, or `None` if any shared contig
/// has a different length (or nothing is shared)
fn shared_contigs(genome: &KnownGenome, names: &[&str], lengths: &[u64]) -> Option<usize> {
    let mut shared = 0;
    for (name, &length) in names.iter().zip(lengths) {
        match genome.length_of(name) {
            Some(expected) if expected == length => shared += 1,
            Some(expected) => {
                debug!(
                    genome = %genome.id,
                    contig = %name,
                    expected,
                    found = length,
                    "Length conflict, genome rejected"
                );
                return None;
            }
            None => {}
        }
    }
    (shared > 0).then_some(shared)
}

impl GenomeDetector for CatalogDetector {
    fn detect(&self, names: &[&str], lengths: &[u64]) -> Option<GenomeId> {
        let mut best: Option<(usize, &KnownGenome)> = None;

        for genome in &self.catalog.genomes {
            if let Some(shared) = shared_contigs(genome, names, lengths) {
                if best.map_or(true, |(top, _)| shared > top) {
                    best = Some((shared, genome));
                }
            }
        }

        best.map(|(_, genome)| genome.id.clone())
    }
}
