//! Chromosome accessor: owns the registry and mediates every sequence fetch.

use std::path::Path;
use std::sync::Arc;

use crate::catalog::detect::GenomeDetector;
use crate::core::registry::ChromosomeRegistry;
use crate::core::types::GenomeId;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::source::fasta::IndexedFastaSource;
use crate::source::{SequenceSource, SourceError};

/// One chromosome's upper-cased sequence together with its registry entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    pub name: String,
    /// Length recorded in the registry; always equal to `sequence.len()`
    pub length: u64,
    pub sequence: Vec<u8>,
}

/// Registry of chromosome names and lengths plus the source they came from.
///
/// Construction either succeeds completely or returns the open error; there is
/// no partially initialised accessor.
pub struct ChromosomeAccessor {
    source: Box<dyn SequenceSource>,
    registry: ChromosomeRegistry,
    reference_genome: Option<GenomeId>,
    sink: Arc<dyn DiagnosticSink>,
}

impl ChromosomeAccessor {
    /// Build the registry from `source` and run `detector` once over it.
    pub fn open(
        source: Box<dyn SequenceSource>,
        detector: &dyn GenomeDetector,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Result<Self, SourceError> {
        let registry = ChromosomeRegistry::from_pairs(source.contigs(), source.name())?;
        let source_name = source.name().to_string();

        sink.emit(&Diagnostic::Opened {
            source: source_name.clone(),
            contigs: registry.len(),
        });

        let reference_genome = detector.detect(&registry.names(), &registry.lengths());
        match &reference_genome {
            Some(genome) => sink.emit(&Diagnostic::GenomeDetected {
                source: source_name,
                genome: genome.clone(),
            }),
            None => sink.emit(&Diagnostic::GenomeUnknown {
                source: source_name,
            }),
        }

        Ok(Self {
            source,
            registry,
            reference_genome,
            sink,
        })
    }

    /// Open an indexed FASTA file, reporting diagnostics through `tracing`.
    pub fn open_path(path: &Path, detector: &dyn GenomeDetector) -> Result<Self, SourceError> {
        let source = IndexedFastaSource::open(path)?;
        Self::open(Box::new(source), detector, Arc::new(TracingSink))
    }

    /// Fetch `name` with its registry length.
    ///
    /// Returns `Ok(None)` (after emitting `ChromosomeNotFound`) when `name` is
    /// not registered.
    ///
    /// # Errors
    ///
    /// `SourceError::Fetch` if the source fails to read a registered chromosome,
    /// `SourceError::LengthMismatch` if it returns a sequence of the wrong length.
    pub fn fetch(&self, name: &str) -> Result<Option<Chromosome>, SourceError> {
        let Some(length) = self.registry.length_of(name) else {
            self.emit(&Diagnostic::ChromosomeNotFound {
                chromosome: name.to_string(),
                source: self.source_name().to_string(),
            });
            return Ok(None);
        };

        self.emit(&Diagnostic::Reading {
            chromosome: name.to_string(),
            source: self.source_name().to_string(),
        });

        let mut sequence = self
            .source
            .fetch(name)
            .map_err(|e| SourceError::Fetch {
                chromosome: name.to_string(),
                source_name: self.source_name().to_string(),
                source: e,
            })?;
        sequence.make_ascii_uppercase();

        let actual = sequence.len() as u64;
        if actual != length {
            return Err(SourceError::LengthMismatch {
                chromosome: name.to_string(),
                source_name: self.source_name().to_string(),
                expected: length,
                actual,
            });
        }

        Ok(Some(Chromosome {
            name: name.to_string(),
            length,
            sequence,
        }))
    }

    /// Upper-cased sequence of `name`, or `Ok(None)` if it is not registered.
    pub fn sequence_for(&self, name: &str) -> Result<Option<Vec<u8>>, SourceError> {
        Ok(self.fetch(name)?.map(|chromosome| chromosome.sequence))
    }

    /// Registry `(name, length)` pairs in original reporting order
    pub fn chromosome_names_and_lengths(&self) -> Vec<(&str, u64)> {
        self.registry
            .contigs()
            .iter()
            .map(|c| (c.name.as_str(), c.length))
            .collect()
    }

    pub fn registry(&self) -> &ChromosomeRegistry {
        &self.registry
    }

    pub fn length_of(&self, name: &str) -> Option<u64> {
        self.registry.length_of(name)
    }

    /// Genome detected at open time, if any
    pub fn reference_genome(&self) -> Option<&GenomeId> {
        self.reference_genome.as_ref()
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub(crate) fn emit(&self, event: &Diagnostic) {
        self.sink.emit(event);
    }
}

impl std::fmt::Debug for ChromosomeAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromosomeAccessor")
            .field("source", &self.source.name())
            .field("contigs", &self.registry.len())
            .field("reference_genome", &self.reference_genome)
            .finish_non_exhaustive()
    }
}
