//! Structured diagnostic events emitted by the accessor and the track computations.
//!
//! Library code never writes log output directly for recoverable conditions;
//! it emits a [`Diagnostic`] to the [`DiagnosticSink`] held by the
//! [`ChromosomeAccessor`](crate::accessor::ChromosomeAccessor). The default
//! [`TracingSink`] turns every event into a `tracing` event with structured
//! fields; the binary installs a `tracing-subscriber` to render them.

use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::composition::CompositionSummary;
use crate::core::types::GenomeId;

/// A recoverable or informational condition, tagged with where it happened
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Source opened and registry built
    Opened { source: String, contigs: usize },

    /// The genome detector recognised the registry
    GenomeDetected { source: String, genome: GenomeId },

    /// The genome detector did not recognise the registry
    GenomeUnknown { source: String },

    /// A chromosome was requested that the registry does not contain
    ChromosomeNotFound { chromosome: String, source: String },

    /// A chromosome sequence is about to be read
    Reading { chromosome: String, source: String },

    /// Whole-chromosome composition after binning
    Composition {
        chromosome: String,
        source: String,
        summary: CompositionSummary,
    },

    /// Marker runs found in a chromosome
    MaskedRegions {
        chromosome: String,
        source: String,
        spans: usize,
        masked_bases: u64,
    },
}

/// Receiver for [`Diagnostic`] events
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, event: &Diagnostic);
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, event: &Diagnostic) {
        match event {
            Diagnostic::Opened { source, contigs } => {
                info!(source = %source, contigs, "File successfully opened");
            }
            Diagnostic::GenomeDetected { source, genome } => {
                info!(source = %source, genome = %genome, "Detected reference genome: {genome}");
            }
            Diagnostic::GenomeUnknown { source } => {
                debug!(source = %source, "Reference genome not recognised");
            }
            Diagnostic::ChromosomeNotFound { chromosome, source } => {
                warn!(
                    chromosome = %chromosome,
                    source = %source,
                    "Can not find chromosome '{chromosome}' in fasta file '{source}'"
                );
            }
            Diagnostic::Reading { chromosome, source } => {
                debug!(chromosome = %chromosome, source = %source, "Reading chromosome");
            }
            Diagnostic::Composition {
                chromosome,
                source,
                summary,
            } => match summary.percentages() {
                Some((gc, at, other)) => info!(
                    chromosome = %chromosome,
                    source = %source,
                    gc_percent = gc,
                    at_percent = at,
                    n_percent = other,
                    "GC/AT/N content: {gc:.1}% / {at:.1}% / {other:.1}%"
                ),
                None => info!(
                    chromosome = %chromosome,
                    source = %source,
                    "GC/AT/N content: empty sequence"
                ),
            },
            Diagnostic::MaskedRegions {
                chromosome,
                source,
                spans,
                masked_bases,
            } => {
                debug!(
                    chromosome = %chromosome,
                    source = %source,
                    spans,
                    masked_bases,
                    "Masked regions found"
                );
            }
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _event: &Diagnostic) {}
}

/// Keeps every event in memory, in emission order
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, event: &Diagnostic) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
