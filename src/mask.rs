//! Strict-mask spans: maximal runs of a marker character.

use crate::accessor::ChromosomeAccessor;
use crate::config::ConfigError;
use crate::core::types::Span;
use crate::diagnostics::Diagnostic;
use crate::source::SourceError;

/// Strict-mask symbol used by 1000 Genomes accessibility masks
pub const DEFAULT_MARKER: u8 = b'P';

/// Finds every maximal run of one marker character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRunScanner {
    marker: u8,
}

impl Default for MarkerRunScanner {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
        }
    }
}

impl MarkerRunScanner {
    /// The marker is upper-cased, since sequences are upper-cased on fetch.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidMarker` unless the marker is a printable ASCII character.
    pub fn new(marker: u8) -> Result<Self, ConfigError> {
        if !marker.is_ascii_graphic() {
            return Err(ConfigError::InvalidMarker(char::from(marker)));
        }
        Ok(Self {
            marker: marker.to_ascii_uppercase(),
        })
    }

    pub fn marker(&self) -> u8 {
        self.marker
    }

    /// Marker runs in chromosome `name`, or `Ok(None)` if it is not registered
    pub fn scan(
        &self,
        accessor: &ChromosomeAccessor,
        name: &str,
    ) -> Result<Option<Vec<Span>>, SourceError> {
        let Some(sequence) = accessor.sequence_for(name)? else {
            return Ok(None);
        };

        let spans = self.scan_sequence(&sequence);

        accessor.emit(&Diagnostic::MaskedRegions {
            chromosome: name.to_string(),
            source: accessor.source_name().to_string(),
            spans: spans.len(),
            masked_bases: spans.iter().map(|s| s.len() as u64).sum(),
        });

        Ok(Some(spans))
    }

    /// Marker runs in `sequence`, left to right
    pub fn scan_sequence(&self, sequence: &[u8]) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut run_start = None;

        for (i, &base) in sequence.iter().enumerate() {
            match (base == self.marker, run_start) {
                (true, None) => run_start = Some(i),
                (false, Some(start)) => {
                    spans.push(Span::new(start, i));
                    run_start = None;
                }
                _ => {}
            }
        }

        if let Some(start) = run_start {
            spans.push(Span::new(start, sequence.len()));
        }

        spans
    }
}
