//! Binned GC/AT composition.
//!
//! A chromosome is cut into fixed-width windows starting at position 0; each
//! window records how many of its bases are `G`/`C` and how many are `A`/`T`.
//! Anything else (`N`, IUPAC ambiguity codes, mask markers) counts towards
//! neither. The final window may be shorter than the width.
//!
//! The number of bins is always `length / window + 1`. When the length is an
//! exact multiple of the window (including an empty chromosome) this is one
//! more than the number of windows that contain bases, and a zero bin is
//! appended so downstream tracks keep a fixed shape.

use serde::Serialize;

use crate::accessor::ChromosomeAccessor;
use crate::config::ConfigError;
use crate::diagnostics::Diagnostic;
use crate::source::SourceError;
use crate::utils::validation::percent;

/// Default bin width in bases
pub const DEFAULT_WINDOW: usize = 100;

/// Whole-sequence base counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompositionSummary {
    pub total: u64,
    pub gc: u64,
    pub at: u64,
    /// Bases that are neither G/C nor A/T
    pub other: u64,
}

impl CompositionSummary {
    fn from_bins(total: u64, gc: &[u32], at: &[u32]) -> Self {
        let gc: u64 = gc.iter().map(|&n| u64::from(n)).sum();
        let at: u64 = at.iter().map(|&n| u64::from(n)).sum();
        Self {
            total,
            gc,
            at,
            other: total - gc - at,
        }
    }

    /// `(gc%, at%, other%)`, or `None` for an empty sequence
    pub fn percentages(&self) -> Option<(f64, f64, f64)> {
        Some((
            percent(self.gc, self.total)?,
            percent(self.at, self.total)?,
            percent(self.other, self.total)?,
        ))
    }
}

/// GC and AT counts per window for one chromosome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositionBins {
    pub chromosome: String,
    pub length: u64,
    pub window: usize,
    pub gc: Vec<u32>,
    pub at: Vec<u32>,
    pub summary: CompositionSummary,
}

impl CompositionBins {
    pub fn len(&self) -> usize {
        self.gc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gc.is_empty()
    }

    /// `(start, end, gc, at)` per bin; `end` is clipped to the chromosome length
    pub fn rows(&self) -> impl Iterator<Item = (u64, u64, u32, u32)> + '_ {
        let window = self.window as u64;
        self.gc
            .iter()
            .zip(&self.at)
            .enumerate()
            .map(move |(i, (&gc, &at))| {
                let start = (i as u64 * window).min(self.length);
                let end = (start + window).min(self.length);
                (start, end, gc, at)
            })
    }
}

/// Expected number of bins for a chromosome of `length` bases
#[allow(clippy::cast_possible_truncation)]
pub fn expected_bins(length: u64, window: usize) -> usize {
    (length / window as u64) as usize + 1
}

/// Count G/C and A/T in consecutive `window`-sized chunks of `sequence`.
///
/// `sequence` must already be upper-case. Produces one entry per chunk,
/// without the trailing zero bin.
pub fn count_windows(sequence: &[u8], window: usize) -> (Vec<u32>, Vec<u32>) {
    sequence
        .chunks(window)
        .map(|chunk| {
            chunk.iter().fold((0u32, 0u32), |(gc, at), base| match base {
                b'G' | b'C' => (gc + 1, at),
                b'A' | b'T' => (gc, at + 1),
                _ => (gc, at),
            })
        })
        .unzip()
}

/// Computes [`CompositionBins`] with a fixed window width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionCounter {
    window: usize,
}

impl Default for CompositionCounter {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl CompositionCounter {
    /// # Errors
    ///
    /// `ConfigError::ZeroWindow` for a zero width, `ConfigError::WindowTooLarge`
    /// if per-bin counts could overflow `u32`.
    pub fn new(window: usize) -> Result<Self, ConfigError> {
        if window == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if u32::try_from(window).is_err() {
            return Err(ConfigError::WindowTooLarge(window));
        }
        Ok(Self { window })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Bin the chromosome `name`.
    ///
    /// Returns `Ok(None)` without computing anything if `name` is not in the
    /// accessor's registry.
    pub fn compute(
        &self,
        accessor: &ChromosomeAccessor,
        name: &str,
    ) -> Result<Option<CompositionBins>, SourceError> {
        let Some(chromosome) = accessor.fetch(name)? else {
            return Ok(None);
        };

        let bins = self.bin_sequence(
            accessor.source_name(),
            &chromosome.name,
            &chromosome.sequence,
            chromosome.length,
        )?;

        accessor.emit(&Diagnostic::Composition {
            chromosome: chromosome.name,
            source: accessor.source_name().to_string(),
            summary: bins.summary,
        });

        Ok(Some(bins))
    }

    /// Bin an upper-cased `sequence` whose registry length is `length`.
    ///
    /// # Errors
    ///
    /// `SourceError::LengthMismatch` if the sequence does not have exactly
    /// `length` bases; a short sequence is never padded beyond the final bin.
    pub fn bin_sequence(
        &self,
        source_name: &str,
        chromosome: &str,
        sequence: &[u8],
        length: u64,
    ) -> Result<CompositionBins, SourceError> {
        if sequence.len() as u64 != length {
            return Err(SourceError::LengthMismatch {
                chromosome: chromosome.to_string(),
                source_name: source_name.to_string(),
                expected: length,
                actual: sequence.len() as u64,
            });
        }

        let (mut gc, mut at) = count_windows(sequence, self.window);
        // exact multiple of the window (or empty): one trailing zero bin
        if gc.len() < expected_bins(length, self.window) {
            gc.push(0);
            at.push(0);
        }

        let summary = CompositionSummary::from_bins(sequence.len() as u64, &gc, &at);

        Ok(CompositionBins {
            chromosome: chromosome.to_string(),
            length,
            window: self.window,
            gc,
            at,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::detect::NoDetection;
    use crate::diagnostics::RecordingSink;
    use crate::source::memory::InMemorySource;
    use std::sync::Arc;

    fn accessor_with(source: InMemorySource) -> (ChromosomeAccessor, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let accessor = ChromosomeAccessor::open(Box::new(source), &NoDetection, sink.clone()).unwrap();
        (accessor, sink)
    }

    fn repeat(unit: &str, length: usize) -> String {
        unit.chars().cycle().take(length).collect()
    }

    #[test]
    fn test_count_windows() {
        let (gc, at) = count_windows(b"GCGCAT", 4);
        assert_eq!(gc, vec![4, 0]);
        assert_eq!(at, vec![0, 2]);
    }

    #[test]
    fn test_count_windows_ignores_other_bases() {
        let (gc, at) = count_windows(b"NNPPRYGA", 100);
        assert_eq!(gc, vec![1]);
        assert_eq!(at, vec![1]);
    }

    #[test]
    fn test_expected_bins() {
        assert_eq!(expected_bins(0, 100), 1);
        assert_eq!(expected_bins(99, 100), 1);
        assert_eq!(expected_bins(100, 100), 2);
        assert_eq!(expected_bins(250, 100), 3);
    }

    #[test]
    fn test_partial_last_bin() {
        // 250 bases: bins [0,100), [100,200), [200,250)
        let seq = format!("{}{}{}", "G".repeat(100), "A".repeat(100), "C".repeat(50));
        let (accessor, _) = accessor_with(InMemorySource::new("m").with_sequence("chr1", seq));

        let bins = CompositionCounter::default()
            .compute(&accessor, "chr1")
            .unwrap()
            .unwrap();

        assert_eq!(bins.len(), 3);
        assert_eq!(bins.gc, vec![100, 0, 50]);
        assert_eq!(bins.at, vec![0, 100, 0]);

        let rows: Vec<_> = bins.rows().collect();
        assert_eq!(rows[2], (200, 250, 50, 0));
    }

    #[test]
    fn test_exact_multiple_gets_zero_bin() {
        let seq = repeat("ACGT", 200);
        let (accessor, _) = accessor_with(InMemorySource::new("m").with_sequence("chr1", seq));

        let bins = CompositionCounter::default()
            .compute(&accessor, "chr1")
            .unwrap()
            .unwrap();

        assert_eq!(bins.len(), 3);
        assert_eq!(bins.at.len(), 3);
        assert_eq!((bins.gc[2], bins.at[2]), (0, 0));
        assert_eq!((bins.gc[0], bins.at[0]), (50, 50));
        assert_eq!(bins.rows().last(), Some((200, 200, 0, 0)));
    }

    #[test]
    fn test_empty_chromosome() {
        let (accessor, sink) = accessor_with(InMemorySource::new("m").with_sequence("chr0", ""));

        let bins = CompositionCounter::default()
            .compute(&accessor, "chr0")
            .unwrap()
            .unwrap();

        assert_eq!(bins.gc, vec![0]);
        assert_eq!(bins.at, vec![0]);
        assert!(bins.summary.percentages().is_none());
        assert!(sink
            .events()
            .iter()
            .any(|e| matches!(e, Diagnostic::Composition { summary, .. } if summary.total == 0)));
    }

    #[test]
    fn test_lowercase_is_counted() {
        let (accessor, _) =
            accessor_with(InMemorySource::new("m").with_sequence("chr1", "acgtn"));

        let bins = CompositionCounter::default()
            .compute(&accessor, "chr1")
            .unwrap()
            .unwrap();

        assert_eq!(bins.gc, vec![2]);
        assert_eq!(bins.at, vec![2]);
        assert_eq!(bins.summary.other, 1);
    }

    #[test]
    fn test_bins_never_exceed_window() {
        let seq = repeat("ACGTNNGGCCAATTP", 1234);
        let (accessor, _) = accessor_with(InMemorySource::new("m").with_sequence("chr1", seq));

        for window in [1, 7, 100, 1234, 5000] {
            let counter = CompositionCounter::new(window).unwrap();
            let bins = counter.compute(&accessor, "chr1").unwrap().unwrap();

            assert_eq!(bins.len(), expected_bins(1234, window));
            assert_eq!(bins.gc.len(), bins.at.len());
            for (start, end, gc, at) in bins.rows() {
                assert!(u64::from(gc + at) <= end - start);
                assert!((gc + at) as usize <= window);
            }
        }
    }

    #[test]
    fn test_summary_percentages() {
        let (accessor, sink) =
            accessor_with(InMemorySource::new("m").with_sequence("chr1", "GGCANNNNNT"));

        let bins = CompositionCounter::default()
            .compute(&accessor, "chr1")
            .unwrap()
            .unwrap();

        let (gc, at, other) = bins.summary.percentages().unwrap();
        assert!((gc - 30.0).abs() < 1e-9);
        assert!((at - 20.0).abs() < 1e-9);
        assert!((other - 50.0).abs() < 1e-9);

        let emitted = sink.events().into_iter().find_map(|e| match e {
            Diagnostic::Composition { summary, .. } => Some(summary),
            _ => None,
        });
        assert_eq!(emitted, Some(bins.summary));
    }

    #[test]
    fn test_missing_chromosome() {
        let (accessor, sink) = accessor_with(InMemorySource::new("m").with_sequence("chr1", "ACGT"));

        let result = CompositionCounter::default()
            .compute(&accessor, "fake_chr999")
            .unwrap();

        assert!(result.is_none());
        let events = sink.events();
        assert!(events
            .iter()
            .any(|e| matches!(e, Diagnostic::ChromosomeNotFound { .. })));
        assert!(!events
            .iter()
            .any(|e| matches!(e, Diagnostic::Composition { .. })));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let (accessor, _) =
            accessor_with(InMemorySource::new("m").with_sequence("chr1", repeat("GATTACA", 777)));
        let counter = CompositionCounter::default();

        let first = counter.compute(&accessor, "chr1").unwrap();
        let second = counter.compute(&accessor, "chr1").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_sequence_is_contract_violation() {
        let counter = CompositionCounter::default();

        let err = counter.bin_sequence("m", "chr1", b"ACGT", 1000).unwrap_err();
        assert!(matches!(
            err,
            SourceError::LengthMismatch {
                expected: 1000,
                actual: 4,
                ..
            }
        ));

        // same bin count either way, still rejected
        let err = counter.bin_sequence("m", "chr1", &[b'A'; 120], 150).unwrap_err();
        assert!(matches!(
            err,
            SourceError::LengthMismatch {
                expected: 150,
                actual: 120,
                ..
            }
        ));

        let err = counter.bin_sequence("m", "chr1", &[b'A'; 200], 150).unwrap_err();
        assert!(matches!(err, SourceError::LengthMismatch { actual: 200, .. }));
    }

    #[test]
    fn test_bin_sequence_shapes() {
        let counter = CompositionCounter::default();
        for (length, gc) in [
            (0_usize, vec![0]),
            (1, vec![1]),
            (99, vec![99]),
            (100, vec![100, 0]),
            (101, vec![100, 1]),
            (200, vec![100, 100, 0]),
            (250, vec![100, 100, 50]),
        ] {
            let bins = counter
                .bin_sequence("m", "chr1", &vec![b'G'; length], length as u64)
                .unwrap();
            assert_eq!(bins.gc, gc, "length {length}");
            assert_eq!(bins.at.len(), gc.len());
        }
    }

    #[test]
    fn test_invalid_window() {
        assert!(matches!(
            CompositionCounter::new(0),
            Err(ConfigError::ZeroWindow)
        ));
        assert_eq!(CompositionCounter::new(50).unwrap().window(), 50);
    }
}
