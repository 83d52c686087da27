use serde::{Deserialize, Serialize};

/// Identifier of a known reference genome (e.g. `hg38`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenomeId(pub String);

impl GenomeId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GenomeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Naming convention used for contigs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    /// UCSC style: chr1, chr2, ..., chrX, chrY, chrM
    Ucsc,
    /// NCBI/Ensembl style: 1, 2, ..., X, Y, MT
    Ncbi,
    /// Mixed or unknown
    Mixed,
}

impl std::fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ucsc => write!(f, "UCSC"),
            Self::Ncbi => write!(f, "NCBI"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

/// Half-open interval `[start, end)` over 0-based sequence coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(end > start, "span [{start}, {end}) is empty");
        Self { start, end }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}
