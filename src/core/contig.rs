use serde::{Deserialize, Serialize};

use crate::core::types::NamingConvention;

/// A single named sequence and its length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contig {
    /// Sequence name as it appears in the FASTA header / index
    pub name: String,

    /// Sequence length in bases
    pub length: u64,

    /// Known alternative names for this contig (e.g. `1` for `chr1`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Contig {
    pub fn new(name: impl Into<String>, length: u64) -> Self {
        Self {
            name: name.into(),
            length,
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// All names this contig answers to, primary name first
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Check if this contig is a primary chromosome (1-22, X, Y)
    /// Matches both UCSC (chr1) and NCBI (1) naming conventions exactly
    pub fn is_primary_chromosome(&self) -> bool {
        let bare = self.name.strip_prefix("chr").unwrap_or(&self.name);
        match bare {
            "X" | "Y" => true,
            _ => bare
                .parse::<u8>()
                .is_ok_and(|n| (1..=22).contains(&n) && !bare.starts_with('0')),
        }
    }
}

/// Detect the naming convention used by a set of contigs
pub fn detect_naming_convention(contigs: &[Contig]) -> NamingConvention {
    let mut has_chr_prefix = false;
    let mut has_no_prefix = false;

    for contig in contigs {
        if contig.is_primary_chromosome() {
            if contig.name.starts_with("chr") {
                has_chr_prefix = true;
            } else {
                has_no_prefix = true;
            }
        }
    }

    match (has_chr_prefix, has_no_prefix) {
        (true, false) => NamingConvention::Ucsc,
        (false, true) => NamingConvention::Ncbi,
        _ => NamingConvention::Mixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_primary_chromosome() {
        assert!(Contig::new("chr1", 100).is_primary_chromosome());
        assert!(Contig::new("1", 100).is_primary_chromosome());
        assert!(Contig::new("chr22", 100).is_primary_chromosome());
        assert!(Contig::new("chrX", 100).is_primary_chromosome());
        assert!(Contig::new("Y", 100).is_primary_chromosome());
        assert!(!Contig::new("chr23", 100).is_primary_chromosome());
        assert!(!Contig::new("chr01", 100).is_primary_chromosome());
        assert!(!Contig::new("chrM", 100).is_primary_chromosome());
        assert!(!Contig::new("chr1_random", 100).is_primary_chromosome());
    }

    #[test]
    fn test_names_includes_aliases() {
        let contig = Contig::new("chr1", 100).with_aliases(["1", "NC_000001.11"]);
        let names: Vec<&str> = contig.names().collect();
        assert_eq!(names, vec!["chr1", "1", "NC_000001.11"]);
    }

    #[test]
    fn test_detect_naming_convention() {
        let ucsc = vec![Contig::new("chr1", 1), Contig::new("chrM", 1)];
        let ncbi = vec![Contig::new("1", 1), Contig::new("MT", 1)];
        let mixed = vec![Contig::new("chr1", 1), Contig::new("2", 1)];

        assert_eq!(detect_naming_convention(&ucsc), NamingConvention::Ucsc);
        assert_eq!(detect_naming_convention(&ncbi), NamingConvention::Ncbi);
        assert_eq!(detect_naming_convention(&mixed), NamingConvention::Mixed);
        assert_eq!(detect_naming_convention(&[]), NamingConvention::Mixed);
    }
}
