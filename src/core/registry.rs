//! Immutable chromosome name → length table.

use std::collections::HashMap;

use crate::core::contig::{detect_naming_convention, Contig};
use crate::core::types::NamingConvention;
use crate::source::SourceError;
use crate::utils::validation::check_contig_limit;

/// Chromosome names and lengths in the order the source reported them.
///
/// Built once when a source is opened and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ChromosomeRegistry {
    contigs: Vec<Contig>,
    name_to_index: HashMap<String, usize>,
}

impl ChromosomeRegistry {
    /// Build a registry from ordered `(name, length)` pairs.
    ///
    /// `source_name` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::DuplicateContig` if a name occurs twice, or
    /// `SourceError::TooManyContigs` if the contig limit is exceeded.
    pub fn from_pairs<I, S>(pairs: I, source_name: &str) -> Result<Self, SourceError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut contigs = Vec::new();
        let mut name_to_index = HashMap::new();

        for (name, length) in pairs {
            if check_contig_limit(contigs.len()).is_some() {
                return Err(SourceError::TooManyContigs(contigs.len()));
            }

            let name = name.into();
            if name_to_index.insert(name.clone(), contigs.len()).is_some() {
                return Err(SourceError::DuplicateContig {
                    name,
                    source_name: source_name.to_string(),
                });
            }
            contigs.push(Contig::new(name, length));
        }

        Ok(Self {
            contigs,
            name_to_index,
        })
    }

    /// Recorded length of `name`, if registered
    pub fn length_of(&self, name: &str) -> Option<u64> {
        self.name_to_index
            .get(name)
            .map(|&idx| self.contigs[idx].length)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Contigs in original reporting order
    pub fn contigs(&self) -> &[Contig] {
        &self.contigs
    }

    /// Names in original reporting order
    pub fn names(&self) -> Vec<&str> {
        self.contigs.iter().map(|c| c.name.as_str()).collect()
    }

    /// Lengths, parallel to [`ChromosomeRegistry::names`]
    pub fn lengths(&self) -> Vec<u64> {
        self.contigs.iter().map(|c| c.length).collect()
    }

    pub fn naming_convention(&self) -> NamingConvention {
        detect_naming_convention(&self.contigs)
    }

    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }
}
