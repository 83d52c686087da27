use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::contig::Contig;
use crate::core::types::GenomeId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// A known reference genome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownGenome {
    /// Unique identifier (e.g. `hg38`)
    pub id: GenomeId,

    /// Human-readable display name
    pub display_name: String,

    /// Assembly name (e.g. `GRCh38`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,

    /// Precomputed GC track for this genome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gc_track: Option<String>,

    /// Precomputed strict-mask track for this genome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_track: Option<String>,

    pub contigs: Vec<Contig>,

    /// Index: name or alias -> length (populated on load)
    #[serde(skip)]
    pub length_by_name: HashMap<String, u64>,
}

impl KnownGenome {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: GenomeId::new(id),
            display_name: display_name.into(),
            assembly: None,
            species: None,
            gc_track: None,
            mask_track: None,
            contigs: Vec::new(),
            length_by_name: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_contigs(mut self, contigs: Vec<Contig>) -> Self {
        self.contigs = contigs;
        self.rebuild_indexes();
        self
    }

    pub fn rebuild_indexes(&mut self) {
        self.length_by_name.clear();
        for contig in &self.contigs {
            for name in contig.names() {
                self.length_by_name.insert(name.to_string(), contig.length);
            }
        }
    }

    /// Every primary name and alias must identify exactly one contig
    fn check_unique_names(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for name in self.contigs.iter().flat_map(Contig::names) {
            if !seen.insert(name) {
                return Err(CatalogError::Invalid(format!(
                    "genome '{}' uses contig name '{name}' more than once",
                    self.id
                )));
            }
        }
        Ok(())
    }

    /// Length of the contig called `name` (by primary name or alias)
    pub fn length_of(&self, name: &str) -> Option<u64> {
        self.length_by_name.get(name).copied()
    }
}

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub genomes: Vec<KnownGenome>,
}

/// Known reference genomes, in catalog order
#[derive(Debug, Default)]
pub struct GenomeCatalog {
    pub genomes: Vec<KnownGenome>,

    /// Index: genome ID -> index in genomes vec
    id_to_index: HashMap<GenomeId, usize>,
}

impl GenomeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/reference_genomes.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        for mut genome in data.genomes {
            if catalog.get(&genome.id).is_some() {
                return Err(CatalogError::Invalid(format!(
                    "duplicate genome id '{}'",
                    genome.id
                )));
            }
            genome.check_unique_names()?;
            genome.rebuild_indexes();
            catalog.add_genome(genome);
        }

        Ok(catalog)
    }

    /// Add a genome to the catalog; a later genome with the same ID replaces
    /// the earlier one in the ID index
    pub fn add_genome(&mut self, genome: KnownGenome) {
        self.id_to_index
            .insert(genome.id.clone(), self.genomes.len());
        self.genomes.push(genome);
    }

    /// Get a genome by ID
    pub fn get(&self, id: &GenomeId) -> Option<&KnownGenome> {
        self.id_to_index.get(id).map(|&idx| &self.genomes[idx])
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            genomes: self.genomes.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of genomes in catalog
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }
}
