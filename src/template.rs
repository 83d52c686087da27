//! Catalog entry skeleton for a reference that the detector does not know.
//!
//! The rendered JSON is a complete catalog with one placeholder genome listing
//! every contig of the opened source. After filling in the placeholders it can
//! be passed back through `--catalog`.

use crate::accessor::ChromosomeAccessor;
use crate::catalog::store::{CatalogError, GenomeCatalog, KnownGenome};
use crate::core::contig::Contig;

pub const PLACEHOLDER_ID: &str = "NAME";
pub const PLACEHOLDER_DISPLAY_NAME: &str = "FULL NAME";
pub const PLACEHOLDER_SPECIES: &str = "SPECIES NAME";
pub const PLACEHOLDER_GC_TRACK: &str = "/..PATH../GC_FILE";
pub const PLACEHOLDER_MASK_TRACK: &str = "/..PATH../MASK_FILE";

/// Placeholder genome built from the accessor's registry
pub fn reference_template(accessor: &ChromosomeAccessor) -> KnownGenome {
    let contigs = accessor
        .chromosome_names_and_lengths()
        .into_iter()
        .map(|(name, length)| Contig::new(name, length))
        .collect();

    let mut genome =
        KnownGenome::new(PLACEHOLDER_ID, PLACEHOLDER_DISPLAY_NAME).with_contigs(contigs);
    genome.species = Some(PLACEHOLDER_SPECIES.to_string());
    genome.gc_track = Some(PLACEHOLDER_GC_TRACK.to_string());
    genome.mask_track = Some(PLACEHOLDER_MASK_TRACK.to_string());
    genome
}

/// Render the template as catalog JSON
pub fn render_template(accessor: &ChromosomeAccessor) -> Result<String, CatalogError> {
    let mut catalog = GenomeCatalog::new();
    catalog.add_genome(reference_template(accessor));
    catalog.to_json()
}
