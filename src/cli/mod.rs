//! Command-line interface for ref-tracks.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **contigs**: List chromosome names and lengths and the detected reference genome
//! - **gc**: Binned GC/AT counts per chromosome
//! - **mask**: Strict-mask (`P`) regions per chromosome
//! - **template**: Catalog entry skeleton for an unrecognised reference
//!
//! ## Usage
//!
//! ```text
//! # Which reference is this?
//! ref-tracks contigs hg38.fa
//!
//! # 100 bp GC/AT bins for two chromosomes as TSV
//! ref-tracks gc hg38.fa -c chr1 -c chr2 --format tsv
//!
//! # Strict-mask regions as BED-like TSV
//! ref-tracks mask 20160622.allChr.mask.fasta --format tsv
//!
//! # Start a custom catalog entry
//! ref-tracks template my_reference.fa > my_catalog.json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::accessor::ChromosomeAccessor;
use crate::catalog::detect::{CatalogDetector, NoDetection};
use crate::catalog::store::GenomeCatalog;

pub mod contigs;
pub mod gc;
pub mod mask;
pub mod template;

#[derive(Parser)]
#[command(name = "ref-tracks")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Compute GC/AT bins and strict-mask regions from indexed reference FASTA files")]
#[command(
    long_about = "ref-tracks reads an indexed reference FASTA (or a strict-mask FASTA) and produces the reference tracks used by copy-number callers:\n- GC/AT base counts in fixed-width bins, for GC bias correction\n- Runs of the strict-mask marker, for masking poorly accessible regions\n\nThe reference genome is identified from chromosome names and lengths when possible."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List chromosomes and the detected reference genome
    Contigs(contigs::ContigsArgs),

    /// Count GC and AT bases in fixed-width bins
    Gc(gc::GcArgs),

    /// Report runs of the strict-mask marker
    Mask(mask::MaskArgs),

    /// Print a catalog entry template for the reference
    Template(template::TemplateArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Options shared by every subcommand that opens a FASTA
#[derive(clap::Args)]
pub struct SourceArgs {
    /// Indexed FASTA file, plain or bgzipped (requires <FILE>.fai, plus <FILE>.gzi when bgzipped)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Path to custom genome catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Skip reference genome detection
    #[arg(long, conflicts_with = "catalog")]
    pub no_detect: bool,
}

impl SourceArgs {
    /// Open the input with the requested genome detector
    pub fn open(&self) -> anyhow::Result<ChromosomeAccessor> {
        if self.no_detect {
            return Ok(ChromosomeAccessor::open_path(&self.input, &NoDetection)?);
        }

        let catalog = if let Some(path) = &self.catalog {
            GenomeCatalog::load_from_file(path)?
        } else {
            GenomeCatalog::load_embedded()?
        };

        Ok(ChromosomeAccessor::open_path(
            &self.input,
            &CatalogDetector::new(catalog),
        )?)
    }
}

/// Requested chromosomes, or every registered chromosome when none were given
pub(crate) fn selected_chromosomes(
    accessor: &ChromosomeAccessor,
    requested: &[String],
) -> Vec<String> {
    if requested.is_empty() {
        accessor
            .chromosome_names_and_lengths()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect()
    } else {
        requested.to_vec()
    }
}

/// Error for chromosomes that were requested but are not in the source
pub(crate) fn missing_error(missing: &[String], accessor: &ChromosomeAccessor) -> anyhow::Error {
    anyhow::anyhow!(
        "{} requested chromosome(s) not found in '{}': {}",
        missing.len(),
        accessor.source_name(),
        missing.join(", ")
    )
}
