use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use crate::accessor::ChromosomeAccessor;
use crate::cli::{OutputFormat, SourceArgs};
use crate::core::contig::Contig;
use crate::core::types::NamingConvention;

#[derive(Args)]
pub struct ContigsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Serialize)]
struct ContigsReport<'a> {
    source: &'a str,
    reference_genome: Option<String>,
    naming_convention: NamingConvention,
    contigs: &'a [Contig],
}

/// Execute contigs subcommand
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ContigsArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let accessor = args.source.open()?;
    let mut out = io::stdout().lock();

    match format {
        OutputFormat::Text => print_text(&mut out, &accessor)?,
        OutputFormat::Json => {
            let report = ContigsReport {
                source: accessor.source_name(),
                reference_genome: accessor.reference_genome().map(ToString::to_string),
                naming_convention: accessor.registry().naming_convention(),
                contigs: accessor.registry().contigs(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Tsv => {
            writeln!(out, "name\tlength")?;
            for (name, length) in accessor.chromosome_names_and_lengths() {
                writeln!(out, "{name}\t{length}")?;
            }
        }
    }

    Ok(())
}

fn print_text(out: &mut impl Write, accessor: &ChromosomeAccessor) -> io::Result<()> {
    let registry = accessor.registry();
    let total: u64 = registry.lengths().iter().sum();

    writeln!(out, "Source: {}", accessor.source_name())?;
    match accessor.reference_genome() {
        Some(genome) => writeln!(out, "Reference genome: {genome}")?,
        None => writeln!(out, "Reference genome: unknown")?,
    }
    writeln!(out, "Naming convention: {}", registry.naming_convention())?;
    writeln!(out, "Contigs: {} ({total} bp)", registry.len())?;

    writeln!(out)?;
    let width = registry
        .contigs()
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0)
        .max(4);
    for (name, length) in accessor.chromosome_names_and_lengths() {
        writeln!(out, "  {name:<width$}  {length:>12}")?;
    }

    Ok(())
}
