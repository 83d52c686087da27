use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use crate::cli::{missing_error, selected_chromosomes, OutputFormat, SourceArgs};
use crate::config::TrackConfig;
use crate::core::types::Span;

#[derive(Args)]
pub struct MaskArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Chromosome to process (repeatable; default: all)
    #[arg(short = 'c', long = "chromosome")]
    pub chromosomes: Vec<String>,

    /// Marker character to report runs of
    #[arg(short, long, default_value_t = 'P')]
    pub marker: char,
}

#[derive(Serialize)]
struct MaskedChromosome {
    chromosome: String,
    spans: Vec<Span>,
}

/// Execute mask subcommand
///
/// # Errors
///
/// Returns an error if the marker is invalid, the input cannot be opened or
/// read, or if any requested chromosome is missing.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MaskArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let scanner = TrackConfig::default()
        .with_marker_char(args.marker)?
        .scanner()?;
    let accessor = args.source.open()?;

    let mut results = Vec::new();
    let mut missing = Vec::new();
    for name in selected_chromosomes(&accessor, &args.chromosomes) {
        match scanner.scan(&accessor, &name)? {
            Some(spans) => results.push(MaskedChromosome {
                chromosome: name,
                spans,
            }),
            None => missing.push(name),
        }
    }

    if verbose {
        let total: usize = results.iter().map(|r| r.spans.len()).sum();
        eprintln!(
            "Found {total} run(s) of '{}' in {} chromosome(s)",
            char::from(scanner.marker()),
            results.len()
        );
    }

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => print_text(&mut out, &results)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?,
        OutputFormat::Tsv => {
            writeln!(out, "chrom\tstart\tend")?;
            for result in &results {
                for span in &result.spans {
                    writeln!(out, "{}\t{}\t{}", result.chromosome, span.start, span.end)?;
                }
            }
        }
    }
    out.flush()?;

    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing_error(&missing, &accessor))
    }
}

fn print_text(out: &mut impl Write, results: &[MaskedChromosome]) -> io::Result<()> {
    for result in results {
        let masked: usize = result.spans.iter().map(Span::len).sum();
        writeln!(
            out,
            "{}: {} region(s), {masked} masked bases",
            result.chromosome,
            result.spans.len()
        )?;
        for span in &result.spans {
            writeln!(out, "  [{}, {})", span.start, span.end)?;
        }
    }
    Ok(())
}
