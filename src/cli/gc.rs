use std::io::{self, Write};

use clap::Args;

use crate::cli::{missing_error, selected_chromosomes, OutputFormat, SourceArgs};
use crate::composition::{CompositionBins, DEFAULT_WINDOW};
use crate::config::TrackConfig;

#[derive(Args)]
pub struct GcArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Chromosome to process (repeatable; default: all)
    #[arg(short = 'c', long = "chromosome")]
    pub chromosomes: Vec<String>,

    /// Bin width in bases
    #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,
}

/// Execute gc subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, or if any
/// requested chromosome is missing (after printing the ones that were found).
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GcArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let counter = TrackConfig::default().with_window(args.window).counter()?;
    let accessor = args.source.open()?;

    let mut out = io::stdout().lock();
    if format == OutputFormat::Tsv {
        writeln!(out, "chrom\tstart\tend\tgc\tat")?;
    }

    // Text and TSV rows are written as each chromosome finishes; JSON needs the
    // whole array.
    let mut collected = Vec::new();
    let mut binned = 0;
    let mut missing = Vec::new();
    for name in selected_chromosomes(&accessor, &args.chromosomes) {
        let Some(bins) = counter.compute(&accessor, &name)? else {
            missing.push(name);
            continue;
        };

        binned += 1;
        match format {
            OutputFormat::Text => write_summary(&mut out, &bins)?,
            OutputFormat::Tsv => write_rows(&mut out, &bins)?,
            OutputFormat::Json => collected.push(bins),
        }
    }

    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&collected)?)?;
    }
    out.flush()?;

    if verbose {
        eprintln!(
            "Binned {binned} chromosome(s) in {} bp windows",
            counter.window()
        );
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing_error(&missing, &accessor))
    }
}

fn write_summary(out: &mut impl Write, bins: &CompositionBins) -> io::Result<()> {
    write!(
        out,
        "{}\t{} bp\t{} bins",
        bins.chromosome,
        bins.length,
        bins.len()
    )?;
    match bins.summary.percentages() {
        Some((gc, at, other)) => writeln!(out, "\tGC {gc:.1}%\tAT {at:.1}%\tN {other:.1}%"),
        None => writeln!(out, "\tempty"),
    }
}

fn write_rows(out: &mut impl Write, bins: &CompositionBins) -> io::Result<()> {
    for (start, end, gc, at) in bins.rows() {
        writeln!(out, "{}\t{start}\t{end}\t{gc}\t{at}", bins.chromosome)?;
    }
    Ok(())
}
