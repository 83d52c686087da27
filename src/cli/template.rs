use clap::Args;

use crate::cli::{OutputFormat, SourceArgs};
use crate::template::render_template;

#[derive(Args)]
pub struct TemplateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute template subcommand
///
/// The template is always JSON, since it is meant to be edited and loaded back
/// with `--catalog`.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TemplateArgs, _format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let accessor = args.source.open()?;

    if let Some(genome) = accessor.reference_genome() {
        if verbose {
            eprintln!("Note: reference already matches catalog genome '{genome}'");
        }
    }

    println!("{}", render_template(&accessor)?);
    Ok(())
}
