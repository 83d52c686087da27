use clap::Parser;
use tracing_subscriber::EnvFilter;

use ref_tracks::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("ref_tracks=debug,info")
    } else {
        EnvFilter::new("ref_tracks=warn")
    };

    // Tracks go to stdout, so diagnostics must not
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Contigs(args) => {
            cli::contigs::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Gc(args) => {
            cli::gc::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Mask(args) => {
            cli::mask::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Template(args) => {
            cli::template::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
