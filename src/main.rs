use clap::Parser;
use eaglepanel::{init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    run(&cli)
}
