use anyhow::Result;
use clap::Parser;
use sentiview::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;
    cli.execute()
}
