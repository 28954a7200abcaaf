use anyhow::Result;
use clap::Parser;
use iconsmith::cli::{Cli, Commands};
use iconsmith::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { package } => commands::generate::run(&cli, *package),
        Commands::Resize { source, bleed } => commands::resize::run(&cli, source, *bleed),
    }
}
