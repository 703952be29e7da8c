use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use ninety::cli::args::{Cli, Commands};
use ninety::cli::commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        Commands::Run(args) => commands::run(args, format)?,
        Commands::Config(args) => commands::config(args.command, format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
