//! Satchel - package resource bundler
//!
//! Bundles sub-package code and declared resource files into reproducible
//! artifacts, installs them, and locates installed resources.

use clap::Parser;
use console::Style;
use miette::Diagnostic;

use satchel::cli::{Cli, Commands};
use satchel::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(cli.root, args),
        Commands::Check(args) => commands::check::run(cli.root, args),
        Commands::List(args) => commands::list::run(args),
        Commands::Install(args) => commands::install::run(args),
        Commands::Resources(args) => commands::resources::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("{} {}", Style::new().cyan().for_stderr().apply_to("help:"), help);
        }
        std::process::exit(1);
    }
}
