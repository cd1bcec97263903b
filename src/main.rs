//! skillset - skill and agent templates for AI coding platforms
//!
//! Installs one bundle of skills and agents into the directory layout of each
//! supported platform (GitHub Copilot, Claude Code, Google Antigravity, Cursor),
//! converting formats where needed and preserving local edits.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod hash;
mod installer;
mod platform;
mod progress;
mod source;
mod ui;
mod universal;

use cli::{Cli, Commands};
use platform::PlatformRegistry;

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = PlatformRegistry::default();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.project, args, &registry),
        Commands::List(args) => commands::list::run(args),
        Commands::Platforms => commands::platforms::run(&registry),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
