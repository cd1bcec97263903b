//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::source::KindSelection;

pub mod completions;
pub mod install;
pub mod list;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;

/// Default source bundle directory, relative to the working directory
pub const DEFAULT_SOURCE: &str = "templates";

/// skillset - skill and agent templates for AI coding platforms
///
/// Install one bundle of skills and agents into the directory layout of every
/// supported AI coding platform.
#[derive(Parser, Debug)]
#[command(
    name = "skillset",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install skill and agent templates for multiple AI coding platforms",
    long_about = "skillset installs a bundle of skills and agents into the layout each AI coding \
                  platform expects (GitHub Copilot, Claude Code, Google Antigravity, Cursor), \
                  converting formats where needed and never overwriting local edits.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  skillset install                          \x1b[90m# Install ./templates for all platforms\x1b[0m\n   \
                  skillset install --platform claude        \x1b[90m# Install only for Claude Code\x1b[0m\n   \
                  skillset install --global --kind skills   \x1b[90m# Install skills into the home directory\x1b[0m\n   \
                  skillset install --exclude draft --dry-run \x1b[90m# Preview, skipping drafts\x1b[0m\n   \
                  skillset list                             \x1b[90m# List assets in the bundle\x1b[0m\n   \
                  skillset platforms                        \x1b[90m# Show supported platforms\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "SKILLSET_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install skills and agents into platform directories
    Install(InstallArgs),

    /// List skills and agents in the source bundle
    List(ListArgs),

    /// Show supported platforms and their directories
    Platforms,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Asset kinds accepted by `--kind`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindArg {
    Skills,
    Agents,
    #[default]
    All,
}

impl From<KindArg> for KindSelection {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Skills => KindSelection::Skills,
            KindArg::Agents => KindSelection::Agents,
            KindArg::All => KindSelection::All,
        }
    }
}
