use clap::Parser;
use std::path::PathBuf;

use super::{DEFAULT_SOURCE, KindArg};
use crate::platform::PlatformSelector;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install every asset for every platform:\n    skillset install\n\n\
                   Install from another bundle directory:\n    skillset install --source ./my-templates\n\n\
                   Install only agents for Cursor:\n    skillset install --platform cursor --kind agents\n\n\
                   Install into the home directory:\n    skillset install --global\n\n\
                   Preview as JSON:\n    skillset install --dry-run --json")]
pub struct InstallArgs {
    /// Source bundle directory containing agents/ and skills/
    #[arg(long, short = 's', env = "SKILLSET_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Platform to install for (copilot, claude, antigravity, cursor or all)
    #[arg(long, short = 't', value_name = "PLATFORM", default_value = "all")]
    pub platform: PlatformSelector,

    /// Asset kinds to install
    #[arg(long, short = 'k', value_enum, default_value_t = KindArg::All)]
    pub kind: KindArg,

    /// Install into the home directory instead of the project
    #[arg(long, short = 'g')]
    pub global: bool,

    /// Skip assets whose name contains PATTERN (case-insensitive, repeatable)
    #[arg(long, short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Show what would be installed without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not add generated directories to the ignore file
    #[arg(long)]
    pub no_ignore: bool,

    /// Print the per-platform summaries as JSON
    #[arg(long)]
    pub json: bool,
}
