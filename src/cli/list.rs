use clap::Parser;
use std::path::PathBuf;

use super::{DEFAULT_SOURCE, KindArg};

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List everything in ./templates:\n    skillset list\n\n\
                  List skills of another bundle:\n    skillset list --source ./bundle --kind skills")]
pub struct ListArgs {
    /// Source bundle directory containing agents/ and skills/
    #[arg(long, short = 's', env = "SKILLSET_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Asset kinds to list
    #[arg(long, short = 'k', value_enum, default_value_t = KindArg::All)]
    pub kind: KindArg,
}
