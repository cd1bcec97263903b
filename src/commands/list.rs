//! List command implementation
//!
//! Lists the skills, agents and shared files of a source bundle without
//! installing anything.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::source::read_bundle;
use crate::ui::display;

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let bundle = read_bundle(&args.source, args.kind.into())?;
    display::print_bundle(&bundle);
    Ok(())
}
