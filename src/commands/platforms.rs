//! Platforms command implementation

use crate::error::Result;
use crate::platform::PlatformRegistry;
use crate::ui::display;

/// Run platforms command
pub fn run(registry: &PlatformRegistry) -> Result<()> {
    display::print_platforms(registry);
    Ok(())
}
