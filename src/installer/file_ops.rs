//! Basic file operations for installation
//!
//! This module handles low-level file operations:
//! - Directory creation (ensure_parent_dir)
//! - Writing generated content (write_file)

use std::path::Path;

use crate::error::{Result, fs::write_error};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_error(parent, &e))?;
    }
    Ok(())
}

/// Write generated content, creating parent directories as needed
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).map_err(|e| write_error(path, &e))
}
