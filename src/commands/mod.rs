//! Command implementations for skillset CLI

pub mod completions;
pub mod install;
pub mod list;
pub mod platforms;
pub mod version;

use std::path::PathBuf;

use crate::error::{Result, SkillsetError};

/// Project root from the CLI argument, or the current directory
pub fn resolve_project(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| SkillsetError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}
