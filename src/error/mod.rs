//! Error types and handling for skillset
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`source`]: Source bundle integrity errors
//! - [`platform`]: Platform selection errors
//! - [`config`]: Configuration file errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod platform;
pub mod source;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for skillset operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillsetError {
    // Source bundle errors
    #[error("Source bundle not found: {path}")]
    #[diagnostic(
        code(skillset::source::not_found),
        help("Pass --source <DIR> or set SKILLSET_SOURCE to a directory containing agents/ and skills/")
    )]
    SourceNotFound { path: String },

    #[error("Source bundle at {path} has no '{collection}' directory")]
    #[diagnostic(code(skillset::source::collection_missing))]
    CollectionMissing { path: String, collection: String },

    #[error("Duplicate {kind} '{name}' in source bundle: {first} and {second}")]
    #[diagnostic(
        code(skillset::source::duplicate_asset),
        help("Rename one of the files so every agent has a unique name")
    )]
    DuplicateAsset {
        kind: String,
        name: String,
        first: String,
        second: String,
    },

    #[error("Skill '{name}' at {origin} cannot be given a unique flattened name")]
    #[diagnostic(code(skillset::source::unresolvable_collision))]
    UnresolvableCollision { name: String, origin: String },

    // Platform errors
    #[error("Platform not supported: {platform}")]
    #[diagnostic(
        code(skillset::platform::not_supported),
        help("Supported platforms: all, antigravity, claude, copilot, cursor")
    )]
    PlatformNotSupported { platform: String },

    #[error("Could not determine the home directory for a global install")]
    #[diagnostic(
        code(skillset::platform::no_home),
        help("Set the HOME environment variable")
    )]
    HomeDirUnavailable,

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(skillset::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    ShellNotSupported { shell: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(skillset::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(skillset::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(skillset::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(skillset::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(skillset::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SkillsetError {
    fn from(err: std::io::Error) -> Self {
        SkillsetError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SkillsetError {
    fn from(err: serde_yaml::Error) -> Self {
        SkillsetError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SkillsetError {
    fn from(err: serde_json::Error) -> Self {
        SkillsetError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillsetError>;
