//! File system errors

use std::path::Path;

use super::SkillsetError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SkillsetError {
    SkillsetError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> SkillsetError {
    SkillsetError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Maps an IO error on `path` to a read failure
pub fn read_error(path: &Path, e: &std::io::Error) -> SkillsetError {
    read_failed(path.display().to_string(), e.to_string())
}

/// Maps an IO error on `path` to a write failure
pub fn write_error(path: &Path, e: &std::io::Error) -> SkillsetError {
    write_failed(path.display().to_string(), e.to_string())
}
