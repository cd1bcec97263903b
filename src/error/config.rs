//! Configuration errors

use super::SkillsetError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SkillsetError {
    SkillsetError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SkillsetError {
    SkillsetError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
