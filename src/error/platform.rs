//! Platform errors

use super::SkillsetError;

/// Creates a platform not supported error
pub fn not_supported(platform: impl Into<String>) -> SkillsetError {
    SkillsetError::PlatformNotSupported {
        platform: platform.into(),
    }
}
