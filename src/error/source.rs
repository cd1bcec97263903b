//! Source bundle errors

use super::SkillsetError;

/// Creates a source not found error
pub fn not_found(path: impl Into<String>) -> SkillsetError {
    SkillsetError::SourceNotFound { path: path.into() }
}

/// Creates an error for a selected collection that is absent from the bundle
pub fn collection_missing(path: impl Into<String>, collection: impl Into<String>) -> SkillsetError {
    SkillsetError::CollectionMissing {
        path: path.into(),
        collection: collection.into(),
    }
}

/// Creates a duplicate asset error
pub fn duplicate_asset(
    kind: impl Into<String>,
    name: impl Into<String>,
    first: impl Into<String>,
    second: impl Into<String>,
) -> SkillsetError {
    SkillsetError::DuplicateAsset {
        kind: kind.into(),
        name: name.into(),
        first: first.into(),
        second: second.into(),
    }
}

/// Creates an error for a skill that cannot be flattened to a unique name
pub fn unresolvable_collision(name: impl Into<String>, origin: impl Into<String>) -> SkillsetError {
    SkillsetError::UnresolvableCollision {
        name: name.into(),
        origin: origin.into(),
    }
}
