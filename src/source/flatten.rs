//! Flattened skill names
//!
//! Skills may be nested under category directories in the bundle but are installed
//! into a single-level skills directory. A skill keeps its own directory name unless
//! another skill already took it; then parent categories are prefixed one at a time
//! (`api-design` → `frontend-api-design` → `web-frontend-api-design`).

use std::collections::HashSet;

use crate::error::{Result, source::unresolvable_collision};

use super::Asset;

/// Candidate destination names for a skill, plain name first
pub fn candidate_names(asset: &Asset) -> Vec<String> {
    let categories = asset.categories();
    let mut names = Vec::with_capacity(categories.len() + 1);
    names.push(asset.name.clone());

    let mut prefix: Vec<&str> = Vec::new();
    for category in categories.iter().rev() {
        prefix.insert(0, category);
        names.push(format!("{}-{}", prefix.join("-"), asset.name));
    }
    names
}

/// Assign flattened names to skills in order, first free candidate wins.
///
/// Fails when every candidate of some skill is already taken. The installer claims
/// destinations in the same order, so a plan that succeeds here cannot fail there.
pub fn plan(skills: &[Asset]) -> Result<Vec<String>> {
    let mut taken = HashSet::new();
    let mut assigned = Vec::with_capacity(skills.len());

    for skill in skills {
        let name = candidate_names(skill)
            .into_iter()
            .find(|candidate| !taken.contains(candidate))
            .ok_or_else(|| {
                unresolvable_collision(&skill.name, skill.origin_path.display().to_string())
            })?;
        taken.insert(name.clone());
        assigned.push(name);
    }

    Ok(assigned)
}
