//! Platform registry for managing platform definitions
//!
//! This module provides:
//! - Platform lookup by id or selector
//! - Default platform definitions

use super::transform::{rewrite_skill_paths, to_rule, to_workflow};
use super::{InstallScope, PlatformId, PlatformSelector, PlatformTarget};

/// Registry of all supported platforms
///
/// Built once at startup and passed by reference; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PlatformRegistry {
    platforms: Vec<PlatformTarget>,
}

impl PlatformRegistry {
    /// Create a new registry with the given platforms
    pub fn new(platforms: Vec<PlatformTarget>) -> Self {
        Self { platforms }
    }

    /// Get a platform by its id
    pub fn get_platform(&self, id: PlatformId) -> Option<&PlatformTarget> {
        self.platforms.iter().find(|p| p.id == id)
    }

    /// Get all platforms in the registry
    pub fn get_all_platforms(&self) -> &[PlatformTarget] {
        &self.platforms
    }

    /// Resolve a selector to the platforms it names, in registry order
    pub fn get_target_platforms(&self, selector: PlatformSelector) -> Vec<&PlatformTarget> {
        match selector {
            PlatformSelector::All => self.platforms.iter().collect(),
            PlatformSelector::Only(id) => self.get_platform(id).into_iter().collect(),
        }
    }

    /// Every way a document may refer to some platform's skills directory
    ///
    /// Covers both the project form (".claude/skills/") and the global form
    /// ("~/.claude/skills/") of each platform that has skills.
    pub fn skill_path_aliases(&self) -> Vec<String> {
        let mut aliases: Vec<String> = self
            .platforms
            .iter()
            .flat_map(|p| {
                [InstallScope::Project, InstallScope::Global]
                    .into_iter()
                    .filter_map(|scope| p.skills_reference(scope))
            })
            .collect();
        aliases.sort();
        aliases.dedup();
        aliases
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::new(default_platforms())
    }
}

/// Get default platform definitions
///
/// Skills in the source bundle use the Copilot layout (`.github/skills/`). Every
/// platform with skills still rewrites their paths, since a global install moves them.
pub fn default_platforms() -> Vec<PlatformTarget> {
    vec![
        // GitHub Copilot
        PlatformTarget::new(PlatformId::Copilot, "GitHub Copilot", ".github", ".copilot")
            .with_agents("agents", ".agent.md")
            .with_skills("skills")
            .with_shared("shared")
            .with_skill_transform(rewrite_skill_paths),
        // Claude Code
        PlatformTarget::new(PlatformId::Claude, "Claude Code", ".claude", ".claude")
            .with_agents("agents", ".md")
            .with_skills("skills")
            .with_shared("shared")
            .with_skill_transform(rewrite_skill_paths),
        // Google Antigravity: agents become workflows
        PlatformTarget::new(
            PlatformId::Antigravity,
            "Google Antigravity",
            ".agent",
            ".gemini/antigravity",
        )
        .with_agents("workflows", ".md")
        .with_skills("skills")
        .with_shared("shared")
        .with_agent_transform(to_workflow)
        .with_skill_transform(rewrite_skill_paths),
        // Cursor: agents become rules, no skills
        PlatformTarget::new(PlatformId::Cursor, "Cursor", ".cursor", ".cursor")
            .with_agents("rules", ".mdc")
            .with_agent_transform(to_rule),
    ]
}
