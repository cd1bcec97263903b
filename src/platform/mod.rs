//! Platform definitions and lookup
//!
//! This module handles:
//! - Platform definitions (PlatformTarget, PlatformId, InstallScope)
//! - Platform registration and lookup (via PlatformRegistry)
//! - Content transforms for agents and skills (via transform module)

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{SkillsetError, platform::not_supported};

pub mod registry;
pub mod transform;

pub use registry::PlatformRegistry;
pub use transform::SkillPathRewrite;

/// Rewrites an agent document; receives the content and the source file name
pub type AgentTransform = fn(&str, &str) -> String;

/// Rewrites a skill document for the installing platform's skills directory
pub type SkillTransform = fn(&str, &SkillPathRewrite) -> String;

/// Identifier of a supported AI coding platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    Copilot,
    Claude,
    Antigravity,
    Cursor,
}

impl PlatformId {
    pub const ALL: [PlatformId; 4] = [
        PlatformId::Copilot,
        PlatformId::Claude,
        PlatformId::Antigravity,
        PlatformId::Cursor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlatformId::Copilot => "copilot",
            PlatformId::Claude => "claude",
            PlatformId::Antigravity => "antigravity",
            PlatformId::Cursor => "cursor",
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformId {
    type Err = SkillsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PlatformId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| not_supported(s))
    }
}

/// Which platforms an install targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformSelector {
    #[default]
    All,
    Only(PlatformId),
}

impl FromStr for PlatformSelector {
    type Err = SkillsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(PlatformSelector::All);
        }
        s.parse().map(PlatformSelector::Only)
    }
}

/// Where platform directories are created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallScope {
    /// Relative to the project root
    #[default]
    Project,
    /// Relative to the user's home directory
    Global,
}

/// A supported AI coding platform and its on-disk conventions
#[derive(Debug, Clone)]
pub struct PlatformTarget {
    pub id: PlatformId,

    /// Display name for the platform
    pub display_name: String,

    /// Platform directory relative to the project root (e.g., ".claude")
    pub project_dir: String,

    /// Platform directory relative to the home directory (e.g., ".gemini/antigravity")
    pub global_dir: String,

    /// Subdirectory receiving agents (e.g., "agents", "workflows", "rules")
    pub agents_subdir: String,

    /// Subdirectory receiving skills; absent for platforms without skills
    pub skills_subdir: Option<String>,

    /// Subdirectory receiving the bundle's shared documents
    pub shared_subdir: Option<String>,

    /// Suffix appended to an agent's name to form its file name
    pub agent_file_extension: String,

    pub transform_agent: Option<AgentTransform>,

    pub transform_skill: Option<SkillTransform>,
}

impl PlatformTarget {
    /// Create a new platform with agents in `agents/` as plain markdown
    pub fn new(
        id: PlatformId,
        display_name: impl Into<String>,
        project_dir: impl Into<String>,
        global_dir: impl Into<String>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            project_dir: project_dir.into(),
            global_dir: global_dir.into(),
            agents_subdir: "agents".to_string(),
            skills_subdir: None,
            shared_subdir: None,
            agent_file_extension: ".md".to_string(),
            transform_agent: None,
            transform_skill: None,
        }
    }

    /// Set the agents subdirectory and file extension
    pub fn with_agents(mut self, subdir: impl Into<String>, extension: impl Into<String>) -> Self {
        self.agents_subdir = subdir.into();
        self.agent_file_extension = extension.into();
        self
    }

    pub fn with_skills(mut self, subdir: impl Into<String>) -> Self {
        self.skills_subdir = Some(subdir.into());
        self
    }

    pub fn with_shared(mut self, subdir: impl Into<String>) -> Self {
        self.shared_subdir = Some(subdir.into());
        self
    }

    pub fn with_agent_transform(mut self, transform: AgentTransform) -> Self {
        self.transform_agent = Some(transform);
        self
    }

    pub fn with_skill_transform(mut self, transform: SkillTransform) -> Self {
        self.transform_skill = Some(transform);
        self
    }

    /// Platform directory for the scope, relative to the scope's base
    pub fn dir_for(&self, scope: InstallScope) -> &str {
        match scope {
            InstallScope::Project => &self.project_dir,
            InstallScope::Global => &self.global_dir,
        }
    }

    /// Absolute platform directory under `base` (project root or home)
    pub fn root_in(&self, scope: InstallScope, base: &Path) -> PathBuf {
        base.join(self.dir_for(scope))
    }

    /// How documents refer to this platform's skills directory in the given scope
    /// (e.g., ".claude/skills/" or "~/.claude/skills/")
    pub fn skills_reference(&self, scope: InstallScope) -> Option<String> {
        let skills = self.skills_subdir.as_deref()?;
        let dir = self.dir_for(scope);
        Some(match scope {
            InstallScope::Project => format!("{dir}/{skills}/"),
            InstallScope::Global => format!("~/{dir}/{skills}/"),
        })
    }

    /// File name for an agent with the given (extension-free) name
    pub fn agent_file_name(&self, name: &str) -> String {
        format!("{name}{}", self.agent_file_extension)
    }
}
