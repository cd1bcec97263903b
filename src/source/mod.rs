//! Source bundle handling
//!
//! A source bundle is a directory (or an extracted archive) holding:
//! - `agents/`: agent documents (`*.agent.md` or `*.md`)
//! - `skills/`: skill directories each holding a `SKILL.md`, optionally nested under
//!   category directories
//! - `shared/` (optional): supporting documents installed alongside skills
//!
//! ## Module Organization
//!
//! - `reader.rs`: enumerates assets from a bundle directory
//! - `flatten.rs`: flattened skill names for single-level destinations

pub mod flatten;
pub mod reader;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

pub use reader::read_bundle;

/// Collection directory holding agent documents
pub const AGENTS_DIR: &str = "agents";

/// Collection directory holding skill directories
pub const SKILLS_DIR: &str = "skills";

/// Optional collection directory holding shared documents
pub const SHARED_DIR: &str = "shared";

/// Primary document of a skill directory
pub const SKILL_FILE: &str = "SKILL.md";

/// Kind of asset in a source bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Skill,
    Agent,
}

impl AssetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Skill => "skill",
            AssetKind::Agent => "agent",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which asset kinds an invocation works with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindSelection {
    Skills,
    Agents,
    #[default]
    All,
}

impl KindSelection {
    pub fn includes(self, kind: AssetKind) -> bool {
        match self {
            KindSelection::All => true,
            KindSelection::Skills => kind == AssetKind::Skill,
            KindSelection::Agents => kind == AssetKind::Agent,
        }
    }
}

/// A non-primary file carried with a skill, or a shared document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Path relative to the skill directory (or the shared collection)
    pub relative_path: PathBuf,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Text content when this is a UTF-8 markdown file
    pub fn markdown_text(&self) -> Option<&str> {
        let is_markdown = self
            .relative_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
        if !is_markdown {
            return None;
        }
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// A single skill or agent read from the source bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub kind: AssetKind,

    /// Skill directory name, or agent file name without its extension suffix
    pub name: String,

    /// Path relative to the bundle root (e.g., "skills/backend/api-design")
    pub origin_path: PathBuf,

    /// Primary document text (`SKILL.md` for skills, the file itself for agents)
    pub raw_content: String,

    /// Other files inside a skill directory; always empty for agents
    pub attachments: Vec<Attachment>,
}

impl Asset {
    /// File name of the asset's origin (e.g., "planner.agent.md")
    pub fn file_name(&self) -> &str {
        self.origin_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.name)
    }

    /// Category directories between the collection root and the asset, outermost first
    pub fn categories(&self) -> Vec<String> {
        let mut segments: Vec<String> = self
            .origin_path
            .components()
            .skip(1)
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        segments.pop();
        segments
    }

    /// Nesting depth below the collection root (0 for top-level assets)
    pub fn depth(&self) -> usize {
        self.categories().len()
    }
}

/// Everything enumerated from one source bundle
#[derive(Debug, Clone, Default)]
pub struct SourceBundle {
    pub root: PathBuf,
    pub agents: Vec<Asset>,
    /// Ordered shallowest first, then by origin path
    pub skills: Vec<Asset>,
    pub shared: Vec<Attachment>,
}
