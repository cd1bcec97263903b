//! Enumerate assets from a source bundle directory

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::common::string_utils::agent_stem;
use crate::error::fs::read_error;
use crate::error::source::{collection_missing, duplicate_asset, not_found};
use crate::error::{Result, SkillsetError};

use super::{
    AGENTS_DIR, Asset, AssetKind, Attachment, KindSelection, SHARED_DIR, SKILL_FILE, SKILLS_DIR,
    SourceBundle, flatten,
};

/// Read every selected collection of the bundle at `root`.
///
/// Integrity problems (missing bundle, missing selected collection, duplicate agent
/// names, skills that cannot be flattened) fail here, before anything is installed.
pub fn read_bundle(root: &Path, kinds: KindSelection) -> Result<SourceBundle> {
    if !root.is_dir() {
        return Err(not_found(root.display().to_string()));
    }

    let mut bundle = SourceBundle {
        root: root.to_path_buf(),
        ..SourceBundle::default()
    };

    if kinds.includes(AssetKind::Agent) {
        let dir = require_collection(root, AGENTS_DIR)?;
        bundle.agents = read_agents(&dir)?;
    }

    if kinds.includes(AssetKind::Skill) {
        let dir = require_collection(root, SKILLS_DIR)?;
        bundle.skills = read_skills(&dir)?;
        flatten::plan(&bundle.skills)?;

        let shared = root.join(SHARED_DIR);
        if shared.is_dir() {
            bundle.shared = read_files(&shared, |_| true)?;
        }
    }

    tracing::debug!(
        root = %root.display(),
        agents = bundle.agents.len(),
        skills = bundle.skills.len(),
        shared = bundle.shared.len(),
        "read source bundle"
    );

    Ok(bundle)
}

fn require_collection(root: &Path, name: &str) -> Result<PathBuf> {
    let dir = root.join(name);
    if dir.is_dir() {
        Ok(dir)
    } else {
        Err(collection_missing(root.display().to_string(), name))
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| read_error(path, &e))
}

/// Agents are the markdown files directly inside `agents/`.
fn read_agents(dir: &Path) -> Result<Vec<Asset>> {
    let mut agents: Vec<Asset> = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(walk_error)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&file_name)
            || !file_name.ends_with(".md")
            || file_name.eq_ignore_ascii_case("README.md")
        {
            continue;
        }

        let name = agent_stem(&file_name).to_string();
        let origin_path = Path::new(AGENTS_DIR).join(&file_name);

        if let Some(first) = seen.get(&name) {
            return Err(duplicate_asset(
                AssetKind::Agent.as_str(),
                name,
                first.display().to_string(),
                origin_path.display().to_string(),
            ));
        }
        seen.insert(name.clone(), origin_path.clone());

        agents.push(Asset {
            kind: AssetKind::Agent,
            name,
            origin_path,
            raw_content: read_text(entry.path())?,
            attachments: Vec::new(),
        });
    }

    Ok(agents)
}

/// Skills are directories holding a `SKILL.md`; a skill nested inside another
/// skill's directory belongs to the outer skill as an attachment.
fn read_skills(dir: &Path) -> Result<Vec<Asset>> {
    let mut skill_dirs: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(2)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(walk_error)?;
        if entry.file_type().is_file() && entry.file_name() == SKILL_FILE {
            if let Some(parent) = entry.path().parent() {
                skill_dirs.push(parent.to_path_buf());
            }
        }
    }

    let outer: Vec<PathBuf> = skill_dirs
        .iter()
        .filter(|candidate| {
            !skill_dirs
                .iter()
                .any(|other| other != *candidate && candidate.starts_with(other))
        })
        .cloned()
        .collect();

    let mut skills = Vec::with_capacity(outer.len());
    for skill_dir in outer {
        let relative = skill_dir.strip_prefix(dir).unwrap_or(&skill_dir);
        let name = skill_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let attachments = read_files(&skill_dir, |rel| rel != Path::new(SKILL_FILE))?;

        skills.push(Asset {
            kind: AssetKind::Skill,
            name,
            origin_path: Path::new(SKILLS_DIR).join(relative),
            raw_content: read_text(&skill_dir.join(SKILL_FILE))?,
            attachments,
        });
    }

    skills.sort_by(|a, b| {
        a.depth()
            .cmp(&b.depth())
            .then_with(|| a.origin_path.cmp(&b.origin_path))
    });

    Ok(skills)
}

/// Every visible file below `dir` whose relative path passes `keep`, sorted by path
fn read_files(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<Attachment>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(&e.file_name().to_string_lossy()));

    for entry in walker {
        let entry = entry.map_err(walk_error)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        if !keep(relative) {
            continue;
        }

        let bytes = fs::read(entry.path()).map_err(|e| read_error(entry.path(), &e))?;
        files.push(Attachment {
            relative_path: relative.to_path_buf(),
            bytes,
        });
    }

    Ok(files)
}

fn walk_error(err: walkdir::Error) -> SkillsetError {
    let path = err
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    crate::error::fs::read_failed(path, err.to_string())
}
