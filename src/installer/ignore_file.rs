//! Local ignore-file maintenance
//!
//! Generated platform directories are listed in the repository's local exclude file
//! (`.git/info/exclude`) when the project is a git checkout, otherwise in `.gitignore`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{
    Result,
    fs::{read_error, write_error},
};

use super::file_ops::ensure_parent_dir;

/// The file that receives ignore entries for `project_root`
pub fn target_path(project_root: &Path) -> PathBuf {
    let git_dir = project_root.join(".git");
    if git_dir.is_dir() {
        git_dir.join("info").join("exclude")
    } else {
        project_root.join(".gitignore")
    }
}

fn normalize(entry: &str) -> &str {
    entry.trim().trim_end_matches('/')
}

/// Append the entries not already present; returns the entries added.
///
/// A missing file counts as empty. Comparison ignores surrounding whitespace and a
/// trailing `/`, so `.claude/skills` and `.claude/skills/` are the same entry.
pub fn ensure_entries(path: &Path, entries: &[String]) -> Result<Vec<String>> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(read_error(path, &e)),
    };

    let mut present: Vec<&str> = existing.lines().map(normalize).collect();
    let mut added = Vec::new();
    for entry in entries {
        let key = normalize(entry);
        if key.is_empty() || present.contains(&key) {
            continue;
        }
        present.push(key);
        added.push(entry.trim().to_string());
    }

    if added.is_empty() {
        return Ok(added);
    }

    let mut content = existing.clone();
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for entry in &added {
        content.push_str(entry);
        content.push('\n');
    }

    ensure_parent_dir(path)?;
    fs::write(path, content).map_err(|e| write_error(path, &e))?;

    tracing::debug!(path = %path.display(), added = added.len(), "updated ignore file");
    Ok(added)
}
