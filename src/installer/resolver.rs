//! Write/skip/rename decisions for generated files
//!
//! Checks run in a fixed order for every destination:
//! 1. exclusion patterns against the asset name
//! 2. destination claim (a second origin wanting the same destination is renamed)
//! 3. existence
//! 4. customization, by comparing hashes of the existing file and the fresh output

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::common::string_utils::contains_ignore_case;
use crate::error::{Result, source::unresolvable_collision};
use crate::hash::{hash_bytes, hash_file};

/// What happens to a destination file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Write,
    Skip,
    Rename,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Write => "write",
            Action::Skip => "skip",
            Action::Rename => "rename",
        })
    }
}

/// Why an action was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reason {
    /// Nothing existed at the destination
    New,
    /// Destination already holds exactly the generated content
    Unchanged,
    /// Asset name matched an exclusion pattern
    Excluded,
    /// Destination differs from the generated content
    Customized,
    /// Destination exists but could not be read
    Unverifiable,
    /// Default destination was claimed by another origin
    Flattened,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Reason::New => "new",
            Reason::Unchanged => "unchanged",
            Reason::Excluded => "excluded",
            Reason::Customized => "customized",
            Reason::Unverifiable => "unverifiable",
            Reason::Flattened => "flattened",
        })
    }
}

/// Decision for a single output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDecision {
    pub output_path: PathBuf,
    pub action: Action,
    pub reason: Reason,
}

impl FileDecision {
    pub fn writes(&self) -> bool {
        matches!(self.action, Action::Write | Action::Rename)
    }
}

/// Destination chosen for an asset by [`Resolver::claim`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub path: PathBuf,
    pub renamed: bool,
}

/// Per-run resolver state
#[derive(Debug, Default)]
pub struct Resolver {
    exclusions: Vec<String>,
    /// Destination → origin that claimed it
    claims: HashMap<PathBuf, PathBuf>,
}

impl Resolver {
    pub fn new(exclusions: Vec<String>) -> Self {
        Self {
            exclusions: exclusions.into_iter().filter(|p| !p.is_empty()).collect(),
            claims: HashMap::new(),
        }
    }

    /// True when the asset name contains any exclusion pattern, ignoring case
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclusions
            .iter()
            .any(|pattern| contains_ignore_case(name, pattern))
    }

    /// Decision recorded for an excluded asset
    pub fn excluded(path: PathBuf) -> FileDecision {
        FileDecision {
            output_path: path,
            action: Action::Skip,
            reason: Reason::Excluded,
        }
    }

    /// Claim the first destination in `candidates` not taken by another origin.
    ///
    /// The same origin may claim a destination more than once.
    pub fn claim(&mut self, origin: &Path, candidates: &[PathBuf]) -> Result<Claim> {
        for (index, candidate) in candidates.iter().enumerate() {
            match self.claims.get(candidate) {
                Some(owner) if owner != origin => continue,
                Some(_) => {}
                None => {
                    self.claims.insert(candidate.clone(), origin.to_path_buf());
                }
            }
            return Ok(Claim {
                path: candidate.clone(),
                renamed: index > 0,
            });
        }

        let name = origin
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Err(unresolvable_collision(name, origin.display().to_string()))
    }

    /// Decide whether `generated` may be written to `path`.
    pub fn decide(&self, path: &Path, generated: &[u8], renamed: bool) -> FileDecision {
        let (action, reason) = match inspect(path, generated) {
            Existing::Missing if renamed => (Action::Rename, Reason::Flattened),
            Existing::Missing => (Action::Write, Reason::New),
            Existing::Identical if renamed => (Action::Rename, Reason::Flattened),
            Existing::Identical => (Action::Write, Reason::Unchanged),
            Existing::Different => (Action::Skip, Reason::Customized),
            Existing::Unreadable => (Action::Skip, Reason::Unverifiable),
        };

        if reason == Reason::Unverifiable {
            tracing::warn!(path = %path.display(), "cannot read existing file, leaving it untouched");
        }

        FileDecision {
            output_path: path.to_path_buf(),
            action,
            reason,
        }
    }
}

enum Existing {
    Missing,
    Identical,
    Different,
    Unreadable,
}

fn inspect(path: &Path, generated: &[u8]) -> Existing {
    match path.symlink_metadata() {
        // A file in place of a parent directory means nothing exists here yet;
        // the write itself will fail and be reported.
        Err(e)
            if matches!(
                e.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
            ) =>
        {
            return Existing::Missing;
        }
        Err(_) => return Existing::Unreadable,
        Ok(_) => {}
    }

    match hash_file(path) {
        Ok(existing) if existing == hash_bytes(generated) => Existing::Identical,
        Ok(_) => Existing::Different,
        Err(_) => Existing::Unreadable,
    }
}
