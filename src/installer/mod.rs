//! Installation of source bundle assets into platform directories
//!
//! This module handles:
//! - Applying platform transforms (canonical → platform-specific)
//! - Resolving each destination to write, skip or rename
//! - Writing files and collecting per-platform summaries
//! - Listing generated directories in the local ignore file
//!
//! ## Module Organization
//!
//! - `resolver.rs`: exclusion, claims and customization checks
//! - `file_ops.rs`: directory creation and file writes
//! - `ignore_file.rs`: ignore-file target selection and deduplicated appends

pub mod file_ops;
pub mod ignore_file;
pub mod resolver;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, SkillsetError};
use crate::platform::{
    InstallScope, PlatformId, PlatformRegistry, PlatformSelector, PlatformTarget, SkillPathRewrite,
};
use crate::progress::ProgressDisplay;
use crate::source::{
    self, Asset, AssetKind, Attachment, KindSelection, SKILL_FILE, SourceBundle, flatten,
};

pub use resolver::{Action, FileDecision, Reason, Resolver};

/// Everything one install invocation needs
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Source bundle directory
    pub source: PathBuf,
    pub selector: PlatformSelector,
    pub kinds: KindSelection,
    pub scope: InstallScope,
    pub project_root: PathBuf,
    /// Required for global installs
    pub home: Option<PathBuf>,
    /// Asset names containing any of these (ignoring case) are skipped
    pub exclusions: Vec<String>,
    /// Decide everything, write nothing
    pub dry_run: bool,
    /// Append generated directories to the local ignore file
    pub update_ignore_file: bool,
    pub show_progress: bool,
}

impl InstallOptions {
    pub fn new(source: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            selector: PlatformSelector::All,
            kinds: KindSelection::All,
            scope: InstallScope::Project,
            project_root: project_root.into(),
            home: None,
            exclusions: Vec::new(),
            dry_run: false,
            update_ignore_file: true,
            show_progress: false,
        }
    }

    /// Directory the platform directories are created under
    fn base_dir(&self) -> Result<&Path> {
        match self.scope {
            InstallScope::Project => Ok(self.project_root.as_path()),
            InstallScope::Global => self
                .home
                .as_deref()
                .ok_or(SkillsetError::HomeDirUnavailable),
        }
    }
}

/// A file that was meant to be written but could not be
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of installing into one platform
#[derive(Debug, Clone, Serialize)]
pub struct InstallSummary {
    pub platform: PlatformId,
    pub display_name: String,
    pub scope: InstallScope,
    /// Platform directory the assets went into
    pub location: PathBuf,
    /// Skills whose `SKILL.md` was written
    pub skills_count: usize,
    /// Agents whose file was written
    pub agents_count: usize,
    pub shared_count: usize,
    pub decisions: Vec<FileDecision>,
    pub failures: Vec<WriteFailure>,
}

impl InstallSummary {
    fn new(platform: &PlatformTarget, scope: InstallScope, location: PathBuf) -> Self {
        Self {
            platform: platform.id,
            display_name: platform.display_name.clone(),
            scope,
            location,
            skills_count: 0,
            agents_count: 0,
            shared_count: 0,
            decisions: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn count(&self, action: Action) -> usize {
        self.decisions.iter().filter(|d| d.action == action).count()
    }

    fn wrote_under(&self, dir: &Path) -> bool {
        self.decisions
            .iter()
            .any(|d| d.writes() && d.output_path.starts_with(dir))
    }
}

/// Install the bundle at `options.source` into every selected platform.
///
/// Source-integrity errors abort before anything is written. Per-file write failures
/// are recorded in the summaries and the run continues.
pub fn install(registry: &PlatformRegistry, options: &InstallOptions) -> Result<Vec<InstallSummary>> {
    let bundle = source::read_bundle(&options.source, options.kinds)?;
    let base = options.base_dir()?;
    let platforms = registry.get_target_platforms(options.selector);
    let aliases = registry.skill_path_aliases();

    let work: usize = platforms
        .iter()
        .map(|p| work_items(p, &bundle, options.kinds))
        .sum();
    let progress = ProgressDisplay::new(work as u64, options.show_progress);

    let mut resolver = Resolver::new(options.exclusions.clone());
    let mut summaries = Vec::with_capacity(platforms.len());

    for platform in platforms {
        progress.set_platform(&platform.display_name);

        let root = platform.root_in(options.scope, base);
        let mut run = PlatformRun {
            platform,
            summary: InstallSummary::new(platform, options.scope, root.clone()),
            root,
            rewrite: platform
                .skills_reference(options.scope)
                .map(|target| SkillPathRewrite::new(aliases.iter().cloned(), target)),
            dry_run: options.dry_run,
            resolver: &mut resolver,
            progress: &progress,
        };

        if options.kinds.includes(AssetKind::Skill) {
            run.install_skills(&bundle.skills)?;
            run.install_shared(&bundle.shared)?;
        }
        if options.kinds.includes(AssetKind::Agent) {
            run.install_agents(&bundle.agents)?;
        }

        let summary = run.summary;
        tracing::info!(
            platform = %summary.platform,
            skills = summary.skills_count,
            agents = summary.agents_count,
            shared = summary.shared_count,
            skipped = summary.count(Action::Skip),
            failed = summary.failures.len(),
            location = %summary.location.display(),
            "installed"
        );
        summaries.push(summary);
    }

    progress.finish();

    if options.scope == InstallScope::Project && !options.dry_run && options.update_ignore_file {
        update_ignore_file(&options.project_root, registry, &summaries)?;
    }

    Ok(summaries)
}

fn work_items(platform: &PlatformTarget, bundle: &SourceBundle, kinds: KindSelection) -> usize {
    let mut items = 0;
    if kinds.includes(AssetKind::Skill) && platform.skills_subdir.is_some() {
        items += bundle.skills.len();
    }
    if kinds.includes(AssetKind::Agent) {
        items += bundle.agents.len();
    }
    items
}

/// Ignore entries for every platform subdirectory something was written into
fn ignore_entries(registry: &PlatformRegistry, summaries: &[InstallSummary]) -> Vec<String> {
    let mut entries = Vec::new();
    for summary in summaries {
        let Some(platform) = registry.get_platform(summary.platform) else {
            continue;
        };
        let subdirs = [
            Some(platform.agents_subdir.as_str()),
            platform.skills_subdir.as_deref(),
            platform.shared_subdir.as_deref(),
        ];
        for subdir in subdirs.into_iter().flatten() {
            if summary.wrote_under(&summary.location.join(subdir)) {
                entries.push(format!("{}/{}/", platform.project_dir, subdir));
            }
        }
    }
    entries
}

fn update_ignore_file(
    project_root: &Path,
    registry: &PlatformRegistry,
    summaries: &[InstallSummary],
) -> Result<()> {
    let entries = ignore_entries(registry, summaries);
    if entries.is_empty() {
        return Ok(());
    }

    let path = ignore_file::target_path(project_root);
    let added = ignore_file::ensure_entries(&path, &entries)?;
    if !added.is_empty() {
        tracing::info!(path = %path.display(), entries = ?added, "added ignore entries");
    }
    Ok(())
}

/// Installation into a single platform
struct PlatformRun<'a> {
    platform: &'a PlatformTarget,
    root: PathBuf,
    rewrite: Option<SkillPathRewrite>,
    dry_run: bool,
    resolver: &'a mut Resolver,
    progress: &'a ProgressDisplay,
    summary: InstallSummary,
}

impl PlatformRun<'_> {
    fn install_skills(&mut self, skills: &[Asset]) -> Result<()> {
        let Some(subdir) = self.platform.skills_subdir.as_deref() else {
            return Ok(());
        };
        let skills_dir = self.root.join(subdir);

        for skill in skills {
            self.progress.inc(&skill.name);

            if self.resolver.is_excluded(&skill.name) {
                self.exclude(skill, skills_dir.join(&skill.name));
                continue;
            }

            let candidates: Vec<PathBuf> = flatten::candidate_names(skill)
                .into_iter()
                .map(|name| skills_dir.join(name))
                .collect();
            let claim = self.resolver.claim(&skill.origin_path, &candidates)?;

            let primary = self.transform_skill(&skill.raw_content);
            if self.place(&claim.path.join(SKILL_FILE), primary.as_bytes(), claim.renamed) {
                self.summary.skills_count += 1;
            }

            for attachment in &skill.attachments {
                let bytes = self.transform_attachment(attachment);
                self.place(
                    &claim.path.join(&attachment.relative_path),
                    &bytes,
                    claim.renamed,
                );
            }
        }
        Ok(())
    }

    fn install_shared(&mut self, shared: &[Attachment]) -> Result<()> {
        let Some(subdir) = self.platform.shared_subdir.as_deref() else {
            return Ok(());
        };
        let shared_dir = self.root.join(subdir);

        for file in shared {
            let origin = Path::new(source::SHARED_DIR).join(&file.relative_path);
            let claim = self
                .resolver
                .claim(&origin, &[shared_dir.join(&file.relative_path)])?;

            let bytes = self.transform_attachment(file);
            if self.place(&claim.path, &bytes, claim.renamed) {
                self.summary.shared_count += 1;
            }
        }
        Ok(())
    }

    fn install_agents(&mut self, agents: &[Asset]) -> Result<()> {
        let agents_dir = self.root.join(&self.platform.agents_subdir);

        for agent in agents {
            self.progress.inc(&agent.name);

            let destination = agents_dir.join(self.platform.agent_file_name(&agent.name));
            if self.resolver.is_excluded(&agent.name) {
                self.exclude(agent, destination);
                continue;
            }

            let claim = self.resolver.claim(&agent.origin_path, &[destination])?;
            let content = match self.platform.transform_agent {
                Some(transform) => transform(&agent.raw_content, agent.file_name()),
                None => agent.raw_content.clone(),
            };

            if self.place(&claim.path, content.as_bytes(), claim.renamed) {
                self.summary.agents_count += 1;
            }
        }
        Ok(())
    }

    fn transform_skill(&self, content: &str) -> String {
        match (self.platform.transform_skill, &self.rewrite) {
            (Some(transform), Some(rewrite)) => transform(content, rewrite),
            _ => content.to_string(),
        }
    }

    fn transform_attachment(&self, attachment: &Attachment) -> Vec<u8> {
        match attachment.markdown_text() {
            Some(text) => self.transform_skill(text).into_bytes(),
            None => attachment.bytes.clone(),
        }
    }

    /// Resolve and (unless dry-running) write one file; true when it was written
    fn place(&mut self, path: &Path, bytes: &[u8], renamed: bool) -> bool {
        let decision = self.resolver.decide(path, bytes, renamed);
        let writes = decision.writes();
        let unchanged = decision.reason == Reason::Unchanged;
        self.record(decision);

        if !writes {
            return false;
        }
        if self.dry_run || unchanged {
            return true;
        }

        match file_ops::write_file(path, bytes) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "write failed");
                self.summary.failures.push(WriteFailure {
                    path: path.to_path_buf(),
                    reason: failure_reason(&e),
                });
                false
            }
        }
    }

    fn exclude(&mut self, asset: &Asset, destination: PathBuf) {
        tracing::debug!(kind = %asset.kind, name = %asset.name, "excluded by pattern");
        self.record(Resolver::excluded(destination));
    }

    fn record(&mut self, decision: FileDecision) {
        tracing::debug!(
            platform = %self.platform.id,
            path = %decision.output_path.display(),
            action = %decision.action,
            reason = %decision.reason,
            "file decision"
        );
        self.summary.decisions.push(decision);
    }
}

fn failure_reason(err: &SkillsetError) -> String {
    match err {
        SkillsetError::FileWriteFailed { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}
