use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::platform::{PlatformId, PlatformRegistry, PlatformSelector};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

struct Fixture {
    source: TempDir,
    project: TempDir,
    home: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let source = TempDir::new().unwrap();
        let root = source.path();
        write(
            root,
            "agents/code-reviewer.agent.md",
            "---\nname: code-reviewer\ndescription: Reviews pull requests\ntools: [read]\n---\n\nCheck the diff.\n",
        );
        write(root, "agents/planner.md", "Plan the work.\n");
        write(
            root,
            "skills/testing/SKILL.md",
            "---\nname: testing\n---\nSee .github/skills/testing/scripts/run.sh\n",
        );
        write(root, "skills/testing/scripts/run.sh", "#!/bin/sh\necho ok\n");
        write(root, "skills/backend/api-design/SKILL.md", "# Backend API\n");
        write(root, "skills/frontend/api-design/SKILL.md", "# Frontend API\n");
        write(root, "shared/style.md", "Use .github/skills/ paths.\n");

        Self {
            source,
            project: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    fn options(&self) -> InstallOptions {
        let mut options = InstallOptions::new(self.source.path(), self.project.path());
        options.home = Some(self.home.path().to_path_buf());
        options
    }

    fn project(&self) -> &Path {
        self.project.path()
    }
}

fn install_with(options: &InstallOptions) -> Vec<InstallSummary> {
    install(&PlatformRegistry::default(), options).unwrap()
}

fn summary_for(summaries: &[InstallSummary], id: PlatformId) -> &InstallSummary {
    summaries.iter().find(|s| s.platform == id).unwrap()
}

/// Every file below `dir`, as (relative path, bytes), sorted
fn snapshot(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<_> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            (
                e.path().strip_prefix(dir).unwrap().display().to_string(),
                fs::read(e.path()).unwrap(),
            )
        })
        .collect();
    files.sort();
    files
}

#[test]
fn test_install_all_platforms_layout() {
    let fixture = Fixture::new();
    let summaries = install_with(&fixture.options());
    let project = fixture.project();

    assert_eq!(summaries.len(), 4);

    // Copilot already matches the canonical layout
    assert!(project.join(".github/agents/code-reviewer.agent.md").is_file());
    assert!(project.join(".github/agents/planner.agent.md").is_file());
    assert_eq!(
        read(project, ".github/skills/testing/SKILL.md"),
        "---\nname: testing\n---\nSee .github/skills/testing/scripts/run.sh\n"
    );
    assert!(project.join(".github/shared/style.md").is_file());

    // Claude rewrites skill references
    assert!(project.join(".claude/agents/planner.md").is_file());
    assert_eq!(
        read(project, ".claude/skills/testing/SKILL.md"),
        "---\nname: testing\n---\nSee .claude/skills/testing/scripts/run.sh\n"
    );
    assert_eq!(
        read(project, ".claude/shared/style.md"),
        "Use .claude/skills/ paths.\n"
    );

    // Antigravity turns agents into workflows
    assert_eq!(
        read(project, ".agent/workflows/code-reviewer.md"),
        "---\ndescription: Reviews pull requests\n---\n\nCheck the diff.\n"
    );
    assert_eq!(read(project, ".agent/workflows/planner.md"), "Plan the work.\n");

    // Cursor turns agents into rules and has no skills
    assert_eq!(
        read(project, ".cursor/rules/code-reviewer.mdc"),
        "# Code Reviewer\n\nReviews pull requests\n\nCheck the diff.\n"
    );
    assert!(read(project, ".cursor/rules/planner.mdc").starts_with("# Planner\n\n"));
    assert!(!project.join(".cursor/skills").exists());

    let cursor = summary_for(&summaries, PlatformId::Cursor);
    assert_eq!(cursor.agents_count, 2);
    assert_eq!(cursor.skills_count, 0);

    let claude = summary_for(&summaries, PlatformId::Claude);
    assert_eq!(claude.skills_count, 3);
    assert_eq!(claude.agents_count, 2);
    assert_eq!(claude.shared_count, 1);
    assert!(claude.failures.is_empty());
}

#[test]
fn test_binary_attachments_copied_verbatim() {
    let fixture = Fixture::new();
    install_with(&fixture.options());
    assert_eq!(
        read(fixture.project(), ".claude/skills/testing/scripts/run.sh"),
        "#!/bin/sh\necho ok\n"
    );
}

#[test]
fn test_flattening_collision_renames_second_skill() {
    let fixture = Fixture::new();
    let summaries = install_with(&fixture.options());
    let project = fixture.project();

    assert_eq!(
        read(project, ".claude/skills/api-design/SKILL.md"),
        "# Backend API\n"
    );
    assert_eq!(
        read(project, ".claude/skills/frontend-api-design/SKILL.md"),
        "# Frontend API\n"
    );

    let claude = summary_for(&summaries, PlatformId::Claude);
    let renamed: Vec<_> = claude
        .decisions
        .iter()
        .filter(|d| d.action == Action::Rename)
        .collect();
    assert_eq!(renamed.len(), 1);
    assert!(renamed[0].output_path.ends_with("frontend-api-design/SKILL.md"));
}

#[test]
fn test_second_run_is_idempotent() {
    let fixture = Fixture::new();
    install_with(&fixture.options());
    let first = snapshot(fixture.project());

    let summaries = install_with(&fixture.options());
    assert_eq!(snapshot(fixture.project()), first);

    for summary in &summaries {
        assert_eq!(summary.count(Action::Skip), 0, "{}", summary.platform);
    }
    let claude = summary_for(&summaries, PlatformId::Claude);
    assert!(
        claude
            .decisions
            .iter()
            .filter(|d| d.action == Action::Write)
            .all(|d| d.reason == Reason::Unchanged)
    );
}

#[test]
fn test_customized_file_is_never_overwritten() {
    let fixture = Fixture::new();
    install_with(&fixture.options());

    let edited = fixture.project().join(".claude/agents/planner.md");
    fs::write(&edited, "My own planner.\n").unwrap();

    let summaries = install_with(&fixture.options());
    assert_eq!(fs::read_to_string(&edited).unwrap(), "My own planner.\n");

    let claude = summary_for(&summaries, PlatformId::Claude);
    let decision = claude
        .decisions
        .iter()
        .find(|d| d.output_path == edited)
        .unwrap();
    assert_eq!(decision.action, Action::Skip);
    assert_eq!(decision.reason, Reason::Customized);
    assert_eq!(claude.agents_count, 1);
}

#[test]
fn test_unreadable_destination_is_skipped() {
    let fixture = Fixture::new();
    fs::create_dir_all(fixture.project().join(".claude/agents/planner.md")).unwrap();

    let mut options = fixture.options();
    options.selector = PlatformSelector::Only(PlatformId::Claude);
    let summaries = install_with(&options);

    let decision = summaries[0]
        .decisions
        .iter()
        .find(|d| d.output_path.ends_with("agents/planner.md"))
        .unwrap();
    assert_eq!(decision.action, Action::Skip);
    assert_eq!(decision.reason, Reason::Unverifiable);
    assert!(summaries[0].failures.is_empty());
}

#[test]
fn test_exclusion_skips_matching_assets() {
    let fixture = Fixture::new();
    let mut options = fixture.options();
    options.exclusions = vec!["API".to_string(), "review".to_string()];
    let summaries = install_with(&options);
    let project = fixture.project();

    assert!(!project.join(".claude/skills/api-design").exists());
    assert!(!project.join(".claude/skills/frontend-api-design").exists());
    assert!(!project.join(".claude/agents/code-reviewer.md").exists());
    assert!(project.join(".claude/skills/testing/SKILL.md").exists());
    assert!(project.join(".claude/agents/planner.md").exists());

    let claude = summary_for(&summaries, PlatformId::Claude);
    let excluded = claude
        .decisions
        .iter()
        .filter(|d| d.reason == Reason::Excluded)
        .count();
    assert_eq!(excluded, 3);
}

#[test]
fn test_kind_selection_limits_collections() {
    let fixture = Fixture::new();
    let mut options = fixture.options();
    options.kinds = KindSelection::Agents;
    install_with(&options);

    assert!(fixture.project().join(".claude/agents/planner.md").exists());
    assert!(!fixture.project().join(".claude/skills").exists());
    assert!(!fixture.project().join(".claude/shared").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let fixture = Fixture::new();
    let mut options = fixture.options();
    options.dry_run = true;
    let summaries = install_with(&options);

    assert!(snapshot(fixture.project()).is_empty());
    let claude = summary_for(&summaries, PlatformId::Claude);
    assert_eq!(claude.agents_count, 2);
    assert!(claude.decisions.iter().all(FileDecision::writes));
}

#[test]
fn test_global_scope_isolated_from_project() {
    let fixture = Fixture::new();
    let mut options = fixture.options();
    options.scope = InstallScope::Global;
    let summaries = install_with(&options);

    let home = fixture.home.path();
    assert!(home.join(".copilot/agents/planner.agent.md").is_file());
    assert!(home.join(".gemini/antigravity/workflows/planner.md").is_file());
    assert_eq!(
        read(home, ".claude/skills/testing/SKILL.md"),
        "---\nname: testing\n---\nSee ~/.claude/skills/testing/scripts/run.sh\n"
    );

    assert!(snapshot(fixture.project()).is_empty());
    assert!(!fixture.project().join(".gitignore").exists());
    assert_eq!(
        summary_for(&summaries, PlatformId::Antigravity).location,
        home.join(".gemini/antigravity")
    );
}

#[test]
fn test_global_copilot_skills_point_at_home() {
    let fixture = Fixture::new();
    let mut options = fixture.options();
    options.scope = InstallScope::Global;
    options.selector = PlatformSelector::Only(PlatformId::Copilot);
    install_with(&options);

    let home = fixture.home.path();
    assert_eq!(
        read(home, ".copilot/skills/testing/SKILL.md"),
        "---\nname: testing\n---\nSee ~/.copilot/skills/testing/scripts/run.sh\n"
    );
    assert_eq!(
        read(home, ".copilot/shared/style.md"),
        "Use ~/.copilot/skills/ paths.\n"
    );
}

#[test]
fn test_global_scope_requires_home() {
    let fixture = Fixture::new();
    let mut options = fixture.options();
    options.scope = InstallScope::Global;
    options.home = None;

    let err = install(&PlatformRegistry::default(), &options).unwrap_err();
    assert!(matches!(err, SkillsetError::HomeDirUnavailable));
}

#[test]
fn test_ignore_file_lists_generated_directories() {
    let fixture = Fixture::new();
    let mut options = fixture.options();
    options.selector = PlatformSelector::Only(PlatformId::Cursor);
    install_with(&options);

    assert_eq!(read(fixture.project(), ".gitignore"), ".cursor/rules/\n");

    options.selector = PlatformSelector::All;
    install_with(&options);
    install_with(&options);

    let content = read(fixture.project(), ".gitignore");
    for entry in [
        ".github/agents/",
        ".github/skills/",
        ".github/shared/",
        ".claude/agents/",
        ".claude/skills/",
        ".agent/workflows/",
        ".cursor/rules/",
    ] {
        assert_eq!(content.lines().filter(|l| *l == entry).count(), 1, "{entry}");
    }
    assert!(!content.lines().any(|l| l == ".claude/" || l == ".github/"));
}

#[test]
fn test_ignore_file_prefers_git_exclude() {
    let fixture = Fixture::new();
    fs::create_dir_all(fixture.project().join(".git")).unwrap();
    install_with(&fixture.options());

    assert!(fixture.project().join(".git/info/exclude").is_file());
    assert!(!fixture.project().join(".gitignore").exists());
}

#[test]
fn test_ignore_file_toggle_off() {
    let fixture = Fixture::new();
    let mut options = fixture.options();
    options.update_ignore_file = false;
    install_with(&options);
    assert!(!fixture.project().join(".gitignore").exists());
}

#[test]
fn test_write_failure_recorded_and_run_continues() {
    let fixture = Fixture::new();
    // A file where the skills directory should be blocks every skill write
    write(fixture.project(), ".claude/skills", "not a directory");

    let mut options = fixture.options();
    options.selector = PlatformSelector::Only(PlatformId::Claude);
    let summaries = install_with(&options);

    let claude = &summaries[0];
    assert!(!claude.failures.is_empty());
    assert_eq!(claude.skills_count, 0);
    assert_eq!(claude.agents_count, 2);
    assert!(fixture.project().join(".claude/agents/planner.md").is_file());
}

#[test]
fn test_source_errors_abort_before_writes() {
    let fixture = Fixture::new();
    write(fixture.source.path(), "agents/planner.agent.md", "Duplicate\n");

    let err = install(&PlatformRegistry::default(), &fixture.options()).unwrap_err();
    assert!(matches!(err, SkillsetError::DuplicateAsset { .. }));
    assert!(snapshot(fixture.project()).is_empty());
}
