//! Common test utilities for skillset integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A project directory, a source bundle and a fake home directory
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory holding everything below
    pub temp: TempDir,
    /// Project root the install runs in
    pub path: PathBuf,
    /// Source bundle directory (`<temp>/templates`)
    pub source: PathBuf,
    /// Home directory used for global installs
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace with empty project, source and home directories
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let source = temp.path().join("templates");
        let home = temp.path().join("home");
        for dir in [&path, &source, &home] {
            std::fs::create_dir_all(dir).expect("Failed to create directory");
        }
        Self {
            temp,
            path,
            source,
            home,
        }
    }

    /// Create a workspace whose bundle holds a few skills, agents and a shared file
    pub fn with_sample_bundle() -> Self {
        let workspace = Self::new();
        workspace.write_source(
            "agents/code-reviewer.agent.md",
            "---\nname: code-reviewer\ndescription: Reviews pull requests\n---\n\nCheck the diff.\n",
        );
        workspace.write_source("agents/planner.md", "Plan the work.\n");
        workspace.write_source(
            "skills/testing/SKILL.md",
            "---\nname: testing\ndescription: Run the test suite\n---\nSee .github/skills/testing/run.sh\n",
        );
        workspace.write_source("skills/testing/run.sh", "#!/bin/sh\n");
        workspace.write_source("skills/backend/api-design/SKILL.md", "# Backend API\n");
        workspace.write_source("skills/frontend/api-design/SKILL.md", "# Frontend API\n");
        workspace.write_source("shared/conventions.md", "Shared conventions.\n");
        workspace
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        write(&self.path.join(path), content);
    }

    /// Write a file in the source bundle
    pub fn write_source(&self, path: &str, content: &str) {
        write(&self.source.join(path), content);
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Read a file from the home directory
    pub fn read_home_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.home.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Check if a file exists in the home directory
    pub fn home_file_exists(&self, path: &str) -> bool {
        self.home.join(path).exists()
    }

    /// Every file below the project root, as (relative path, content), sorted
    pub fn snapshot(&self) -> Vec<(String, Vec<u8>)> {
        let mut files = Vec::new();
        collect_files(&self.path, &self.path, &mut files);
        files.sort();
        files
    }

    /// The binary, run from the project root with HOME pointing at the fake home
    /// and the bundle passed through SKILLSET_SOURCE
    pub fn skillset_cmd(&self) -> Command {
        let mut cmd = skillset_cmd();
        cmd.current_dir(&self.path)
            .env("HOME", &self.home)
            .env("SKILLSET_SOURCE", &self.source)
            .env_remove("SKILLSET_PROJECT")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The binary with no environment adjustments
#[allow(deprecated)]
pub fn skillset_cmd() -> Command {
    Command::cargo_bin("skillset").expect("skillset binary should be built")
}

fn write(path: &std::path::Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn collect_files(root: &std::path::Path, dir: &std::path::Path, out: &mut Vec<(String, Vec<u8>)>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let relative = path
                .strip_prefix(root)
                .expect("path below root")
                .display()
                .to_string();
            out.push((relative, std::fs::read(&path).expect("Failed to read file")));
        }
    }
}
