//! Install command implementation
//!
//! The installation process:
//! 1. Resolve the project root and load `skillset.yaml`
//! 2. Merge configuration with command-line options
//! 3. Read the source bundle and install it for each selected platform
//! 4. Print the per-platform summaries (styled, or JSON with `--json`)

use std::path::PathBuf;

use crate::cli::InstallArgs;
use crate::config::SkillsetConfig;
use crate::error::Result;
use crate::installer::{self, InstallOptions};
use crate::platform::{InstallScope, PlatformRegistry};
use crate::ui::display;

use super::resolve_project;

/// Run install command
pub fn run(project: Option<PathBuf>, args: InstallArgs, registry: &PlatformRegistry) -> Result<()> {
    let project_root = resolve_project(project)?;
    let config = SkillsetConfig::load(&project_root)?;
    let options = build_options(project_root, &config, &args);

    let summaries = installer::install(registry, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let base = match options.scope {
        InstallScope::Project => options.project_root.clone(),
        InstallScope::Global => options.home.clone().unwrap_or_default(),
    };
    display::print_install_summary(&summaries, &base, options.dry_run);
    Ok(())
}

fn build_options(project_root: PathBuf, config: &SkillsetConfig, args: &InstallArgs) -> InstallOptions {
    let mut options = InstallOptions::new(args.source.clone(), project_root);
    options.selector = args.platform;
    options.kinds = args.kind.into();
    options.scope = if args.global {
        InstallScope::Global
    } else {
        InstallScope::Project
    };
    options.home = dirs::home_dir();
    options.exclusions = config.exclusions_with(&args.exclude);
    options.dry_run = args.dry_run;
    options.update_ignore_file = config.ignore_file && !args.no_ignore;
    options.show_progress = !args.json && console::Term::stderr().is_term();
    options
}
