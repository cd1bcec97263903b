//! Display functions for install summaries, bundle contents and platforms

use std::path::Path;

use console::Style;

use crate::installer::{Action, FileDecision, InstallSummary};
use crate::platform::{InstallScope, PlatformRegistry};
use crate::source::SourceBundle;

/// Path shown relative to `base` when it lies below it
fn relative<'a>(path: &'a Path, base: &Path) -> std::borrow::Cow<'a, str> {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Print installation summary, one block per platform
pub fn print_install_summary(summaries: &[InstallSummary], base: &Path, dry_run: bool) {
    let names = summaries
        .iter()
        .map(|s| s.platform.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if dry_run {
        println!(
            "[DRY RUN] Would install for {}: {}",
            plural(summaries.len(), "platform"),
            names
        );
    } else {
        println!(
            "Installed for {}: {}",
            plural(summaries.len(), "platform"),
            names
        );
    }

    for summary in summaries {
        print_platform_summary(summary, base);
    }
}

fn print_platform_summary(summary: &InstallSummary, base: &Path) {
    println!();
    println!(
        "  {} {}",
        Style::new().bold().yellow().apply_to(&summary.display_name),
        Style::new().dim().apply_to(relative(&summary.location, base))
    );

    let mut counts = vec![
        plural(summary.skills_count, "skill"),
        plural(summary.agents_count, "agent"),
    ];
    if summary.shared_count > 0 {
        counts.push(format!("{} shared", summary.shared_count));
    }
    println!("    {}", counts.join(", "));

    let renamed = summary.count(Action::Rename);
    if renamed > 0 {
        println!(
            "    {} {}",
            Style::new().cyan().apply_to("renamed:"),
            plural(renamed, "file")
        );
    }

    for decision in summary.decisions.iter().filter(|d| d.action == Action::Skip) {
        print_skipped(decision, base);
    }

    for failure in &summary.failures {
        println!(
            "    {} {} ({})",
            Style::new().red().bold().apply_to("failed:"),
            relative(&failure.path, base),
            failure.reason
        );
    }
}

fn print_skipped(decision: &FileDecision, base: &Path) {
    println!(
        "    {} {} {}",
        Style::new().yellow().apply_to("skipped:"),
        relative(&decision.output_path, base),
        Style::new().dim().apply_to(format!("({})", decision.reason))
    );
}

/// Print the assets of a source bundle
pub fn print_bundle(bundle: &SourceBundle) {
    if bundle.skills.is_empty() && bundle.agents.is_empty() {
        println!("No skills or agents found in {}", bundle.root.display());
        return;
    }

    if !bundle.skills.is_empty() {
        println!("Skills ({}):", bundle.skills.len());
        for skill in &bundle.skills {
            println!(
                "  {} {}",
                Style::new().bold().yellow().apply_to(&skill.name),
                Style::new().dim().apply_to(skill.origin_path.display())
            );
            if !skill.attachments.is_empty() {
                println!("    {}", plural(skill.attachments.len(), "attachment"));
            }
        }
    }

    if !bundle.agents.is_empty() {
        if !bundle.skills.is_empty() {
            println!();
        }
        println!("Agents ({}):", bundle.agents.len());
        for agent in &bundle.agents {
            println!(
                "  {} {}",
                Style::new().bold().yellow().apply_to(&agent.name),
                Style::new().dim().apply_to(agent.origin_path.display())
            );
        }
    }

    if !bundle.shared.is_empty() {
        println!();
        println!("Shared files ({}):", bundle.shared.len());
        for file in &bundle.shared {
            println!("  {}", file.relative_path.display());
        }
    }
}

/// Print every registered platform with its directories
pub fn print_platforms(registry: &PlatformRegistry) {
    println!("Supported platforms:");
    for platform in registry.get_all_platforms() {
        println!();
        println!(
            "  {} {}",
            Style::new().bold().yellow().apply_to(platform.id.as_str()),
            Style::new().dim().apply_to(format!("({})", platform.display_name))
        );
        println!(
            "    {} {}  {} ~/{}",
            Style::new().bold().apply_to("project:"),
            platform.dir_for(InstallScope::Project),
            Style::new().bold().apply_to("global:"),
            platform.dir_for(InstallScope::Global)
        );
        println!(
            "    {} {}/*{}",
            Style::new().bold().apply_to("agents:"),
            platform.agents_subdir,
            platform.agent_file_extension
        );
        match platform.skills_subdir.as_deref() {
            Some(skills) => println!("    {} {}/", Style::new().bold().apply_to("skills:"), skills),
            None => println!(
                "    {} {}",
                Style::new().bold().apply_to("skills:"),
                Style::new().dim().apply_to("not supported")
            ),
        }
    }
}
