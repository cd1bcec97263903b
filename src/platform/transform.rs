//! Content transforms from the canonical asset format to platform formats
//!
//! All transforms are pure functions over a document's text:
//! - [`to_workflow`]: agent → workflow with a description-only front matter block
//! - [`to_rule`]: agent → rule headed by a title, front matter removed
//! - [`rewrite_skill_paths`]: skill references retargeted at the installing platform

use crate::common::string_utils::{agent_stem, title_from_slug};
use crate::universal::{Frontmatter, parse_frontmatter_and_body, render_frontmatter};

/// Convert an agent into a workflow document.
///
/// Keeps only `description` in the front matter, falling back to the file name without
/// its extension suffix. Content without a front matter block passes through unchanged.
pub fn to_workflow(content: &str, file_name: &str) -> String {
    let Some((frontmatter, body)) = parse_frontmatter_and_body(content) else {
        return content.to_string();
    };

    let description = frontmatter
        .get_non_empty("description")
        .unwrap_or_else(|| agent_stem(file_name));

    let mut out = render_frontmatter(&[("description", description)]);
    out.push_str(body);
    out
}

/// Convert an agent into a rule document.
///
/// Emits `# <Title>` from `name` (or the file name), then the description paragraph when
/// one exists, then the body unchanged, separated by blank lines. The front matter
/// block is dropped.
pub fn to_rule(content: &str, file_name: &str) -> String {
    let (frontmatter, body) =
        parse_frontmatter_and_body(content).unwrap_or_else(|| (Frontmatter::default(), content));

    let name = frontmatter
        .get_non_empty("name")
        .unwrap_or_else(|| agent_stem(file_name));

    let mut out = format!("# {}\n", title_from_slug(name));
    if let Some(description) = frontmatter.get_non_empty("description") {
        out.push('\n');
        out.push_str(description.trim());
        out.push('\n');
    }
    // A body opening with a line break already supplies the blank line.
    if !body.starts_with(['\r', '\n']) {
        out.push('\n');
    }
    out.push_str(body);
    out
}

/// Skills directory references to rewrite and their replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillPathRewrite {
    /// Matched longest first so a global alias wins over the project alias it contains
    aliases: Vec<String>,
    target: String,
}

impl SkillPathRewrite {
    pub fn new(aliases: impl IntoIterator<Item = String>, target: impl Into<String>) -> Self {
        let mut aliases: Vec<String> = aliases.into_iter().filter(|a| !a.is_empty()).collect();
        aliases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        aliases.dedup();
        Self {
            aliases,
            target: target.into(),
        }
    }
}

/// Rewrite references to any platform's skills directory to the installing platform's.
///
/// A single left-to-right scan: replaced text is never rescanned, so an alias that
/// matches the output of an earlier replacement cannot apply twice.
pub fn rewrite_skill_paths(content: &str, rewrite: &SkillPathRewrite) -> String {
    if !rewrite.aliases.iter().any(|alias| content.contains(alias.as_str())) {
        return content.to_string();
    }

    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    'scan: while !rest.is_empty() {
        for alias in &rewrite.aliases {
            if let Some(after) = rest.strip_prefix(alias.as_str()) {
                out.push_str(&rewrite.target);
                rest = after;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}
