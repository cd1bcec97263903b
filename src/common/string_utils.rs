//! String utility functions for asset names and titles.

/// File name suffixes recognised on agent documents, longest first
const AGENT_SUFFIXES: &[&str] = &[".agent.md", ".md", ".mdc"];

/// Capitalize the first letter of a word
///
/// Converts the first character to uppercase and leaves the rest unchanged.
/// Returns an empty string if the input is empty.
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a hyphenated name into a title ("backend-developer" → "Backend Developer")
pub fn title_from_slug(name: &str) -> String {
    name.split('-')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip an agent file name's extension suffix ("planner.agent.md" → "planner")
///
/// Unknown extensions lose everything after the last dot; names without a dot are
/// returned unchanged.
pub fn agent_stem(file_name: &str) -> &str {
    for suffix in AGENT_SUFFIXES {
        if let Some(stem) = file_name.strip_suffix(suffix) {
            if !stem.is_empty() {
                return stem;
            }
        }
    }
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
