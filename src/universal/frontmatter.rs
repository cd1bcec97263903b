//! Parse and emit the front matter block of canonical asset documents.
//!
//! The block between the `---` delimiters is YAML. Its top-level scalar entries are
//! read into an ordered map of strings; nested mappings and lists are skipped, since
//! no transform reads them. The body is never parsed.

use serde_yaml::{Mapping, Value};

/// Delimiter line opening and closing a front matter block
pub const DELIMITER: &str = "---";

/// Top-level scalar front matter fields, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: Vec<(String, String)>,
}

impl Frontmatter {
    /// Get a field value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get a field value, treating blank values as absent
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    /// Read the YAML text of a block.
    ///
    /// A block that is not a YAML mapping carries no fields; it is still a block, so
    /// transforms drop it from their output.
    fn from_yaml(block: &str) -> Self {
        if block.trim().is_empty() {
            return Self::default();
        }

        let value: Value = match serde_yaml::from_str(block) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "front matter is not valid YAML, ignoring its fields");
                return Self::default();
            }
        };

        let Value::Mapping(mapping) = value else {
            return Self::default();
        };

        let fields = mapping
            .iter()
            .filter_map(|(key, value)| Some((scalar(key)?, scalar(value)?)))
            .collect();
        Self { fields }
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Split content into front matter and body.
///
/// Returns `None` when the content does not open with a `---` line or the block is
/// never closed. Only an unindented `---` line closes the block. The returned body
/// is a slice of the input starting right after the closing delimiter line, so it
/// round-trips byte for byte.
pub fn parse_frontmatter_and_body(content: &str) -> Option<(Frontmatter, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        let line_start = offset;
        offset += line.len();
        if line.trim_end() == DELIMITER {
            let block = &content[block_start..line_start];
            return Some((Frontmatter::from_yaml(block), &content[offset..]));
        }
    }

    None
}

/// Render a front matter block from ordered key/value pairs, delimiters included.
pub fn render_frontmatter(fields: &[(&str, &str)]) -> String {
    let mapping: Mapping = fields
        .iter()
        .map(|(key, value)| (Value::from(*key), Value::from(*value)))
        .collect();
    let yaml = serde_yaml::to_string(&mapping).unwrap_or_default();
    format!("{DELIMITER}\n{yaml}{DELIMITER}\n")
}
