//! Project configuration (skillset.yaml)
//!
//! Every field is optional; a missing file is the same as an empty one.
//!
//! ```yaml
//! exclude: [experimental, draft]
//! ignore_file: true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{
    Result,
    config::{parse_failed, read_failed},
};

/// Configuration file name, looked up in the project root
pub const CONFIG_FILE: &str = "skillset.yaml";

/// Project configuration (skillset.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkillsetConfig {
    /// Asset name patterns to skip (case-insensitive substring match)
    pub exclude: Vec<String>,

    /// Whether project installs append generated directories to the ignore file
    pub ignore_file: bool,
}

impl Default for SkillsetConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            ignore_file: true,
        }
    }
}

impl SkillsetConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load `skillset.yaml` from the project root, or defaults when it does not exist
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(read_failed(path.display().to_string(), e.to_string())),
        };

        let config = Self::from_yaml(&content)
            .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Config exclusions followed by the extra ones given on the command line
    pub fn exclusions_with(&self, extra: &[String]) -> Vec<String> {
        let mut patterns = self.exclude.clone();
        for pattern in extra {
            if !patterns.contains(pattern) {
                patterns.push(pattern.clone());
            }
        }
        patterns
    }
}
