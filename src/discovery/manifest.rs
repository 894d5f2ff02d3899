//! Project manifest (ged.yaml) parsing.
//!
//! The manifest defines project defaults: source paths to scan for
//! GEDCOM files, the output directory, which sections to export, and
//! tokenizer strictness. Command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GedError, Result};
use crate::export::Section;

/// Project manifest loaded from ged.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories or files to scan for `.ged` files.
    /// Defaults to the current directory if empty.
    pub sources: Vec<String>,

    /// Output directory for converted JSON.
    pub output: PathBuf,

    /// Sections to export ("individuals", "families", "metadata").
    /// Empty means all.
    pub fields: Vec<String>,

    /// Pretty-print the JSON output.
    pub pretty: bool,

    /// Reject user tags that shadow standard tag names.
    pub strict_tags: bool,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            fields: vec![],
            pretty: false,
            strict_tags: false,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a ged.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GedError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML text.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| GedError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check ged.yaml syntax".to_string()),
        })
    }

    /// The source paths to scan, defaulting to the current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    /// The requested output sections. Unknown field names are fatal.
    pub fn sections(&self) -> Result<Vec<Section>> {
        self.fields
            .iter()
            .map(|field| {
                Section::from_name(field).ok_or_else(|| GedError::Parse {
                    message: format!("Unknown output field '{}'", field),
                    help: Some("Valid fields: individuals, families, metadata".to_string()),
                })
            })
            .collect()
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob matching: `*suffix`, `prefix/*` and `**/dir/*`.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir));
            }
            return path.contains(suffix) || path.ends_with(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path == pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let manifest = Manifest::default();
        assert_eq!(manifest.output, PathBuf::from("dist"));
        assert!(manifest.fields.is_empty());
        assert!(!manifest.strict_tags);
        assert_eq!(manifest.effective_sources(), vec!["."]);
    }

    #[test]
    fn test_parse() {
        let manifest = Manifest::parse(
            r#"
sources:
  - data/
output: converted
fields:
  - individuals
  - families
pretty: true
"#,
        )
        .unwrap();

        assert_eq!(manifest.sources, vec!["data/"]);
        assert_eq!(manifest.output, PathBuf::from("converted"));
        assert!(manifest.pretty);
        assert_eq!(
            manifest.sections().unwrap(),
            vec![Section::Individuals, Section::Families]
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let manifest = Manifest::parse("fields:\n  - headers\n").unwrap();
        assert!(manifest.sections().is_err());
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        assert!(Manifest::parse("sources: [unclosed").is_err());
    }

    #[test]
    fn test_excludes() {
        let manifest = Manifest {
            excludes: vec!["**/backup/*".to_string(), "*.tmp.ged".to_string()],
            ..Manifest::default()
        };

        assert!(manifest.is_excluded(Path::new("data/backup/old.ged")));
        assert!(manifest.is_excluded(Path::new("scratch.tmp.ged")));
        assert!(!manifest.is_excluded(Path::new("data/royal.ged")));
    }
}
