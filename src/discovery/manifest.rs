//! Project manifest (hbs.yaml) parsing.
//!
//! The manifest says where stadium files live, which to skip, and where
//! previews are written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HbsError, Result};

/// Project manifest loaded from hbs.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories to scan. Empty means the project root.
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Directory previews are written to.
    pub output: PathBuf,

    pub scale: Option<u32>,

    /// File extensions treated as stadium files, without the dot.
    pub extensions: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            excludes: vec![],
            output: PathBuf::from("dist"),
            scale: None,
            extensions: vec!["hbs".to_string(), "json".to_string()],
        }
    }
}

impl Manifest {
    /// Load manifest from an hbs.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| HbsError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML. An empty document is the default manifest.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| HbsError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check hbs.yaml syntax".to_string()),
        })
    }

    /// Whether `path` (relative to the project root) matches an exclude
    /// pattern.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy().replace('\\', "/");
        self.excludes.iter().any(|pattern| matches_pattern(&path, pattern))
    }

    /// Whether a file has one of the stadium extensions.
    pub fn is_stadium_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1).max(1)
    }
}

/// Minimal glob support:
/// - `*.ext` matches a file name suffix
/// - `**/dir/*` matches anything inside `dir` at any depth
/// - `dir/*` matches anything inside a top-level `dir`
/// - anything else matches a whole path component
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix('*').filter(|s| !s.contains('/') && !s.starts_with('*')) {
        return path.ends_with(suffix);
    }

    if let Some(dir) = pattern.strip_prefix("**/").and_then(|p| p.strip_suffix("/*")) {
        return path.split('/').rev().skip(1).any(|part| part == dir);
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return path.strip_prefix(dir).is_some_and(|rest| rest.starts_with('/'));
    }

    path.split('/').any(|part| part == pattern)
}
