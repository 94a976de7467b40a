//! File system scanner for stadium files.

use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use super::manifest::Manifest;

/// Stadium files found by a scan, in walk order.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan, skipping files already found.
    pub fn merge(&mut self, other: ScanResult) {
        for file in other.files {
            if !self.files.contains(&file) {
                self.files.push(file);
            }
        }
    }
}

/// Recursively scan a directory for stadium files.
///
/// Exclude patterns are matched against paths relative to `root`. Entries
/// are visited in file name order so results are stable across platforms.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok());

    for entry in walker {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if manifest.is_excluded(relative) {
            trace!(path = %path.display(), "excluded");
            continue;
        }

        if manifest.is_stadium_file(path) {
            result.files.push(path.to_path_buf());
        }
    }

    result
}

/// Scan each source, resolving relative sources against `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}
