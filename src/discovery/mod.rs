//! Finding stadium files in a project.
//!
//! A project is a directory with an optional `hbs.yaml` manifest. Without a
//! manifest the whole directory is scanned for `.hbs` and `.json` files.
//!
//! # Example
//!
//! ```ignore
//! use hbs::discovery::discover;
//!
//! let result = discover("./stadiums")?;
//! for path in &result.scan.files {
//!     let stadium = hbs::parser::load(path)?;
//! }
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "hbs.yaml";

/// Result of discovering stadiums in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    pub root: PathBuf,

    /// The loaded manifest, or the default when there is no hbs.yaml.
    pub manifest: Manifest,

    pub has_manifest: bool,

    pub scan: ScanResult,
}

/// Discover stadium files under a project directory.
///
/// Reads `hbs.yaml` from `root` when present and scans its sources,
/// otherwise scans `root` itself.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.is_file() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let scan = scan_sources(&manifest.effective_sources(), &root, &manifest);
    debug!(root = %root.display(), files = scan.total(), has_manifest, "discovered stadiums");

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover stadiums from explicit files and directories.
///
/// Files are taken as given whatever their extension; directories are
/// scanned with the default manifest.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else {
            scan.merge(ScanResult {
                files: vec![path.clone()],
            });
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}
