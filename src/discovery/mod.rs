//! File discovery and loading for ged projects.
//!
//! Handles finding GEDCOM files from a project directory or explicit
//! paths, optionally driven by a `ged.yaml` manifest, and reading them
//! into line sequences for the parser.

mod manifest;
mod reader;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::Manifest;
pub use reader::{read_lines, ByteOrderMark};
pub use scanner::{is_gedcom_file, scan_directory, scan_sources};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "ged.yaml";

/// Result of discovering GEDCOM files in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default when no ged.yaml was found).
    pub manifest: Manifest,

    /// Whether a ged.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered GEDCOM files.
    pub files: Vec<PathBuf>,
}

/// Discover GEDCOM files in a project directory.
///
/// Looks for a `ged.yaml` manifest in the root. When found, its source
/// paths drive the scan; otherwise the whole directory is scanned.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let sources = manifest.effective_sources();
    let files = scan_sources(&sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        files,
    })
}

/// Discover GEDCOM files from explicit paths (no manifest lookup).
/// Directories are scanned recursively; files are taken as given.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scan_directory(path, &manifest));
        } else {
            files.push(path.clone());
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();
        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert!(result.files.is_empty());
    }

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("royal.ged"), "0 TRLR\n").unwrap();

        let result = discover(dir.path()).unwrap();
        assert!(!result.has_manifest);
        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("ged.yaml"),
            "sources:\n  - data/\noutput: build\npretty: true\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/tree.ged"), "0 TRLR\n").unwrap();
        fs::write(dir.path().join("ignored.ged"), "0 TRLR\n").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(result.has_manifest);
        assert!(result.manifest.pretty);
        assert_eq!(result.manifest.output, PathBuf::from("build"));
        assert_eq!(result.files.len(), 1);
        assert!(result.files[0].ends_with("data/tree.ged"));
    }

    #[test]
    fn test_discover_paths_mixed() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("one.ged");
        fs::write(&file, "0 TRLR\n").unwrap();

        let result = discover_paths(&[file.clone()]).unwrap();
        assert_eq!(result.files, vec![file]);
    }
}
