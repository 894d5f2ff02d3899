//! File system scanner for discovering GEDCOM files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Whether a path looks like a GEDCOM file (`.ged` extension).
pub fn is_gedcom_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("ged"))
}

/// Recursively scan a directory for `.ged` files, honoring the
/// manifest's exclude patterns. Results are sorted for stable output.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if !root.exists() {
        return files;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        if !is_gedcom_file(path) {
            continue;
        }
        if manifest.is_excluded(path) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    files
}

/// Scan all manifest source paths relative to a project root.
pub fn scan_sources(sources: &[String], root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for source in sources {
        let path = root.join(source);
        if path.is_file() {
            if is_gedcom_file(&path) && !manifest.is_excluded(&path) {
                files.push(path);
            }
        } else {
            files.extend(scan_directory(&path, manifest));
        }
    }

    files.sort();
    files.dedup();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_gedcom_file() {
        assert!(is_gedcom_file(Path::new("royal.ged")));
        assert!(is_gedcom_file(Path::new("royal.GED")));
        assert!(!is_gedcom_file(Path::new("royal.json")));
        assert!(!is_gedcom_file(Path::new("ged")));
    }

    #[test]
    fn test_scan_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.ged"), "0 TRLR\n").unwrap();
        fs::write(dir.path().join("b.txt"), "not gedcom\n").unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.ged"), "0 TRLR\n").unwrap();

        let files = scan_directory(dir.path(), &Manifest::default());

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.ged"));
        assert!(files[1].ends_with("nested/c.ged"));
    }

    #[test]
    fn test_scan_respects_excludes() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("keep.ged"), "0 TRLR\n").unwrap();
        fs::create_dir_all(dir.path().join("backup")).unwrap();
        fs::write(dir.path().join("backup/old.ged"), "0 TRLR\n").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/backup/*".to_string()],
            ..Manifest::default()
        };

        let files = scan_directory(dir.path(), &manifest);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.ged"));
    }

    #[test]
    fn test_scan_missing_directory() {
        let files = scan_directory(Path::new("/nonexistent"), &Manifest::default());
        assert!(files.is_empty());
    }
}
