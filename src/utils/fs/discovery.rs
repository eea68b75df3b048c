//! File discovery in directory trees.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively finds files whose name ends with `suffix`, ignoring ASCII case.
///
/// The walk is sorted by file name at every level, so the result order is
/// deterministic across platforms. Version-control metadata directories
/// (`.git`) are never entered.
///
/// # Examples
///
/// ```rust,no_run
/// use gitignore_workflow::utils::fs::find_files_with_suffix;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let templates = find_files_with_suffix(Path::new("mirror"), ".gitignore")?;
/// # Ok(())
/// # }
/// ```
///
/// # Behavior
///
/// - Only regular files are returned; symlinks are not followed
/// - A missing `dir` yields an empty vector
/// - An unreadable entry aborts the walk with an error naming the path
pub fn find_files_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let suffix = suffix.to_ascii_lowercase();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != ".git");

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk directory: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_ascii_lowercase();
        if name.ends_with(&suffix) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_files_with_suffix() {
        let temp = tempdir().unwrap();
        let root = temp.path();

        std::fs::write(root.join("Rust.gitignore"), "").unwrap();
        std::fs::write(root.join("README.md"), "").unwrap();
        crate::utils::fs::ensure_dir(&root.join("Global")).unwrap();
        std::fs::write(root.join("Global/macOS.GITIGNORE"), "").unwrap();

        let files = find_files_with_suffix(root, ".gitignore").unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0], root.join("Global/macOS.GITIGNORE"));
        assert_eq!(files[1], root.join("Rust.gitignore"));
    }

    #[test]
    fn test_skips_git_directory() {
        let temp = tempdir().unwrap();
        let root = temp.path();

        crate::utils::fs::ensure_dir(&root.join(".git/info")).unwrap();
        std::fs::write(root.join(".git/info/exclude.gitignore"), "").unwrap();
        std::fs::write(root.join("Go.gitignore"), "").unwrap();

        let files = find_files_with_suffix(root, ".gitignore").unwrap();
        assert_eq!(files, vec![root.join("Go.gitignore")]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let temp = tempdir().unwrap();
        let files = find_files_with_suffix(&temp.path().join("nope"), ".gitignore").unwrap();
        assert!(files.is_empty());
    }
}
