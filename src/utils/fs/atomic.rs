//! Atomic file write operations using a temp-and-rename strategy.
//!
//! Readers of the catalog and of build artifacts must never observe a
//! partially written file, so every persistent write goes through here.

use crate::utils::fs::dirs::ensure_dir;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Safely writes a string to a file using atomic operations.
///
/// Convenience wrapper around [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// The content is written to a uniquely named temporary file in the target's
/// directory, synced to disk, and then renamed over the target. The file
/// therefore holds either the old content or the new content, never a mix.
///
/// # Examples
///
/// ```rust,no_run
/// use gitignore_workflow::utils::fs::atomic_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// atomic_write(Path::new("/tmp/templates.json"), br#"["Go","Node"]"#)?;
/// # Ok(())
/// # }
/// ```
///
/// # Guarantees
///
/// - **Atomicity**: File contents are never in a partial state
/// - **Durability**: Content is synced to disk before rename
/// - **Safety**: Parent directories are created automatically
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::Builder::new()
        .prefix(".tmp-")
        .tempfile_in(parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write temp file for: {}", path.display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_parents() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("nested/dir/file.txt");

        atomic_write(&target, b"hello").unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"hello");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("templates.json");
        std::fs::write(&target, "old content that is longer").unwrap();

        safe_write(&target, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("artifact.gitignore");

        atomic_write(&target, b"target/\n").unwrap();

        let entries: Vec<_> = std::fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
