//! Template repository fixtures.

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::git_helper::TestGit;

/// Writes `<name>.gitignore` files into `dir`.
///
/// Names may contain `/` to place a template in a subdirectory, the way the
/// community collection keeps `Global/` and `community/` templates.
pub fn write_templates(dir: &Path, templates: &[(&str, &str)]) -> Result<()> {
    for (name, content) in templates {
        let path = dir.join(format!("{name}.gitignore"));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
    }
    Ok(())
}

/// Creates a committed git repository holding the given templates plus a
/// README, and returns its path.
///
/// The result is suitable as a `file://` remote for clone and pull.
pub fn create_template_repo(dir: &Path, templates: &[(&str, &str)]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let git = TestGit::new(dir);
    git.init()?;
    git.config_user()?;

    std::fs::write(dir.join("README.md"), "# gitignore templates\n")?;
    write_templates(dir, templates)?;

    git.add_all()?;
    git.commit("Initial templates")?;
    Ok(dir.to_path_buf())
}

/// Formats a local path as a `file://` URL git can clone from.
pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}
