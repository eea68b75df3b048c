//! The template catalog.
//!
//! A [`Catalog`] is the sorted, deduplicated set of template names found in
//! the mirror. It is rebuilt from scratch on every sync and persisted as a
//! JSON array under [`CATALOG_KEY`] in the [`DataStore`].
//!
//! Template names keep their on-disk spelling (`Node`, `VisualStudio`), and
//! ordering is plain byte order, so uppercase names sort before lowercase.

pub mod store;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

pub use store::DataStore;

use crate::constants::{CATALOG_KEY, TEMPLATE_SUFFIX};
use crate::utils::fs::find_files_with_suffix;

/// Sorted set of template names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    names: BTreeSet<String>,
}

impl Catalog {
    /// Builds a catalog from names, sorting and deduplicating them.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Walks `mirror` and collects the name of every template file.
    ///
    /// Files in `.git` are ignored, as is a file named exactly `.gitignore`.
    /// A template present in several directories contributes one name.
    ///
    /// # Errors
    ///
    /// Fails when the directory walk hits an unreadable entry.
    pub fn scan(mirror: &Path) -> Result<Self> {
        let files = find_files_with_suffix(mirror, TEMPLATE_SUFFIX)?;
        let names = files
            .iter()
            .filter_map(|path| path.file_name()?.to_str())
            .filter_map(template_name)
            .map(str::to_string)
            .collect::<BTreeSet<_>>();

        tracing::debug!("Found {} templates under {}", names.len(), mirror.display());
        Ok(Self {
            names,
        })
    }

    /// Reads the persisted catalog, `Ok(None)` if no sync has completed yet.
    pub fn load(store: &DataStore) -> Result<Option<Self>> {
        store.load(CATALOG_KEY)
    }

    /// Replaces the persisted catalog.
    pub fn save(&self, store: &DataStore) -> Result<()> {
        store.save(CATALOG_KEY, self)
    }

    /// Names in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether `name` is in the catalog (exact spelling).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Strips the template suffix from a file name, ignoring its case.
///
/// Returns `None` for files without the suffix and for a bare `.gitignore`.
///
/// ```
/// use gitignore_workflow::catalog::template_name;
///
/// assert_eq!(template_name("Node.gitignore"), Some("Node"));
/// assert_eq!(template_name("Qt.GITIGNORE"), Some("Qt"));
/// assert_eq!(template_name(".gitignore"), None);
/// assert_eq!(template_name("README.md"), None);
/// ```
#[must_use]
pub fn template_name(file_name: &str) -> Option<&str> {
    let split = file_name.len().checked_sub(TEMPLATE_SUFFIX.len())?;
    let suffix = file_name.get(split..)?;
    if !suffix.eq_ignore_ascii_case(TEMPLATE_SUFFIX) {
        return None;
    }
    file_name.get(..split).filter(|name| !name.is_empty())
}
