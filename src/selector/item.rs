//! Launcher result items.
//!
//! The launcher reads a JSON document of the form `{"items": [...]}` from
//! stdout; [`ItemList`] serializes to exactly that.

use serde::Serialize;

/// What a suggestion does when the user acts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionKind {
    /// A template name; acting on it autocompletes the query
    #[default]
    Template,
    /// Builds the current selection
    Build,
    /// Informational only, such as a missing catalog
    Diagnostic,
}

/// One entry in the launcher's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub subtitle: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Payload handed to the next action, the selection for a build item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,

    /// Replacement query when the user tabs into the item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,

    /// Only valid items can be actioned
    pub valid: bool,

    #[serde(skip)]
    pub kind: SuggestionKind,
}

impl Suggestion {
    /// A template entry completing the query to `autocomplete`.
    pub fn template(name: &str, autocomplete: String) -> Self {
        Self {
            title: name.to_string(),
            subtitle: String::new(),
            uid: Some(name.to_string()),
            arg: None,
            autocomplete: Some(autocomplete),
            valid: false,
            kind: SuggestionKind::Template,
        }
    }

    /// The action that builds `selection`.
    pub fn build(selection: String) -> Self {
        Self {
            title: "Build .gitignore file".to_string(),
            subtitle: "Combine the chosen templates to a single .gitignore file...".to_string(),
            uid: Some("build_gitignore".to_string()),
            arg: Some(selection),
            autocomplete: None,
            valid: true,
            kind: SuggestionKind::Build,
        }
    }

    /// Shown instead of templates when no catalog has been stored yet.
    pub fn catalog_missing() -> Self {
        Self {
            title: "Templates missing".to_string(),
            subtitle: "Please run update to download the templates...".to_string(),
            uid: None,
            arg: None,
            autocomplete: None,
            valid: false,
            kind: SuggestionKind::Diagnostic,
        }
    }
}

/// The document printed for the launcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemList {
    pub items: Vec<Suggestion>,
}

impl From<Vec<Suggestion>> for ItemList {
    fn from(items: Vec<Suggestion>) -> Self {
        Self {
            items,
        }
    }
}
