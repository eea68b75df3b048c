//! Turns partial user input into launcher suggestions.
//!
//! The query is a list of tokens. Every token but the last is a template the
//! user already picked; the last one filters the catalog by case-insensitive
//! substring. When the filter matches nothing, the whole catalog is shown
//! again so the list never goes blank.
//!
//! Given the catalog `["go", "node", "python"]`:
//!
//! | tokens          | suggestions                               |
//! |-----------------|-------------------------------------------|
//! | `[]`            | `go`, `node`, `python`                    |
//! | `["py"]`        | Build `"py"`, `python`                    |
//! | `["go", "no"]`  | Build `"go no"`, `node` (as `"go node "`) |
//! | `["zzz"]`       | Build `"zzz"`, `go`, `node`, `python`     |

pub mod item;

pub use item::{ItemList, Suggestion, SuggestionKind};

use crate::catalog::Catalog;
use crate::config::WorkflowConfig;

/// Produces suggestions from a catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    catalog: Option<Catalog>,
}

impl Selector {
    /// Wraps a catalog. `None` and an empty catalog both mean no sync has
    /// completed yet.
    pub fn new(catalog: Option<Catalog>) -> Self {
        Self {
            catalog: catalog.filter(|catalog| !catalog.is_empty()),
        }
    }

    /// Loads the stored catalog. An unreadable catalog is treated as missing.
    pub fn from_config(config: &WorkflowConfig) -> Self {
        let catalog = match Catalog::load(&config.store()) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("Ignoring unreadable catalog: {e:#}");
                None
            }
        };
        Self::new(catalog)
    }

    /// Suggestions for `query_tokens`, best first.
    #[must_use]
    pub fn suggest(&self, query_tokens: &[String]) -> Vec<Suggestion> {
        let Some(catalog) = &self.catalog else {
            return vec![Suggestion::catalog_missing()];
        };

        let Some((filter, prefix)) = query_tokens.split_last() else {
            return catalog.iter().map(|name| Suggestion::template(name, format!("{name} "))).collect();
        };

        let needle = filter.to_lowercase();
        let mut matches: Vec<&str> =
            catalog.iter().filter(|name| name.to_lowercase().contains(&needle)).collect();
        if matches.is_empty() {
            matches = catalog.iter().collect();
        }

        let selection = join_nonempty(query_tokens);
        let confirmed = join_nonempty(prefix);

        let mut suggestions = Vec::with_capacity(matches.len() + 1);
        suggestions.push(Suggestion::build(selection));
        suggestions.extend(matches.into_iter().map(|name| {
            let autocomplete = if confirmed.is_empty() {
                format!("{name} ")
            } else {
                format!("{confirmed} {name} ")
            };
            Suggestion::template(name, autocomplete)
        }));
        suggestions
    }
}

/// Splits raw launcher arguments into query tokens.
///
/// Arguments are split on whitespace. When the input ends in whitespace the
/// user has finished the previous word, so an empty filter is appended:
/// `"node "` becomes `["node", ""]`. A blank last argument, as in
/// `["node", ""]`, finishes the word the same way.
#[must_use]
pub fn tokenize(args: &[String]) -> Vec<String> {
    let mut tokens: Vec<String> =
        args.iter().flat_map(|arg| arg.split_whitespace()).map(str::to_string).collect();

    let word_finished = args
        .last()
        .is_some_and(|arg| arg.chars().last().is_none_or(char::is_whitespace));
    if word_finished && !tokens.is_empty() {
        tokens.push(String::new());
    }
    tokens
}

fn join_nonempty(tokens: &[String]) -> String {
    tokens.iter().map(String::as_str).filter(|token| !token.is_empty()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    fn selector() -> Selector {
        Selector::new(Some(Catalog::from_names(["go", "node", "python"])))
    }

    fn titles(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_empty_query_lists_catalog() {
        let suggestions = selector().suggest(&[]);

        assert_eq!(titles(&suggestions), vec!["go", "node", "python"]);
        assert!(suggestions.iter().all(|s| s.kind == SuggestionKind::Template && !s.valid));
        assert_eq!(suggestions[1].autocomplete.as_deref(), Some("node "));
    }

    #[test]
    fn test_filter_with_build_item_first() {
        let suggestions = selector().suggest(&tokens(&["py"]));

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].kind, SuggestionKind::Build);
        assert!(suggestions[0].valid);
        assert_eq!(suggestions[0].arg.as_deref(), Some("py"));
        assert_eq!(suggestions[1].title, "python");
        assert_eq!(suggestions[1].autocomplete.as_deref(), Some("python "));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let suggestions = selector().suggest(&tokens(&["PY"]));
        assert_eq!(titles(&suggestions)[1..], ["python"]);
    }

    #[test]
    fn test_no_match_falls_back_to_catalog() {
        let suggestions = selector().suggest(&tokens(&["zzz"]));
        assert_eq!(titles(&suggestions)[1..], ["go", "node", "python"]);
        assert_eq!(suggestions[0].arg.as_deref(), Some("zzz"));
    }

    #[test]
    fn test_prefix_is_kept_in_autocomplete() {
        let suggestions = selector().suggest(&tokens(&["go", "no"]));

        assert_eq!(suggestions[0].arg.as_deref(), Some("go no"));
        assert_eq!(titles(&suggestions)[1..], ["node"]);
        assert_eq!(suggestions[1].autocomplete.as_deref(), Some("go node "));
    }

    #[test]
    fn test_trailing_empty_filter() {
        let suggestions = selector().suggest(&tokens(&["node", ""]));

        assert_eq!(suggestions[0].arg.as_deref(), Some("node"));
        assert_eq!(titles(&suggestions)[1..], ["go", "node", "python"]);
        assert_eq!(suggestions[1].autocomplete.as_deref(), Some("node go "));
    }

    #[test]
    fn test_missing_catalog_diagnostic() {
        for selector in [Selector::new(None), Selector::new(Some(Catalog::default()))] {
            let suggestions = selector.suggest(&tokens(&["go"]));
            assert_eq!(suggestions.len(), 1);
            assert_eq!(suggestions[0].kind, SuggestionKind::Diagnostic);
            assert!(!suggestions[0].valid);
            assert!(suggestions[0].subtitle.contains("run update"));
        }
    }

    #[test]
    fn test_from_config_with_corrupt_catalog() {
        let temp = tempfile::tempdir().unwrap();
        let config = WorkflowConfig::new(temp.path(), temp.path().join("cache"));
        std::fs::write(config.store().path_for(crate::constants::CATALOG_KEY), "[1, 2").unwrap();

        let suggestions = Selector::from_config(&config).suggest(&[]);
        assert_eq!(suggestions[0].kind, SuggestionKind::Diagnostic);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize(&tokens(&["go  node"])), tokens(&["go", "node"]));
        assert_eq!(tokenize(&tokens(&["go", "node "])), tokens(&["go", "node", ""]));
        assert_eq!(tokenize(&tokens(&["  "])), Vec::<String>::new());
        assert!(tokenize(&[]).is_empty());
    }

    #[test]
    fn test_tokenize_blank_last_argument_finishes_word() {
        assert_eq!(tokenize(&tokens(&["node", ""])), tokens(&["node", ""]));
        assert_eq!(tokenize(&tokens(&["go", "node", " "])), tokens(&["go", "node", ""]));
        assert!(tokenize(&tokens(&[""])).is_empty());

        let suggestions = selector().suggest(&tokenize(&tokens(&["node", ""])));
        assert_eq!(suggestions[0].arg.as_deref(), Some("node"));
        assert_eq!(suggestions.len(), 4);
        assert_eq!(suggestions[1].autocomplete.as_deref(), Some("node go "));
    }
}
