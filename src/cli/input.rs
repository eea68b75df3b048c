//! Launcher script filter: query in, JSON items out.

use anyhow::{Context, Result};
use clap::Args;

use crate::config::WorkflowConfig;
use crate::selector::{ItemList, Selector, tokenize};

/// Print result items for a partial query.
///
/// The query may arrive as one argument (`"go no"`) or several; both are
/// split on whitespace. A trailing space starts a new, empty filter.
#[derive(Args, Debug, Default)]
pub struct InputCommand {
    /// The text typed so far
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub query: Vec<String>,
}

impl InputCommand {
    pub fn execute(self, config: &WorkflowConfig) -> Result<()> {
        println!("{}", self.render(&Selector::from_config(config))?);
        Ok(())
    }

    /// The JSON document for this query.
    pub fn render(&self, selector: &Selector) -> Result<String> {
        let tokens = tokenize(&self.query);
        let items = ItemList::from(selector.suggest(&tokens));
        serde_json::to_string(&items).context("Failed to serialize launcher items")
    }
}
