//! Download or refresh the template mirror.

use anyhow::Result;
use clap::Args;

use crate::config::WorkflowConfig;
use crate::fetcher::Fetcher;

/// Clone the template repository on first use, pull it afterwards, and
/// rebuild the template catalog.
#[derive(Args, Debug, Default)]
pub struct UpdateCommand {}

impl UpdateCommand {
    pub async fn execute(self, config: &WorkflowConfig) -> Result<()> {
        let catalog = Fetcher::new(config).sync().await?;
        tracing::debug!("Catalog now lists {} templates", catalog.len());

        println!("Templates have been successfully updated.");
        Ok(())
    }
}
