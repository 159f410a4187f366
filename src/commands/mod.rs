pub mod monthly;
pub mod worklog;

use crate::libs::{config::Config, data_storage::DataStorage, prompt::ConsolePrompter};
use anyhow::Result;
use chrono::Local;
use clap::Parser;

/// Copies a day's Toggl time entries into Jira worklogs.
///
/// Without flags the tool asks for a date and creates one worklog per issue
/// key found in that day's entries. `--monthly-report` prints the hours
/// balance for the current year instead.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, help = "Show monthly report for the current year")]
    pub monthly_report: bool,

    #[command(flatten)]
    pub worklog: worklog::WorklogArgs,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        Self::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let storage = DataStorage::new()?;
        let mut prompter = ConsolePrompter;
        let config = Config::load(&storage, &mut prompter)?;

        match self.monthly_report {
            true => monthly::cmd(&config, Local::now().date_naive()).await,
            false => worklog::cmd(self.worklog, &storage, &config, &mut prompter).await,
        }
    }
}
