//! Daily mode: Toggl entries of one date become Jira worklogs.
//!
//! The flow is strictly sequential and stops at the first problem:
//!
//! 1. show the date history and ask for a date
//! 2. remember the date in the history
//! 3. fetch the day's summary from Toggl
//! 4. extract an issue key from every entry title (any bad title aborts the run)
//! 5. create one worklog per issue key, one request after another

use crate::{
    api::{Jira, Toggl},
    libs::{
        calendar::parse_date,
        config::Config,
        data_storage::DataStorage,
        formatter::format_hours_minutes,
        history::History,
        messages::Message,
        prompt::Prompter,
        worklog::{AggregationPolicy, IssueWorklogs},
    },
    msg_debug, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct WorklogArgs {
    #[arg(
        long,
        short,
        conflicts_with = "monthly_report",
        help = "Date to log (YYYY-MM-DD, 'today' or 'yesterday'); asked interactively when omitted"
    )]
    pub date: Option<String>,

    #[arg(
        long,
        value_enum,
        default_value_t = AggregationPolicy::Last,
        help = "Policy for entries sharing an issue key: 'last' keeps the entry processed last, 'sum' adds them up"
    )]
    pub aggregate: AggregationPolicy,

    #[arg(long, conflicts_with = "monthly_report", help = "Show the worklogs without creating them in Jira")]
    pub dry_run: bool,
}

pub async fn cmd(args: WorklogArgs, storage: &DataStorage, config: &Config, prompter: &mut dyn Prompter) -> Result<()> {
    let toggl = Toggl::new(config);
    let jira = Jira::new(config);
    log_day(args, storage, &toggl, &jira, prompter, Local::now().date_naive()).await?;
    Ok(())
}

/// Runs the daily flow against the given clients and returns how many
/// worklogs were created.
pub async fn log_day(
    args: WorklogArgs,
    storage: &DataStorage,
    toggl: &Toggl,
    jira: &Jira,
    prompter: &mut dyn Prompter,
    today: NaiveDate,
) -> Result<usize> {
    msg_print!(Message::DailyGreeting);

    let mut history = History::load(storage)?;
    history.print();

    let input = match args.date {
        Some(date) => date,
        None => prompter.ask(&Message::PromptDate.to_string(), false)?,
    };
    let date = parse_date(&input, today)?;
    history.append(date)?;

    let entries = toggl.report(date).await?;
    let date_str = date.format("%Y-%m-%d").to_string();
    if entries.is_empty() {
        msg_info!(Message::NoEntriesForDate(date_str));
        return Ok(0);
    }
    msg_print!(Message::EntriesFetched(entries.len(), date_str.clone()));

    let worklogs = IssueWorklogs::aggregate(&entries, args.aggregate)?;
    if args.aggregate == AggregationPolicy::Last {
        for key in worklogs.collisions() {
            msg_warning!(Message::DuplicateIssueKey(key.clone()));
        }
    }

    let submitted = submit(jira, &worklogs, date, args.dry_run).await?;
    if !args.dry_run {
        let total = format_hours_minutes(worklogs.total_seconds() as i64);
        msg_success!(Message::WorklogsSubmitted(submitted, total, date_str));
    }

    Ok(submitted)
}

/// Creates the worklogs one by one and returns how many were created.
///
/// The first failure stops the batch; worklogs already created stay in Jira.
pub async fn submit(jira: &Jira, worklogs: &IssueWorklogs, date: NaiveDate, dry_run: bool) -> Result<usize> {
    let mut submitted = 0;
    for (issue_key, seconds) in worklogs.iter() {
        msg_print!(Message::SubmittingWorklog(seconds, issue_key.to_string()));
        if dry_run {
            msg_info!(Message::WorklogSkippedDryRun(issue_key.to_string()));
            continue;
        }

        jira.log_work(issue_key, seconds, date)
            .await
            .with_context(|| Message::JiraRequestFailed(issue_key.to_string()))?;
        msg_debug!(Message::WorklogSubmitted(issue_key.to_string()));
        submitted += 1;
    }
    Ok(submitted)
}
