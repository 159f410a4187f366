//! Display implementation for application messages.
//!
//! Every user-facing string lives here, so the commands only ever refer to
//! a `Message` variant and the wording stays consistent between the daily
//! worklog flow and the monthly report.
//!
//! ```rust
//! use toggl_jira_worklog::libs::messages::Message;
//!
//! let message = Message::SubmittingWorklog(3600, "AB-1".to_string());
//! assert_eq!(message.to_string(), "3600 sec. -> AB-1");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDirCreateFailed(path) => format!("Failed to create configuration directory {}", path),
            Message::ConfigReadFailed(path) => format!("Failed to read configuration file {}", path),
            Message::ConfigParseFailed(path) => format!("Failed to parse configuration file {}", path),
            Message::ConfigWriteFailed(path) => format!("Failed to write configuration file {}", path),
            Message::ConfigValueMissing(field) => format!("{} is not found in config, please enter the value", field),
            Message::HomeDirNotFound => "Unable to determine the home directory (HOME is not set)".to_string(),

            // === HISTORY MESSAGES ===
            Message::HistoryHeader => "7 days history:".to_string(),
            Message::HistoryEmpty => "(no dates yet)".to_string(),
            Message::HistoryReadFailed(path) => format!("Failed to read history file {}", path),
            Message::HistoryWriteFailed(path) => format!("Failed to write history file {}", path),

            // === DAILY WORKLOG MESSAGES ===
            Message::DailyGreeting => "Give me a date, I'll fetch all Toggl logs for the day and create work logs in Jira".to_string(),
            Message::EntriesFetched(count, date) => format!("Fetched {} time entries for {}", count, date),
            Message::NoEntriesForDate(date) => format!("No time entries found for {}, nothing to log.", date),
            Message::SubmittingWorklog(seconds, key) => format!("{} sec. -> {}", seconds, key),
            Message::WorklogSubmitted(key) => format!("Worklog created for {}", key),
            Message::WorklogSkippedDryRun(key) => format!("Dry run, worklog for {} not submitted", key),
            Message::WorklogsSubmitted(count, total, date) => {
                format!("{} worklog(s) created in Jira for {}, {} in total", count, date, total)
            }
            Message::DuplicateIssueKey(key) => format!(
                "Several time entries map to {}; only the last one is logged (use --aggregate sum to add them up)",
                key
            ),

            // === MONTHLY REPORT MESSAGES ===
            Message::MonthlyReportHeader(year) => format!("Monthly work report for {}", year),
            Message::FetchingMonth(month) => format!("Fetching Toggl report for {}", month),

            // === API MESSAGES ===
            Message::JiraRequestFailed(key) => format!("Failed to create Jira worklog for {}", key),

            // === PROMPTS ===
            Message::PromptDate => "Enter date yyyy-mm-dd".to_string(),
            Message::PromptConfigValue(field) => format!("Enter {}", field),
        };
        write!(f, "{}", text)
    }
}
