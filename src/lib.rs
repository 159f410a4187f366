//! # toggl-jira-worklog
//!
//! Copies a day's Toggl time entries into Jira worklogs and reports monthly
//! hours worked against hours required.
//!
//! ## Features
//!
//! - **Daily worklogs**: every Toggl entry titled `AB-123 ...` becomes a worklog on `AB-123`
//! - **Monthly report**: required hours (8h per weekday) vs tracked hours, month by month
//! - **Zero setup**: missing credentials are asked for once and remembered
//!
//! ## Usage
//!
//! ```rust,no_run
//! use toggl_jira_worklog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
