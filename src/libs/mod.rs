//! Core library modules.
//!
//! - **Storage**: data directory, configuration and date history
//! - **Matching**: issue key extraction and per-issue aggregation
//! - **Reporting**: calendar math, monthly balance, formatting and tables
//! - **Messaging**: user-facing text and output macros
//!
//! ```rust,no_run
//! use toggl_jira_worklog::libs::{config::Config, data_storage::DataStorage, prompt::ConsolePrompter};
//!
//! let storage = DataStorage::new()?;
//! let config = Config::load(&storage, &mut ConsolePrompter)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod history;
pub mod issue_key;
pub mod messages;
pub mod prompt;
pub mod report;
pub mod view;
pub mod worklog;
