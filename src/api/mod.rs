//! API clients for the two external services.
//!
//! - **Toggl**: reads the summary report for a date range
//! - **Jira**: creates worklogs on issues
//!
//! Both clients authenticate with HTTP basic auth on every request and make
//! exactly one attempt per call. Any transport failure, unexpected status or
//! unreadable body is returned as an [`ApiError`] and ends the run.
//!
//! ```rust,no_run
//! use toggl_jira_worklog::api::{Jira, Toggl};
//! use toggl_jira_worklog::libs::config::Config;
//! use chrono::NaiveDate;
//!
//! # async fn run(config: &Config) -> anyhow::Result<()> {
//! let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//! let entries = Toggl::new(config).report(date).await?;
//! Jira::new(config).log_work("AB-1", entries[0].seconds, date).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::{Response, StatusCode};
use thiserror::Error;

pub mod jira;
pub mod toggl;

pub use jira::Jira;
pub use toggl::{TimeEntry, Toggl};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} responded with status code: {status}, body: {body}")]
    UnexpectedStatus {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("{service} response is not valid JSON: {source}")]
    InvalidBody {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub(crate) fn transport(service: &'static str) -> impl FnOnce(reqwest::Error) -> ApiError {
        move |source| ApiError::Transport { service, source }
    }
}

/// Reads the whole response body, failing unless the status is accepted.
///
/// The body is included in the error so the user sees what the service
/// complained about.
pub(crate) async fn read_body(
    service: &'static str,
    response: Response,
    accepted: impl Fn(StatusCode) -> bool,
) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(ApiError::transport(service))?;
    tracing::debug!(service, %status, "response received");

    if !accepted(status) {
        return Err(ApiError::UnexpectedStatus { service, status, body });
    }
    Ok(body)
}
