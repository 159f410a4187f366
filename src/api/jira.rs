use super::{read_body, ApiError};
use crate::libs::config::Config;
use chrono::NaiveDate;
use reqwest::{Client, Request, StatusCode};
use serde::Serialize;

const SERVICE: &str = "Jira";
const ISSUE_URL: &str = "rest/api/latest/issue";

/// Body of `POST /rest/api/latest/issue/{key}/worklog`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorklogRequest {
    pub started: String,
    pub time_spent_seconds: u64,
}

impl WorklogRequest {
    /// Worklog starting at midnight UTC of `date`.
    pub fn new(date: NaiveDate, seconds: u64) -> Self {
        Self {
            started: format!("{}T00:00:00.000+0000", date.format("%Y-%m-%d")),
            time_spent_seconds: seconds,
        }
    }
}

#[derive(Debug)]
pub struct Jira {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl Jira {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.jira_url.trim_end_matches('/').to_string(),
            username: config.jira_username.clone(),
            password: config.jira_password.clone(),
        }
    }

    pub fn worklog_url(&self, issue_key: &str) -> String {
        format!("{}/{}/{}/worklog", self.base_url, ISSUE_URL, issue_key)
    }

    /// Builds the worklog request. Watchers are not notified.
    pub fn worklog_request(&self, issue_key: &str, seconds: u64, date: NaiveDate) -> Result<Request, ApiError> {
        self.client
            .post(self.worklog_url(issue_key))
            .basic_auth(&self.username, Some(&self.password))
            .query(&[("notifyUsers", "0")])
            .json(&WorklogRequest::new(date, seconds))
            .build()
            .map_err(ApiError::transport(SERVICE))
    }

    /// Records `seconds` of work on `issue_key` for `date`.
    ///
    /// Only `200 OK` and `201 Created` count as success; anything else is
    /// returned as [`ApiError::UnexpectedStatus`] with the response body.
    pub async fn log_work(&self, issue_key: &str, seconds: u64, date: NaiveDate) -> Result<(), ApiError> {
        let request = self.worklog_request(issue_key, seconds, date)?;
        tracing::debug!(url = %request.url(), issue_key, seconds, "creating Jira worklog");

        let response = self.client.execute(request).await.map_err(ApiError::transport(SERVICE))?;
        read_body(SERVICE, response, |status| matches!(status, StatusCode::OK | StatusCode::CREATED)).await?;

        Ok(())
    }
}
