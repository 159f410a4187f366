use super::{read_body, ApiError};
use crate::libs::config::Config;
use chrono::NaiveDate;
use reqwest::{Client, Request};
use serde::Deserialize;

const SERVICE: &str = "Toggl";
pub const SUMMARY_URL: &str = "https://api.track.toggl.com/reports/api/v2/summary";
/// Password paired with the API token in basic auth.
const API_TOKEN_PASSWORD: &str = "api_token";

#[derive(Deserialize, Debug)]
struct SummaryResponse {
    #[serde(default)]
    data: Vec<SummaryGroup>,
}

#[derive(Deserialize, Debug)]
struct SummaryGroup {
    #[serde(default)]
    items: Vec<SummaryItem>,
}

#[derive(Deserialize, Debug)]
struct SummaryItem {
    title: SummaryItemTitle,
    /// Tracked duration in milliseconds.
    time: u64,
}

#[derive(Deserialize, Debug)]
struct SummaryItemTitle {
    #[serde(default)]
    time_entry: Option<String>,
}

/// A Toggl time entry aggregated by title, with its duration rounded to whole minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub title: String,
    pub seconds: u64,
}

/// Rounds a millisecond duration to the nearest minute and returns it in seconds.
///
/// Half a minute rounds up, so 29 999 ms becomes 0 s and 30 000 ms becomes 60 s.
/// 1 500 ms is 0 s and 90 000 ms (a minute and a half) is 120 s, not 90 s.
pub fn round_to_minute(milliseconds: u64) -> u64 {
    (milliseconds as f64 / 1000.0 / 60.0).round() as u64 * 60
}

/// Parses a summary report body into time entries, longest first.
///
/// Items of every group in `data` are flattened. Entries with the same
/// duration keep their order from the response.
pub fn parse_summary(body: &str) -> Result<Vec<TimeEntry>, serde_json::Error> {
    let response: SummaryResponse = serde_json::from_str(body)?;

    let mut entries: Vec<TimeEntry> = response
        .data
        .into_iter()
        .flat_map(|group| group.items)
        .map(|item| TimeEntry {
            title: item.title.time_entry.unwrap_or_default(),
            seconds: round_to_minute(item.time),
        })
        .collect();
    entries.sort_by(|a, b| b.seconds.cmp(&a.seconds));

    Ok(entries)
}

#[derive(Debug)]
pub struct Toggl {
    client: Client,
    summary_url: String,
    token: String,
    user_agent: String,
    workspace_id: String,
}

impl Toggl {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            summary_url: SUMMARY_URL.to_string(),
            token: config.toggl_token.clone(),
            user_agent: config.toggl_username.clone(),
            workspace_id: config.toggl_workspace_id.clone(),
        }
    }

    /// Points the client at another summary endpoint.
    pub fn with_summary_url(mut self, url: &str) -> Self {
        self.summary_url = url.to_string();
        self
    }

    /// Builds the summary report request for `since..=until`.
    pub fn summary_request(&self, since: NaiveDate, until: NaiveDate) -> Result<Request, ApiError> {
        let since = since.format("%Y-%m-%d").to_string();
        let until = until.format("%Y-%m-%d").to_string();

        self.client
            .get(&self.summary_url)
            .basic_auth(&self.token, Some(API_TOKEN_PASSWORD))
            .query(&[
                ("user_agent", self.user_agent.as_str()),
                ("workspace_id", self.workspace_id.as_str()),
                ("since", since.as_str()),
                ("until", until.as_str()),
            ])
            .build()
            .map_err(ApiError::transport(SERVICE))
    }

    /// Time entries tracked on a single day.
    pub async fn report(&self, date: NaiveDate) -> Result<Vec<TimeEntry>, ApiError> {
        self.report_range(date, date).await
    }

    /// Time entries tracked between `since` and `until`, both inclusive.
    pub async fn report_range(&self, since: NaiveDate, until: NaiveDate) -> Result<Vec<TimeEntry>, ApiError> {
        let request = self.summary_request(since, until)?;
        tracing::debug!(url = %request.url(), %since, %until, "requesting Toggl summary");

        let response = self.client.execute(request).await.map_err(ApiError::transport(SERVICE))?;
        let body = read_body(SERVICE, response, |status| status.is_success()).await?;

        parse_summary(&body).map_err(|source| ApiError::InvalidBody { service: SERVICE, source })
    }
}
