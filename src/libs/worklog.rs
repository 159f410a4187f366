//! Grouping of time entries into one worklog per issue.

use super::issue_key::{self, IssueKeyError};
use crate::api::TimeEntry;
use clap::ValueEnum;
use std::collections::BTreeMap;

/// What to do when several time entries resolve to the same issue key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AggregationPolicy {
    /// Keep only the entry processed last (entries are processed longest first).
    #[default]
    Last,
    /// Add the durations up.
    Sum,
}

/// Seconds to log per issue key for one date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueWorklogs {
    seconds: BTreeMap<String, u64>,
    collisions: Vec<String>,
}

impl IssueWorklogs {
    /// Extracts the issue key of every entry and groups the durations.
    ///
    /// Fails on the first title without an issue key, before anything is
    /// grouped, so a bad entry never leads to a partial submission.
    pub fn aggregate(entries: &[TimeEntry], policy: AggregationPolicy) -> Result<Self, IssueKeyError> {
        let keyed = entries
            .iter()
            .map(|entry| issue_key::extract(&entry.title).map(|key| (key, entry.seconds)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut worklogs = Self::default();
        for (key, seconds) in keyed {
            match worklogs.seconds.get_mut(key) {
                Some(total) => {
                    if !worklogs.collisions.iter().any(|collision| collision == key) {
                        worklogs.collisions.push(key.to_string());
                    }
                    match policy {
                        AggregationPolicy::Last => *total = seconds,
                        AggregationPolicy::Sum => *total += seconds,
                    }
                }
                None => {
                    worklogs.seconds.insert(key.to_string(), seconds);
                }
            }
        }

        Ok(worklogs)
    }

    pub fn get(&self, issue_key: &str) -> Option<u64> {
        self.seconds.get(issue_key).copied()
    }

    /// Issue keys with their seconds, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.seconds.iter().map(|(key, seconds)| (key.as_str(), *seconds))
    }

    /// Issue keys that more than one entry resolved to.
    pub fn collisions(&self) -> &[String] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.seconds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
    }

    pub fn total_seconds(&self) -> u64 {
        self.seconds.values().sum()
    }
}
