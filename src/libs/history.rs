//! Rolling list of the dates the user submitted worklogs for.
//!
//! The file is plain text with one `yyyy-mm-dd` per line, joined by `\n`
//! without a trailing newline. Only the last [`HISTORY_LIMIT`] dates are kept.
//! The list is only shown to the user; nothing else reads it.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub const HISTORY_FILE_NAME: &str = "history";
pub const HISTORY_LIMIT: usize = 7;

#[derive(Debug, Clone)]
pub struct History {
    path: PathBuf,
    lines: Vec<String>,
}

impl History {
    /// Loads the history. A missing file is an empty history.
    pub fn load(storage: &DataStorage) -> Result<Self> {
        let path = storage.get_path(HISTORY_FILE_NAME)?;
        let lines = if path.exists() {
            fs::read_to_string(&path)
                .with_context(|| Message::HistoryReadFailed(path.display().to_string()))?
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };

        Ok(Self { path, lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn print(&self) {
        msg_print!(Message::HistoryHeader);
        if self.lines.is_empty() {
            msg_print!(Message::HistoryEmpty);
        }
        for line in &self.lines {
            msg_print!(line);
        }
    }

    /// Adds `date` as the most recent entry, drops everything beyond the last
    /// [`HISTORY_LIMIT`] dates and rewrites the file.
    pub fn append(&mut self, date: NaiveDate) -> Result<()> {
        self.lines.push(date.format("%Y-%m-%d").to_string());
        let excess = self.lines.len().saturating_sub(HISTORY_LIMIT);
        self.lines.drain(..excess);

        fs::write(&self.path, self.lines.join("\n")).with_context(|| Message::HistoryWriteFailed(self.path.display().to_string()))?;
        Ok(())
    }
}
