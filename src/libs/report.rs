//! Monthly balance of hours worked against hours required.

use super::calendar::MonthPeriod;
use crate::api::TimeEntry;

/// One month of the report. All values are in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRow {
    pub month: String,
    pub required: i64,
    pub worked: i64,
}

impl MonthlyRow {
    /// Builds the row for `period` from the entries tracked during it.
    pub fn new(period: &MonthPeriod, entries: &[TimeEntry]) -> Self {
        Self {
            month: period.name(),
            required: period.required_seconds(),
            worked: entries.iter().map(|entry| entry.seconds as i64).sum(),
        }
    }

    pub fn balance(&self) -> i64 {
        self.worked - self.required
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    pub year: i32,
    pub rows: Vec<MonthlyRow>,
}

impl MonthlyReport {
    pub fn new(year: i32) -> Self {
        Self { year, rows: Vec::new() }
    }

    pub fn push(&mut self, row: MonthlyRow) {
        self.rows.push(row);
    }

    pub fn total_required(&self) -> i64 {
        self.rows.iter().map(|row| row.required).sum()
    }

    pub fn total_worked(&self) -> i64 {
        self.rows.iter().map(|row| row.worked).sum()
    }

    pub fn total_balance(&self) -> i64 {
        self.total_worked() - self.total_required()
    }
}
