//! Date helpers for the daily prompt and the monthly report.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use thiserror::Error;

/// Hours required on each weekday.
pub const WORKDAY_HOURS: i64 = 8;

pub const WORKDAY_SECONDS: i64 = WORKDAY_HOURS * 3600;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date \"{0}\", expected yyyy-mm-dd")]
    Invalid(String),
}

/// Parses user input into a date.
///
/// Accepts `yyyy-mm-dd` as well as the keywords `today` and `yesterday`
/// (case-insensitive), resolved against `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => today.pred_opt().ok_or_else(|| DateError::Invalid(input.to_string())),
        _ => NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| DateError::Invalid(input.to_string())),
    }
}

/// Inclusive date range covered by one row of the monthly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthPeriod {
    /// Abbreviated month name, e.g. `Jan`.
    pub fn name(&self) -> String {
        self.start.format("%b").to_string()
    }

    pub fn weekdays(&self) -> u32 {
        count_weekdays(self.start, self.end)
    }

    pub fn required_seconds(&self) -> i64 {
        self.weekdays() as i64 * WORKDAY_SECONDS
    }
}

/// Number of Monday..Friday days between `start` and `end`, both inclusive.
pub fn count_weekdays(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
}

/// Year covered by a report generated on `today`.
///
/// On January 1st the current year has no finished day yet, so the previous
/// year is reported instead.
pub fn report_year(today: NaiveDate) -> i32 {
    if today.month() == 1 && today.day() == 1 {
        today.year() - 1
    } else {
        today.year()
    }
}

/// Month periods from January up to the month of `today`.
///
/// Past months span the whole month; the current one ends at `today`. On
/// January 1st the twelve months of the previous year are returned.
pub fn months_to_date(today: NaiveDate) -> Vec<MonthPeriod> {
    let year = report_year(today);
    let last_month = if year == today.year() { today.month() } else { 12 };

    (1..=last_month)
        .filter_map(|month| {
            let start = NaiveDate::from_ymd_opt(year, month, 1)?;
            let end = match year == today.year() && month == today.month() {
                true => today,
                false => last_day_of_month(year, month)?,
            };
            Some(MonthPeriod { start, end })
        })
        .collect()
}
