//! Monthly mode: hours worked vs hours required for every month of the year so far.

use crate::{
    api::Toggl,
    libs::{
        calendar::{months_to_date, report_year},
        config::Config,
        messages::Message,
        report::{MonthlyReport, MonthlyRow},
        view::View,
    },
    msg_debug, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;

/// Fetches one Toggl summary per month up to `today` and prints the balance table.
pub async fn cmd(config: &Config, today: NaiveDate) -> Result<()> {
    let toggl = Toggl::new(config);
    let mut report = MonthlyReport::new(report_year(today));

    msg_print!(Message::MonthlyReportHeader(report.year), true);

    for period in months_to_date(today) {
        msg_debug!(Message::FetchingMonth(period.name()));
        let entries = toggl.report_range(period.start, period.end).await?;
        report.push(MonthlyRow::new(&period, &entries));
    }

    View::monthly_report(&report);
    Ok(())
}
