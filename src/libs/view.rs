use super::formatter::{format_balance, format_hours_minutes};
use super::report::MonthlyReport;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Monthly report table: one row per month and a `Total` row.
    pub fn monthly_table(report: &MonthlyReport) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.set_titles(row!["Month", "Required", "Worked", "Balance"]);

        for month in &report.rows {
            table.add_row(row![
                month.month,
                r->format_hours_minutes(month.required),
                r->format_hours_minutes(month.worked),
                r->format_balance(month.balance())
            ]);
        }
        table.add_row(row![
            b->"Total",
            br->format_hours_minutes(report.total_required()),
            br->format_hours_minutes(report.total_worked()),
            br->format_balance(report.total_balance())
        ]);

        table
    }

    pub fn monthly_report(report: &MonthlyReport) {
        Self::monthly_table(report).printstd();
    }
}
