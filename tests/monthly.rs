#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use toggl_jira_worklog::api::TimeEntry;
    use toggl_jira_worklog::libs::calendar::{
        count_weekdays, last_day_of_month, months_to_date, parse_date, report_year, DateError, MonthPeriod,
    };
    use toggl_jira_worklog::libs::report::{MonthlyReport, MonthlyRow};
    use toggl_jira_worklog::libs::view::View;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_count_weekdays_full_months() {
        assert_eq!(count_weekdays(date(2025, 3, 1), date(2025, 3, 31)), 21);
        assert_eq!(count_weekdays(date(2025, 2, 1), date(2025, 2, 28)), 20);
        assert_eq!(count_weekdays(date(2024, 2, 1), date(2024, 2, 29)), 21);
        assert_eq!(count_weekdays(date(2025, 1, 1), date(2025, 1, 31)), 23);
    }

    #[test]
    fn test_count_weekdays_edges() {
        // Saturday and Sunday only
        assert_eq!(count_weekdays(date(2025, 3, 1), date(2025, 3, 2)), 0);
        // single Monday, both ends inclusive
        assert_eq!(count_weekdays(date(2025, 3, 3), date(2025, 3, 3)), 1);
        assert_eq!(count_weekdays(date(2025, 3, 1), date(2025, 3, 14)), 10);
        assert_eq!(count_weekdays(date(2025, 3, 10), date(2025, 3, 9)), 0);
    }

    #[test]
    fn test_required_seconds_for_21_weekdays() {
        let march = MonthPeriod {
            start: date(2025, 3, 1),
            end: date(2025, 3, 31),
        };
        assert_eq!(march.weekdays(), 21);
        assert_eq!(march.required_seconds(), 604_800);
        assert_eq!(march.name(), "Mar");
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2024, 2), Some(date(2024, 2, 29)));
        assert_eq!(last_day_of_month(2025, 2), Some(date(2025, 2, 28)));
        assert_eq!(last_day_of_month(2025, 12), Some(date(2025, 12, 31)));
        assert_eq!(last_day_of_month(2025, 13), None);
    }

    #[test]
    fn test_months_to_date_ends_today() {
        let periods = months_to_date(date(2025, 3, 14));

        assert_eq!(periods.len(), 3);
        assert_eq!(periods[0], MonthPeriod { start: date(2025, 1, 1), end: date(2025, 1, 31) });
        assert_eq!(periods[1], MonthPeriod { start: date(2025, 2, 1), end: date(2025, 2, 28) });
        assert_eq!(periods[2], MonthPeriod { start: date(2025, 3, 1), end: date(2025, 3, 14) });
    }

    #[test]
    fn test_january_first_reports_previous_year() {
        let today = date(2026, 1, 1);
        assert_eq!(report_year(today), 2025);

        let periods = months_to_date(today);
        assert_eq!(periods.len(), 12);
        assert_eq!(periods[0].start, date(2025, 1, 1));
        assert_eq!(periods[11], MonthPeriod { start: date(2025, 12, 1), end: date(2025, 12, 31) });

        let weekdays: u32 = periods.iter().map(|p| p.weekdays()).sum();
        assert_eq!(weekdays, 261);
    }

    #[test]
    fn test_january_second_reports_current_year() {
        let today = date(2026, 1, 2);
        assert_eq!(report_year(today), 2026);
        assert_eq!(months_to_date(today), vec![MonthPeriod { start: date(2026, 1, 1), end: today }]);
    }

    #[test]
    fn test_monthly_row_balance() {
        let march = MonthPeriod {
            start: date(2025, 3, 1),
            end: date(2025, 3, 31),
        };
        let entries = vec![
            TimeEntry { title: "AB-1".to_string(), seconds: 300_000 },
            TimeEntry { title: "AB-2".to_string(), seconds: 310_000 },
        ];

        let row = MonthlyRow::new(&march, &entries);
        assert_eq!(row.month, "Mar");
        assert_eq!(row.required, 604_800);
        assert_eq!(row.worked, 610_000);
        assert_eq!(row.balance(), 5_200);
    }

    #[test]
    fn test_monthly_report_totals_and_table() {
        let mut report = MonthlyReport::new(2025);
        report.push(MonthlyRow { month: "Jan".to_string(), required: 662_400, worked: 640_000 });
        report.push(MonthlyRow { month: "Feb".to_string(), required: 576_000, worked: 600_000 });

        assert_eq!(report.total_required(), 1_238_400);
        assert_eq!(report.total_worked(), 1_240_000);
        assert_eq!(report.total_balance(), 1_600);

        let table = View::monthly_table(&report);
        assert_eq!(table.len(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("Month"));
        assert!(rendered.contains("184h 00m"));
        assert!(rendered.contains("-6h 13m"));
        assert!(rendered.contains("+6h 40m"));
        assert!(rendered.contains("Total"));
        assert!(rendered.contains("+0h 26m"));
    }

    #[test]
    fn test_parse_date() {
        let today = date(2025, 3, 14);
        assert_eq!(parse_date("2025-03-10", today), Ok(date(2025, 3, 10)));
        assert_eq!(parse_date(" 2025-03-10\n", today), Ok(date(2025, 3, 10)));
        assert_eq!(parse_date("today", today), Ok(today));
        assert_eq!(parse_date("Yesterday", today), Ok(date(2025, 3, 13)));
    }

    #[test]
    fn test_parse_date_rejects_invalid_input() {
        let today = date(2025, 3, 14);
        for input in ["", "tomorrow", "14.03.2025", "2025-02-30", "2025-13-01"] {
            assert_eq!(parse_date(input, today), Err(DateError::Invalid(input.trim().to_string())));
        }
    }
}
