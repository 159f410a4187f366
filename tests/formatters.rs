#[cfg(test)]
mod tests {
    use toggl_jira_worklog::libs::formatter::{format_balance, format_hours_minutes};
    use toggl_jira_worklog::libs::messages::Message;

    #[test]
    fn test_format_hours_minutes() {
        assert_eq!(format_hours_minutes(0), "0h 00m");
        assert_eq!(format_hours_minutes(59), "0h 00m");
        assert_eq!(format_hours_minutes(60), "0h 01m");
        assert_eq!(format_hours_minutes(3600), "1h 00m");
        assert_eq!(format_hours_minutes(5 * 3600 + 7 * 60 + 30), "5h 07m");
        assert_eq!(format_hours_minutes(604_800), "168h 00m");
    }

    #[test]
    fn test_format_hours_minutes_negative() {
        assert_eq!(format_hours_minutes(-90 * 60), "-1h 30m");
        assert_eq!(format_hours_minutes(-30), "-0h 00m");
    }

    #[test]
    fn test_format_balance_is_signed() {
        assert_eq!(format_balance(0), "+0h 00m");
        assert_eq!(format_balance(2 * 3600 + 15 * 60), "+2h 15m");
        assert_eq!(format_balance(-(8 * 3600 + 5 * 60)), "-8h 05m");
        assert_eq!(format_balance(-1800), "-0h 30m");
    }

    #[test]
    fn test_message_display() {
        assert_eq!(Message::SubmittingWorklog(3600, "AB-1".to_string()).to_string(), "3600 sec. -> AB-1");
        assert_eq!(Message::HistoryHeader.to_string(), "7 days history:");
        assert_eq!(
            Message::WorklogsSubmitted(2, "1h 10m".to_string(), "2025-03-14".to_string()).to_string(),
            "2 worklog(s) created in Jira for 2025-03-14, 1h 10m in total"
        );
        assert_eq!(Message::MonthlyReportHeader(2025).to_string(), "Monthly work report for 2025");
        assert_eq!(
            Message::ConfigValueMissing("JiraUrl (https://company.atlassian.net)".to_string()).to_string(),
            "JiraUrl (https://company.atlassian.net) is not found in config, please enter the value"
        );
    }
}
