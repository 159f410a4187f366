#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDirCreateFailed(String), // path
    ConfigReadFailed(String),      // path
    ConfigParseFailed(String),     // path
    ConfigWriteFailed(String),     // path
    ConfigValueMissing(String),    // field name
    HomeDirNotFound,

    // === HISTORY MESSAGES ===
    HistoryHeader,
    HistoryEmpty,
    HistoryReadFailed(String),  // path
    HistoryWriteFailed(String), // path

    // === DAILY WORKLOG MESSAGES ===
    DailyGreeting,
    EntriesFetched(usize, String),     // count, date
    NoEntriesForDate(String),          // date
    SubmittingWorklog(u64, String),    // seconds, issue key
    WorklogSubmitted(String),          // issue key
    WorklogSkippedDryRun(String),      // issue key
    WorklogsSubmitted(usize, String, String), // count, total time, date
    DuplicateIssueKey(String),         // issue key

    // === MONTHLY REPORT MESSAGES ===
    MonthlyReportHeader(i32), // year
    FetchingMonth(String),    // month name

    // === API MESSAGES ===
    JiraRequestFailed(String), // issue key

    // === PROMPTS ===
    PromptDate,
    PromptConfigValue(String), // field name
}
