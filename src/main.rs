use toggl_jira_worklog::commands::Cli;
use toggl_jira_worklog::libs::messages::macros::is_debug_mode;
use toggl_jira_worklog::msg_error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if is_debug_mode() {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    if let Err(error) = Cli::menu().await {
        msg_error!(format!("{:#}", error));
        std::process::exit(1);
    }
}
