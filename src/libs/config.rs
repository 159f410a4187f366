//! Credentials for both services.
//!
//! The configuration is a flat JSON object stored in
//! `~/.toggl-jira-worklog/config.json`. Key names match the files written by
//! earlier releases, so existing installations keep working:
//!
//! ```json
//! {
//!   "ToggleToken": "...",
//!   "ToggleUserName": "me@example.com",
//!   "ToggleWorkSpaceId": "123456",
//!   "JiraUsername": "me",
//!   "JiraPassword": "...",
//!   "JiraUrl": "https://company.atlassian.net"
//! }
//! ```
//!
//! ## Loading
//!
//! [`Config::load`] reads the file (a missing or empty file counts as `{}`),
//! prompts for every blank field and writes the completed configuration
//! back. A complete file is left untouched, so after the first run the tool
//! never asks again. Malformed JSON is reported and not repaired.

use super::data_storage::DataStorage;
use super::prompt::Prompter;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// One configurable value, in the order the user is asked for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    TogglToken,
    TogglUserName,
    TogglWorkspaceId,
    JiraUrl,
    JiraUsername,
    JiraPassword,
}

impl ConfigField {
    pub const ALL: [ConfigField; 6] = [
        ConfigField::TogglToken,
        ConfigField::TogglUserName,
        ConfigField::TogglWorkspaceId,
        ConfigField::JiraUrl,
        ConfigField::JiraUsername,
        ConfigField::JiraPassword,
    ];

    /// Key used in the JSON file.
    pub fn key(&self) -> &'static str {
        match self {
            ConfigField::TogglToken => "ToggleToken",
            ConfigField::TogglUserName => "ToggleUserName",
            ConfigField::TogglWorkspaceId => "ToggleWorkSpaceId",
            ConfigField::JiraUrl => "JiraUrl",
            ConfigField::JiraUsername => "JiraUsername",
            ConfigField::JiraPassword => "JiraPassword",
        }
    }

    /// Label shown when prompting.
    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::JiraUrl => "JiraUrl (https://company.atlassian.net)",
            field => field.key(),
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, ConfigField::JiraPassword)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Toggl API token, sent as the basic-auth user name.
    #[serde(rename = "ToggleToken", default)]
    pub toggl_token: String,

    /// Sent to the reports API as `user_agent`.
    #[serde(rename = "ToggleUserName", default)]
    pub toggl_username: String,

    #[serde(rename = "ToggleWorkSpaceId", default)]
    pub toggl_workspace_id: String,

    #[serde(rename = "JiraUsername", default)]
    pub jira_username: String,

    #[serde(rename = "JiraPassword", default)]
    pub jira_password: String,

    /// Base URL of the Jira instance, e.g. `https://company.atlassian.net`.
    #[serde(rename = "JiraUrl", default)]
    pub jira_url: String,
}

impl Config {
    /// Loads the configuration, prompts for blank fields and persists the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory cannot be created, the file
    /// cannot be read or written, its content is not valid JSON, or a prompt fails.
    pub fn load(storage: &DataStorage, prompter: &mut dyn Prompter) -> Result<Config> {
        let path = storage.get_path(CONFIG_FILE_NAME)?;
        let existed = path.exists();

        let mut config = Self::read_from(&path)?;
        if existed && config.is_complete() {
            return Ok(config);
        }

        let filled = config.fill_missing(prompter)?;
        config.save_to(&path)?;
        tracing::debug!(filled, path = %path.display(), "configuration completed");
        msg_debug!(Message::ConfigSaved);

        Ok(config)
    }

    /// Reads the configuration without prompting. A missing or empty file yields
    /// an empty configuration.
    pub fn read(storage: &DataStorage) -> Result<Config> {
        Self::read_from(&storage.get_path(CONFIG_FILE_NAME)?)
    }

    fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).with_context(|| Message::ConfigReadFailed(path.display().to_string()))?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = serde_json::from_str(&content).with_context(|| Message::ConfigParseFailed(path.display().to_string()))?;
        Ok(config)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| Message::ConfigWriteFailed(path.display().to_string()))?;
        serde_json::to_writer_pretty(&file, &self).with_context(|| Message::ConfigWriteFailed(path.display().to_string()))?;
        Ok(())
    }

    pub fn get(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::TogglToken => &self.toggl_token,
            ConfigField::TogglUserName => &self.toggl_username,
            ConfigField::TogglWorkspaceId => &self.toggl_workspace_id,
            ConfigField::JiraUrl => &self.jira_url,
            ConfigField::JiraUsername => &self.jira_username,
            ConfigField::JiraPassword => &self.jira_password,
        }
    }

    fn get_mut(&mut self, field: ConfigField) -> &mut String {
        match field {
            ConfigField::TogglToken => &mut self.toggl_token,
            ConfigField::TogglUserName => &mut self.toggl_username,
            ConfigField::TogglWorkspaceId => &mut self.toggl_workspace_id,
            ConfigField::JiraUrl => &mut self.jira_url,
            ConfigField::JiraUsername => &mut self.jira_username,
            ConfigField::JiraPassword => &mut self.jira_password,
        }
    }

    /// Fields that are still blank, in prompt order.
    pub fn missing_fields(&self) -> Vec<ConfigField> {
        ConfigField::ALL.into_iter().filter(|field| self.get(*field).trim().is_empty()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Prompts for every blank field and returns how many were filled in.
    ///
    /// A blank answer is asked again.
    pub fn fill_missing(&mut self, prompter: &mut dyn Prompter) -> Result<usize> {
        let missing = self.missing_fields();
        for field in &missing {
            msg_print!(Message::ConfigValueMissing(field.label().to_string()));
            let value = loop {
                let answer = prompter.ask(&Message::PromptConfigValue(field.key().to_string()).to_string(), field.is_secret())?;
                if !answer.trim().is_empty() {
                    break answer.trim().to_string();
                }
            };
            *self.get_mut(*field) = value;
        }
        Ok(missing.len())
    }
}
