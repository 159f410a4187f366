use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::{Context, Result};
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = ".toggl-jira-worklog";

/// Location of the files the tool keeps between runs (config and history).
///
/// Everything lives in a single dot-directory under the user's home.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Result<Self> {
        let home = match OS {
            "windows" => var("USERPROFILE").or_else(|_| var("HOME")),
            _ => var("HOME"),
        }
        .map_err(|_| msg_error_anyhow!(Message::HomeDirNotFound))?;

        Ok(Self::with_base(Path::new(&home).join(APP_DIR_NAME)))
    }

    /// Uses `base_path` as is, without appending the application directory.
    pub fn with_base(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of `file_name`, creating the base directory if needed.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)
                .with_context(|| Message::ConfigDirCreateFailed(self.base_path.display().to_string()))?;
        }
        Ok(self.base_path.join(file_name))
    }
}
