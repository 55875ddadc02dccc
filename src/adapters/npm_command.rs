use std::path::PathBuf;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::InstallerPort;

/// Runs `npm install` in the workspace, streaming output to the terminal.
#[derive(Debug, Clone)]
pub struct NpmCommandAdapter {
    root: PathBuf,
}

impl NpmCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl InstallerPort for NpmCommandAdapter {
    fn install(&self) -> Result<i32, AppError> {
        let status = Command::new("npm")
            .arg("install")
            .current_dir(&self.root)
            .status()
            .map_err(|e| AppError::ExternalTool {
                tool: "npm".to_string(),
                details: format!("failed to execute npm install: {e}"),
            })?;

        Ok(status.code().unwrap_or(1))
    }
}
