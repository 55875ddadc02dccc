use std::path::PathBuf;
use std::process::Command;

use crate::domain::{AppError, OwnerCandidate};
use crate::ports::HostPort;

/// Talks to GitHub through the gh CLI.
///
/// API queries capture stdout for parsing; repository creation inherits the
/// terminal streams and runs with the workspace as working directory.
#[derive(Debug, Clone)]
pub struct GitHubCommandAdapter {
    root: PathBuf,
}

impl GitHubCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn query(&self, endpoint: &str) -> Result<String, AppError> {
        let operation = format!("gh api {endpoint}");
        let output =
            Command::new("gh").args(["api", endpoint]).output().map_err(|e| AppError::Provider {
                operation: operation.clone(),
                details: format!("failed to execute gh: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Provider {
                operation,
                details: if stderr.is_empty() { "unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl HostPort for GitHubCommandAdapter {
    fn authenticated_user(&self) -> Result<OwnerCandidate, AppError> {
        let raw = self.query("/user")?;
        serde_json::from_str(&raw).map_err(|e| AppError::Provider {
            operation: "gh api /user".to_string(),
            details: format!("malformed response: {e}"),
        })
    }

    fn organizations(&self) -> Result<Vec<OwnerCandidate>, AppError> {
        let raw = self.query("/user/orgs")?;
        serde_json::from_str(&raw).map_err(|e| AppError::Provider {
            operation: "gh api /user/orgs".to_string(),
            details: format!("malformed response: {e}"),
        })
    }

    fn create_repository(&self, full_name: &str) -> Result<(), AppError> {
        let operation = format!("gh repo create {full_name}");
        let status = Command::new("gh")
            .args(["repo", "create", full_name, "-y"])
            .current_dir(&self.root)
            .status()
            .map_err(|e| AppError::Provider {
                operation: operation.clone(),
                details: format!("failed to execute gh: {e}"),
            })?;

        if !status.success() {
            return Err(AppError::Provider {
                operation,
                details: format!("exited with {status}"),
            });
        }

        Ok(())
    }
}
