use std::path::PathBuf;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::VcsPort;

/// Runs the git CLI with the workspace as working directory.
///
/// Standard streams are inherited so fetch/checkout progress reaches the
/// invoking terminal directly.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn run(&self, args: &[&str]) -> Result<(), AppError> {
        let status = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .status()
            .map_err(|e| AppError::Git {
                command: format!("git {}", args.join(" ")),
                details: e.to_string(),
            })?;

        if !status.success() {
            return Err(AppError::Git {
                command: format!("git {}", args.join(" ")),
                details: format!("exited with {status}"),
            });
        }

        Ok(())
    }
}

impl VcsPort for GitCommandAdapter {
    fn init(&self) -> Result<(), AppError> {
        self.run(&["init"])
    }

    fn remote_add(&self, name: &str, url: &str) -> Result<(), AppError> {
        self.run(&["remote", "add", name, url])
    }

    fn remote_remove(&self, name: &str) -> Result<(), AppError> {
        self.run(&["remote", "remove", name])
    }

    fn fetch_all(&self) -> Result<(), AppError> {
        self.run(&["fetch", "--all"])
    }

    fn checkout_ref(&self, reference: &str, pathspec: &str) -> Result<(), AppError> {
        self.run(&["checkout", reference, pathspec])
    }
}
