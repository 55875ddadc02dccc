use std::io;
use std::path::{Path, PathBuf};

use super::AppError;

/// The absolute target directory, resolved once at start.
///
/// Every external command and file operation after resolution is scoped under
/// this path; nothing acts on the invoker's own working directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    dir_name: String,
}

impl Workspace {
    /// Resolve the target directory argument against the current directory.
    pub fn resolve(directory: &str) -> Result<Self, AppError> {
        let root = std::path::absolute(directory)?;
        Self::at(root)
    }

    /// Use an already-resolved absolute path as the workspace root.
    pub fn at(root: PathBuf) -> Result<Self, AppError> {
        let dir_name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("cannot derive a project name from '{}'", root.display()),
                )
            })?;
        Ok(Self { root, dir_name })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Base name of the target directory; the default repository name.
    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }
}
