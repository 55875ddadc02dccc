use crate::domain::AppError;

/// Version-control operations.
///
/// Each operation runs with the workspace as working directory and passes the
/// tool's standard streams through to the invoking terminal.
pub trait VcsPort {
    /// Initialize a fresh repository in the workspace.
    fn init(&self) -> Result<(), AppError>;

    /// Add a named remote.
    fn remote_add(&self, name: &str, url: &str) -> Result<(), AppError>;

    /// Remove a named remote.
    fn remote_remove(&self, name: &str) -> Result<(), AppError>;

    /// Fetch all refs from all remotes.
    fn fetch_all(&self) -> Result<(), AppError>;

    /// Check out a pathspec from a remote reference into the working tree.
    fn checkout_ref(&self, reference: &str, pathspec: &str) -> Result<(), AppError>;
}
