use crate::domain::AppError;

/// Package-manager boundary: install dependencies into the workspace.
pub trait InstallerPort {
    /// Run the install command, streaming its output to the user.
    ///
    /// Returns the command's exit code.
    fn install(&self) -> Result<i32, AppError>;
}
