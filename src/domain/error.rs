use std::io;

use thiserror::Error;

/// Library-wide error type for graft operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No target directory argument was given on the command line.
    #[error("no directory name was provided")]
    MissingDirectory,

    /// The user aborted an interactive prompt.
    #[error("Setup cancelled")]
    Cancelled,

    /// Prompt rendering or input reading failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The hosting provider was unreachable or returned a malformed response.
    #[error("GitHub provider error during '{operation}': {details}")]
    Provider { operation: String, details: String },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    Git { command: String, details: String },

    /// External tool invocation failed.
    #[error("External tool '{tool}' failed: {details}")]
    ExternalTool { tool: String, details: String },

    /// Malformed package.json manifest.
    #[error("Malformed package.json: {0}")]
    Manifest(String),
}
