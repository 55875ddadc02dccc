//! graft: bootstrap a new project workspace from the clean-starter template.
//!
//! A one-shot setup orchestrator. It detects available tooling, collects the
//! user's choices, initializes or creates a repository, grafts the template
//! onto the workspace, rewrites placeholder files, and installs dependencies.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{
    DialoguerPrompt, GitCommandAdapter, GitHubCommandAdapter, NpmCommandAdapter, WhichToolLookup,
};
use app::{AppContext, commands::setup};
use domain::Workspace;

pub use domain::AppError;

/// Run the full setup pipeline against the given target directory.
///
/// Returns the process exit code to use once the pipeline reaches its end;
/// fatal failures surface as `Err` instead.
pub fn setup(directory: &str) -> Result<i32, AppError> {
    let workspace = Workspace::resolve(directory)?;
    let ctx = AppContext::new(
        GitCommandAdapter::new(workspace.root().to_path_buf()),
        GitHubCommandAdapter::new(workspace.root().to_path_buf()),
        DialoguerPrompt::new(),
        NpmCommandAdapter::new(workspace.root().to_path_buf()),
        WhichToolLookup,
    );

    setup::execute(&ctx, &workspace)
}
