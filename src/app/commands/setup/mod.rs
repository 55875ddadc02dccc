//! The setup pipeline.
//!
//! A strictly sequential chain: detect tooling, collect the user's choices,
//! prepare the target directory, initialize the repository (with the template
//! graft nested inside), finalize the scaffolded files, install dependencies.
//! No step starts before its predecessor's outcome is known.

mod decision;
mod finalize;
mod repository;

use std::collections::BTreeMap;
use std::fs;

use crate::app::AppContext;
use crate::domain::{AppError, Capabilities, REQUIRED_TOOLS, StepOutcome, Workspace};
use crate::ports::{HostPort, InstallerPort, PromptPort, ToolLookup, VcsPort};

/// Execute the setup pipeline against the workspace.
///
/// Returns the process exit code once the pipeline runs to completion;
/// fatal failures (a cancelled prompt, an unreachable provider on the remote
/// path, an unusable manifest) surface as `Err`.
pub fn execute<V, H, P, I, L>(
    ctx: &AppContext<V, H, P, I, L>,
    workspace: &Workspace,
) -> Result<i32, AppError>
where
    V: VcsPort,
    H: HostPort,
    P: PromptPort,
    I: InstallerPort,
    L: ToolLookup,
{
    let capabilities = detect_features(ctx.lookup());

    let decision = decision::collect(ctx, workspace, &capabilities)?;

    // No file-system mutation happens before this point; a cancelled prompt
    // leaves no trace behind.
    prepare_workspace(workspace).into_result()?;

    repository::initialize(ctx.vcs(), ctx.host(), &decision).into_result()?;

    finalize::run(workspace, &decision).into_result()?;

    let exit_code = install(ctx.installer(), &capabilities);

    println!("✅ Project initialized at {}", workspace.root().display());
    Ok(exit_code)
}

/// Probe the fixed tool set; absence degrades the decision tree but is never
/// an error.
fn detect_features<L: ToolLookup>(lookup: &L) -> Capabilities {
    let mut available = BTreeMap::new();
    for tool in REQUIRED_TOOLS {
        let present = lookup.is_available(tool);
        if !present {
            tracing::warn!(tool, "required tool not found on PATH");
        }
        available.insert(tool.to_string(), present);
    }
    Capabilities::new(available)
}

fn prepare_workspace(workspace: &Workspace) -> StepOutcome {
    match fs::create_dir_all(workspace.root()) {
        Ok(()) => StepOutcome::Success,
        Err(e) => StepOutcome::tolerated(
            format!("create directory {}", workspace.root().display()),
            &AppError::Io(e),
        ),
    }
}

/// Run the package manager; its exit code becomes the pipeline's final
/// status. Skipped with a warning when npm was probed absent.
fn install<I: InstallerPort>(installer: &I, capabilities: &Capabilities) -> i32 {
    if !capabilities.has("npm") {
        tracing::warn!("'npm' is not installed; skipping dependency installation");
        return 0;
    }

    tracing::info!("installing dependencies");
    match installer.install() {
        Ok(code) => {
            if code != 0 {
                tracing::error!(code, "dependency installation failed");
            }
            code
        }
        Err(e) => {
            tracing::warn!(details = %e, "could not run the package manager");
            0
        }
    }
}
