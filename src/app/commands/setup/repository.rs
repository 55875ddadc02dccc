//! Repository initialization: local init or remote creation, with the
//! template graft nested inside. Nothing here is fatal; every failure is
//! logged and the pipeline proceeds to finalization with whatever files are
//! present.

use crate::domain::{SetupDecision, StepOutcome};
use crate::ports::{HostPort, VcsPort};

/// Upstream template grafted onto every new workspace.
pub(super) const TEMPLATE_REMOTE: &str = "clean-code";
pub(super) const TEMPLATE_URL: &str = "git@github.com:state-less/clean-starter.git";
pub(super) const TEMPLATE_REF: &str = "clean-code/react-server";
const TEMPLATE_PATHSPEC: &str = "*";

/// Run the initialization strategy selected by the decision.
pub(super) fn initialize<V: VcsPort, H: HostPort>(
    vcs: &V,
    host: &H,
    decision: &SetupDecision,
) -> StepOutcome {
    match &decision.owner {
        Some(owner) if decision.create_repository => {
            let full_name = format!("{}/{}", owner.login, decision.repository_name);
            remote_path(vcs, host, &full_name)
        }
        _ => local_path(vcs),
    }
}

/// Initialize a fresh repository and graft the template onto it.
fn local_path<V: VcsPort>(vcs: &V) -> StepOutcome {
    tracing::info!("initializing repository");

    let mut outcome = StepOutcome::Success;
    if let Err(e) = vcs.init() {
        // Grafting does not strictly require a prior clean init.
        outcome = StepOutcome::tolerated("git init", &e);
    }

    match graft_template(vcs) {
        StepOutcome::Success => outcome,
        graft => graft,
    }
}

/// Create the remote repository, graft the template, and wire up origin.
fn remote_path<V: VcsPort, H: HostPort>(vcs: &V, host: &H, full_name: &str) -> StepOutcome {
    tracing::info!(repository = %full_name, "creating remote repository");

    let mut outcome = StepOutcome::Success;
    if let Err(e) = host.create_repository(full_name) {
        // The remote may already exist from a previous partial run.
        outcome = StepOutcome::tolerated(format!("gh repo create {full_name}"), &e);
    }

    if let Err(e) = vcs.init() {
        outcome = StepOutcome::tolerated("git init", &e);
    }

    if let graft @ StepOutcome::Tolerated { .. } = graft_template(vcs) {
        outcome = graft;
    }

    let origin_url = format!("git@github.com:{full_name}.git");
    tracing::info!(url = %origin_url, "adding origin remote");
    if let Err(e) = vcs.remote_add("origin", &origin_url) {
        outcome = StepOutcome::tolerated(format!("git remote add origin {origin_url}"), &e);
    }

    outcome
}

/// Graft the template onto the workspace: wire a temporary remote, fetch,
/// check the template reference out over the working tree, drop the remote.
///
/// A stale temporary remote from a prior failed run must not block a retry,
/// so the initial removal ignores absence outright.
pub(super) fn graft_template<V: VcsPort>(vcs: &V) -> StepOutcome {
    if vcs.remote_remove(TEMPLATE_REMOTE).is_ok() {
        tracing::debug!(remote = TEMPLATE_REMOTE, "removed stale template remote");
    }

    if let Err(e) = vcs.remote_add(TEMPLATE_REMOTE, TEMPLATE_URL) {
        return StepOutcome::tolerated(format!("git remote add {TEMPLATE_REMOTE}"), &e);
    }

    if let Err(e) = vcs.fetch_all() {
        return StepOutcome::tolerated("git fetch --all", &e);
    }

    if let Err(e) = vcs.checkout_ref(TEMPLATE_REF, TEMPLATE_PATHSPEC) {
        return StepOutcome::tolerated(format!("git checkout {TEMPLATE_REF}"), &e);
    }

    if let Err(e) = vcs.remote_remove(TEMPLATE_REMOTE) {
        return StepOutcome::tolerated(format!("git remote remove {TEMPLATE_REMOTE}"), &e);
    }

    StepOutcome::Success
}
