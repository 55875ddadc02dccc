//! Workspace finalization: environment file, README, manifest.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, SetupDecision, StepOutcome, Workspace, manifest, readme};

const ENV_TEMPLATE_FILE: &str = ".env.template";
const ENV_FILE: &str = ".env";
const README_FILE: &str = "README.md";
const BLANK_README_FILE: &str = "BLANK_README.md";
const MANIFEST_FILE: &str = "package.json";

/// Finalize the scaffolded files.
///
/// Every step tolerates its own input being absent; only an unusable manifest
/// aborts, because a project with a broken manifest cannot be trusted.
pub(super) fn run(workspace: &Workspace, decision: &SetupDecision) -> StepOutcome {
    let root = workspace.root();

    rename_env_template(root);
    replace_readme(root);
    substitute_placeholders(root, decision);

    match rewrite_manifest(root, decision) {
        Ok(()) => StepOutcome::Success,
        Err(error) => StepOutcome::Fatal(error),
    }
}

fn rename_env_template(root: &Path) {
    let template = root.join(ENV_TEMPLATE_FILE);
    if !template.exists() {
        tracing::info!("no {ENV_TEMPLATE_FILE} present; skipping environment file");
        return;
    }

    tracing::info!("creating environment file from template");
    if let Err(e) = fs::rename(&template, root.join(ENV_FILE)) {
        tracing::warn!(details = %e, "failed to rename {ENV_TEMPLATE_FILE}");
    }
}

fn replace_readme(root: &Path) {
    // The checked-in README belongs to the template repository itself; the
    // blank variant becomes the project's own.
    let _ = fs::remove_file(root.join(README_FILE));

    let blank = root.join(BLANK_README_FILE);
    if !blank.exists() {
        return;
    }
    if let Err(e) = fs::rename(&blank, root.join(README_FILE)) {
        tracing::warn!(details = %e, "failed to rename {BLANK_README_FILE}");
    }
}

fn substitute_placeholders(root: &Path, decision: &SetupDecision) {
    if !decision.create_repository && !decision.select_organization {
        return;
    }

    let path = root.join(README_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(details = %e, "failed to read {README_FILE} for substitution");
            return;
        }
    };

    let repository = decision.create_repository.then_some(decision.repository_name.as_str());
    let organization = decision
        .select_organization
        .then(|| decision.owner.as_ref().map(|owner| owner.login.as_str()))
        .flatten();

    tracing::info!("populating placeholders in {README_FILE}");
    let substituted = readme::substitute(&text, repository, organization);
    if let Err(e) = fs::write(&path, substituted) {
        tracing::warn!(details = %e, "failed to write {README_FILE}");
    }
}

fn rewrite_manifest(root: &Path, decision: &SetupDecision) -> Result<(), AppError> {
    let path = root.join(MANIFEST_FILE);
    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => {
            // The graft may have failed and left no manifest behind; that was
            // already reported as a tolerated failure.
            tracing::warn!(details = %e, "failed to read {MANIFEST_FILE}");
            return Ok(());
        }
    };

    tracing::info!("updating name in {MANIFEST_FILE}");
    let rewritten = manifest::rewrite_name(&source, &decision.repository_name)?;
    fs::write(&path, rewritten)?;
    Ok(())
}
