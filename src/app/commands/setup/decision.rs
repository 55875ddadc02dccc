//! Decision collection: the interactive phase that fixes the setup choices.

use crate::app::AppContext;
use crate::domain::{AppError, Capabilities, OwnerCandidate, SetupDecision, Workspace};
use crate::ports::{HostPort, InstallerPort, PromptPort, SelectItem, ToolLookup, VcsPort};

const CREATE_REPOSITORY_PROMPT: &str = "Do you want to create a repository on github?";
const SELECT_ORGANIZATION_PROMPT: &str = "Do you want to choose a organization?";
const OWNER_SELECT_PROMPT: &str = "Select an organization";
const REPOSITORY_NAME_PROMPT: &str = "Choose a repository name";

/// Collect the user's choices into an immutable [`SetupDecision`].
///
/// Without the hosting CLI no prompt is issued at all and the local path is
/// taken. A declined create-repository answer also short-circuits straight to
/// the local path; the organization prompt only runs after an affirmative
/// answer. Aborting any prompt is fatal.
pub(super) fn collect<V, H, P, I, L>(
    ctx: &AppContext<V, H, P, I, L>,
    workspace: &Workspace,
    capabilities: &Capabilities,
) -> Result<SetupDecision, AppError>
where
    V: VcsPort,
    H: HostPort,
    P: PromptPort,
    I: InstallerPort,
    L: ToolLookup,
{
    if !capabilities.has("gh") {
        tracing::warn!("'gh' is not installed; skipping repository creation");
        return Ok(SetupDecision::local(workspace.dir_name()));
    }

    let create_repository = ctx
        .prompt()
        .confirm(CREATE_REPOSITORY_PROMPT, true)?
        .ok_or(AppError::Cancelled)?;

    if !create_repository {
        return Ok(SetupDecision::local(workspace.dir_name()));
    }

    let select_organization = ctx
        .prompt()
        .confirm(SELECT_ORGANIZATION_PROMPT, false)?
        .ok_or(AppError::Cancelled)?;

    let candidates = resolve_owner_candidates(ctx.host())?;

    let owner = if select_organization {
        let items: Vec<SelectItem> = candidates
            .iter()
            .map(|candidate| SelectItem {
                label: candidate.login.clone(),
                description: candidate.description.clone(),
            })
            .collect();

        let index =
            ctx.prompt().select(OWNER_SELECT_PROMPT, &items)?.ok_or(AppError::Cancelled)?;
        candidates[index].clone()
    } else {
        // The personal account is always the first candidate.
        candidates[0].clone()
    };

    // The confirmed answer is the name used everywhere afterwards, even when
    // the user accepted the default verbatim.
    let repository_name = ctx
        .prompt()
        .input(REPOSITORY_NAME_PROMPT, workspace.dir_name())?
        .ok_or(AppError::Cancelled)?;

    Ok(SetupDecision {
        create_repository: true,
        select_organization,
        owner: Some(owner),
        repository_name,
    })
}

/// Query the provider for the viable owners of a new repository: the
/// authenticated user first, then organizations in provider order.
pub(super) fn resolve_owner_candidates<H: HostPort>(
    host: &H,
) -> Result<Vec<OwnerCandidate>, AppError> {
    let user = host.authenticated_user()?;
    let organizations = host.organizations()?;

    let mut candidates = Vec::with_capacity(1 + organizations.len());
    candidates.push(user);
    candidates.extend(organizations);
    Ok(candidates)
}
