use super::OwnerCandidate;

/// User choices captured once after the prompts resolve.
///
/// Constructed by the decision-collection phase and passed by reference to
/// every later step; no step mutates it.
#[derive(Debug, Clone)]
pub struct SetupDecision {
    /// Create a repository on the hosting provider.
    pub create_repository: bool,
    /// An explicit organization was chosen as the owner.
    pub select_organization: bool,
    /// The chosen owner; `Some` exactly on the remote path.
    pub owner: Option<OwnerCandidate>,
    /// The confirmed repository name. Defaults to the workspace directory
    /// base name when the name prompt never ran.
    pub repository_name: String,
}

impl SetupDecision {
    /// Decision for the local-only path: no remote repository, no owner.
    pub fn local(repository_name: impl Into<String>) -> Self {
        Self {
            create_repository: false,
            select_organization: false,
            owner: None,
            repository_name: repository_name.into(),
        }
    }

    /// Fully qualified `<owner-login>/<repository-name>`, when an owner was
    /// resolved.
    pub fn full_repository_name(&self) -> Option<String> {
        self.owner.as_ref().map(|owner| format!("{}/{}", owner.login, self.repository_name))
    }
}
