use serde::Deserialize;

/// An account or organization able to own a newly created repository.
///
/// Matches the shape returned by `gh api /user` and `gh api /user/orgs`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OwnerCandidate {
    pub login: String,
    #[serde(default)]
    pub description: Option<String>,
}
