//! README placeholder substitution.

/// Token replaced by the confirmed repository name.
pub const REPOSITORY_PLACEHOLDER: &str = "repo_name";
/// Token replaced by the chosen organization login.
pub const ORGANIZATION_PLACEHOLDER: &str = "repo_org";

/// Replace every occurrence of the placeholder tokens.
///
/// A `None` argument leaves the corresponding token untouched.
pub fn substitute(text: &str, repository: Option<&str>, organization: Option<&str>) -> String {
    let mut result = text.to_string();
    if let Some(repository) = repository {
        result = result.replace(REPOSITORY_PLACEHOLDER, repository);
    }
    if let Some(organization) = organization {
        result = result.replace(ORGANIZATION_PLACEHOLDER, organization);
    }
    result
}
